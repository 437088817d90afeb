use image::{imageops, DynamicImage};
use tract_onnx::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TensorLayout {
    /// `[1, 3, S, S]`
    Nchw,
    /// `[1, S, S, 3]`
    Nhwc,
}

impl TensorLayout {
    pub fn shape(&self, size: u32) -> [usize; 4] {
        let size = size as usize;
        match self {
            TensorLayout::Nchw => [1, 3, size, size],
            TensorLayout::Nhwc => [1, size, size, 3],
        }
    }
}

/// Square input size and layout read from a model input shape, if it has one.
/// `None` marks a symbolic dimension; the batch may be symbolic, the rest may not.
pub fn input_geometry(dims: &[Option<usize>]) -> Option<(u32, TensorLayout)> {
    match dims {
        [_, Some(3), Some(h), Some(w)] if h == w && *h > 0 => {
            Some((u32::try_from(*h).ok()?, TensorLayout::Nchw))
        }
        [_, Some(h), Some(w), Some(3)] if h == w && *h > 0 => {
            Some((u32::try_from(*h).ok()?, TensorLayout::Nhwc))
        }
        _ => None,
    }
}

/// Stretches to `size`×`size` (no letterboxing) and scales pixels to [0, 1].
pub fn resize_image_to_tensor(
    image: &DynamicImage,
    size: u32,
    layout: TensorLayout,
) -> Result<Tensor, Box<dyn std::error::Error + Send + Sync>> {
    let resized = image.resize_exact(size, size, imageops::FilterType::Triangle);
    let rgb = resized.to_rgb8();

    let tensor = match layout {
        TensorLayout::Nchw => tract_ndarray::Array4::from_shape_fn(
            (1, 3, size as usize, size as usize),
            |(_, c, y, x)| rgb.get_pixel(x as u32, y as u32)[c] as f32 / 255.0,
        ),
        TensorLayout::Nhwc => tract_ndarray::Array4::from_shape_fn(
            (1, size as usize, size as usize, 3),
            |(_, y, x, c)| rgb.get_pixel(x as u32, y as u32)[c] as f32 / 255.0,
        ),
    };

    Ok(tensor.into_tensor())
}

/// Leaves an existing probability distribution alone, otherwise applies softmax.
pub fn to_probabilities(scores: &[f32]) -> Vec<f32> {
    if scores.is_empty() {
        return vec![];
    }

    let in_range = scores.iter().all(|s| (0.0..=1.0).contains(s));
    let sum: f32 = scores.iter().sum();
    if in_range && (sum - 1.0).abs() < 1e-3 {
        return scores.to_vec();
    }

    let max = scores.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
    let exps: Vec<f32> = scores.iter().map(|s| (s - max).exp()).collect();
    let total: f32 = exps.iter().sum();
    exps.iter().map(|e| e / total).collect()
}

/// Index and value of the highest score; the first one wins ties.
pub fn arg_max(scores: &[f32]) -> Option<(usize, f32)> {
    scores
        .iter()
        .copied()
        .enumerate()
        .fold(None, |best, (idx, score)| match best {
            Some((_, best_score)) if best_score >= score => best,
            _ => Some((idx, score)),
        })
}
