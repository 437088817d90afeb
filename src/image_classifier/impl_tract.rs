use crate::image_classifier::interface::{ImageClassifier, ImageFile, Label, Prediction, Tier};
use crate::image_classifier::tract::image::{
    arg_max, input_geometry, resize_image_to_tensor, to_probabilities, TensorLayout,
};
use crate::library::logger::interface::Logger;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tract_onnx::prelude::*;

type RunnableModel = SimplePlan<TypedFact, Box<dyn TypedOp>, TypedModel>;

#[derive(Debug, Clone)]
pub struct LocalModelConfig {
    pub model_dirs: Vec<PathBuf>,
    pub model_file_name: String,
    pub labels_file_name: String,
    pub default_input_size: u32,
}

struct LoadedModel {
    plan: RunnableModel,
    labels: Vec<String>,
    input_size: u32,
    layout: TensorLayout,
}

/// Runs an ONNX classifier found in the first candidate directory that loads.
pub struct TractClassifier {
    config: LocalModelConfig,
    loaded: Mutex<Option<Arc<LoadedModel>>>,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl TractClassifier {
    pub fn new(config: LocalModelConfig, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            config,
            loaded: Mutex::new(None),
            logger: logger.with_namespace("local"),
        }
    }

    fn candidate_model_paths(&self) -> impl Iterator<Item = (&PathBuf, PathBuf)> {
        self.config
            .model_dirs
            .iter()
            .map(|dir| (dir, dir.join(&self.config.model_file_name)))
    }

    fn ensure_loaded(&self) -> Result<Arc<LoadedModel>, Box<dyn std::error::Error + Send + Sync>> {
        let mut loaded = self
            .loaded
            .lock()
            .map_err(|_| "local model cache lock poisoned")?;

        if let Some(model) = loaded.as_ref() {
            return Ok(model.clone());
        }

        let model = Arc::new(self.load_first_candidate()?);
        *loaded = Some(model.clone());
        Ok(model)
    }

    fn load_first_candidate(&self) -> Result<LoadedModel, Box<dyn std::error::Error + Send + Sync>> {
        let mut last_error: Option<Box<dyn std::error::Error + Send + Sync>> = None;

        for (dir, model_path) in self.candidate_model_paths() {
            if !model_path.is_file() {
                continue;
            }

            match self.load_from(dir, &model_path) {
                Ok(model) => {
                    let _ = self.logger.info(&format!(
                        "Loaded {} ({} labels, input {}px {:?})",
                        model_path.display(),
                        model.labels.len(),
                        model.input_size,
                        model.layout
                    ));
                    return Ok(model);
                }
                Err(e) => {
                    let _ = self
                        .logger
                        .error(&format!("Failed to load {}: {}", model_path.display(), e));
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| {
            let tried: Vec<String> = self
                .candidate_model_paths()
                .map(|(_, path)| path.display().to_string())
                .collect();
            format!("Model not found (tried {})", tried.join(", ")).into()
        }))
    }

    fn load_from(
        &self,
        dir: &Path,
        model_path: &Path,
    ) -> Result<LoadedModel, Box<dyn std::error::Error + Send + Sync>> {
        let model = tract_onnx::onnx().model_for_path(model_path)?;

        let declared_dims = model
            .clone()
            .into_typed()
            .ok()
            .and_then(|typed| typed.input_fact(0).ok().map(concrete_dims));

        let (input_size, layout) = declared_dims
            .as_deref()
            .and_then(input_geometry)
            .unwrap_or((self.config.default_input_size, TensorLayout::Nhwc));

        let plan = model
            .with_input_fact(0, f32::fact(layout.shape(input_size)).into())?
            .into_optimized()?
            .into_runnable()?;

        let output_classes = plan
            .model()
            .output_fact(0)
            .ok()
            .and_then(|fact| fact.shape.as_concrete().and_then(|shape| shape.last().copied()))
            .unwrap_or(0);

        let labels_path = dir.join(&self.config.labels_file_name);
        let labels = match read_labels(&labels_path, output_classes) {
            Ok(labels) if !labels.is_empty() => labels,
            Ok(_) | Err(_) => {
                let _ = self.logger.info(&format!(
                    "No labels at {}, using {} placeholder labels",
                    labels_path.display(),
                    output_classes
                ));
                placeholder_labels(output_classes)
            }
        };

        Ok(LoadedModel {
            plan,
            labels,
            input_size,
            layout,
        })
    }
}

impl ImageClassifier for TractClassifier {
    fn tier(&self) -> Tier {
        Tier::Local
    }

    fn is_available(&self) -> bool {
        self.candidate_model_paths().any(|(_, path)| path.is_file())
    }

    fn classify(
        &self,
        image: &ImageFile,
    ) -> Result<Option<Prediction>, Box<dyn std::error::Error + Send + Sync>> {
        let model = self.ensure_loaded()?;

        let decoded = image::load_from_memory(&image.bytes)?;
        let input = resize_image_to_tensor(&decoded, model.input_size, model.layout)?;

        // input and outputs are dropped at the end of this scope on every path
        let outputs = model.plan.run(tvec!(input.into_tvalue()))?;
        let output = outputs.first().ok_or("model returned no outputs")?;
        let scores: Vec<f32> = output.to_array_view::<f32>()?.iter().copied().collect();

        let probabilities = to_probabilities(&scores);
        let (index, confidence) = arg_max(&probabilities).ok_or("model returned an empty output")?;

        let label = label_for(&model.labels, index);
        let _ = self
            .logger
            .info(&format!("Prediction: {} ({:.3})", label, confidence));

        Ok(Some(Prediction {
            label: Label::from_raw(&label),
            confidence: confidence.clamp(0.0, 1.0),
            info: None,
            tier: Tier::Local,
        }))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LabelsFile {
    List(Vec<String>),
    IndexMap(BTreeMap<String, String>),
}

/// Per-dimension sizes of a model input; `None` for symbolic ones such as a
/// dynamic batch.
fn concrete_dims(fact: &TypedFact) -> Vec<Option<usize>> {
    fact.shape
        .dims()
        .iter()
        .map(|dim| dim.to_i64().ok().and_then(|size| usize::try_from(size).ok()))
        .collect()
}

/// Accepts either `["Gir", ...]` or the `{"0": "Gir", ...}` index map training emits.
/// Index map entries at or past `class_count` are ignored; with an unknown
/// count (0) the map's own size is the limit.
fn read_labels(
    path: &Path,
    class_count: usize,
) -> Result<Vec<String>, Box<dyn std::error::Error + Send + Sync>> {
    let contents = std::fs::read_to_string(path)?;

    match serde_json::from_str::<LabelsFile>(&contents)? {
        LabelsFile::List(labels) => Ok(labels),
        LabelsFile::IndexMap(map) => {
            let limit = if class_count > 0 { class_count } else { map.len() };
            let mut indexed: Vec<(usize, String)> = map
                .into_iter()
                .filter_map(|(idx, label)| idx.parse::<usize>().ok().map(|idx| (idx, label)))
                .filter(|(idx, _)| *idx < limit)
                .collect();
            indexed.sort_by_key(|(idx, _)| *idx);

            let len = indexed.last().map(|(idx, _)| idx + 1).unwrap_or(0);
            let mut labels = placeholder_labels(len);
            for (idx, label) in indexed {
                labels[idx] = label;
            }
            Ok(labels)
        }
    }
}

fn placeholder_labels(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("Class {}", i)).collect()
}

fn label_for(labels: &[String], index: usize) -> String {
    labels
        .get(index)
        .cloned()
        .unwrap_or_else(|| format!("Class {}", index))
}
