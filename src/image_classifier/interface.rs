use serde::Deserialize;
use std::fmt;
use std::path::Path;

/// Wire value the prediction service uses for "not a subject this classifier handles".
pub const NOT_APPLICABLE_LABEL: &str = "Not a cow or buffalo";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Remote,
    Local,
    Demo,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::Remote => write!(f, "remote"),
            Tier::Local => write!(f, "local"),
            Tier::Demo => write!(f, "demo"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Label {
    Breed(String),
    NotApplicable,
}

impl Label {
    pub fn from_raw(raw: &str) -> Self {
        if raw == NOT_APPLICABLE_LABEL {
            Label::NotApplicable
        } else {
            Label::Breed(raw.to_string())
        }
    }
}

/// Structured breed details the prediction service may attach to a result.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BreedInfo {
    pub description: Option<String>,
    #[serde(deserialize_with = "list_or_null")]
    pub characteristics: Vec<String>,
    #[serde(deserialize_with = "list_or_null")]
    pub fodder_requirements: Vec<String>,
    #[serde(deserialize_with = "list_or_null")]
    pub government_schemes: Vec<String>,
    #[serde(deserialize_with = "list_or_null")]
    pub best_practices: Vec<String>,
}

fn list_or_null<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub label: Label,
    /// Probability in [0, 1].
    pub confidence: f32,
    pub info: Option<BreedInfo>,
    pub tier: Tier,
}

/// An image picked by the user, kept as raw bytes until a tier decodes it.
#[derive(Clone, PartialEq)]
pub struct ImageFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl fmt::Debug for ImageFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageFile")
            .field("name", &self.name)
            .field("bytes", &self.bytes.len())
            .finish()
    }
}

impl ImageFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    pub fn read(path: &Path) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let bytes = std::fs::read(path)?;
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload.jpg".to_string());
        Ok(Self { name, bytes })
    }
}

pub trait ImageClassifier {
    fn tier(&self) -> Tier;

    /// Whether this tier can run in the current environment at all.
    fn is_available(&self) -> bool {
        true
    }

    /// `Ok(None)` means the tier answered but had no prediction to give.
    fn classify(
        &self,
        image: &ImageFile,
    ) -> Result<Option<Prediction>, Box<dyn std::error::Error + Send + Sync>>;
}
