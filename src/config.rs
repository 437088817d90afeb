use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base: String,
    pub remote_timeout: Duration,
    pub model_dirs: Vec<PathBuf>,
    pub model_file_name: String,
    pub labels_file_name: String,
    pub default_input_size: u32,
    pub demo_fallback: bool,
    pub preferences_path: PathBuf,
    pub logger_timezone: chrono::FixedOffset,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            remote_timeout: Duration::from_secs(20),
            model_dirs: vec![
                PathBuf::from("train"),
                PathBuf::from("models"),
                PathBuf::from("assets/train"),
            ],
            model_file_name: "model.onnx".to_string(),
            labels_file_name: "labels.json".to_string(),
            default_input_size: 224,
            demo_fallback: true,
            preferences_path: PathBuf::from("preferences.json"),
            logger_timezone: india_standard_time(),
        }
    }
}

impl Config {
    /// Defaults overlaid with `IDENTIFY_*` / `BREEDS_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(api_base) = non_empty(lookup("IDENTIFY_API")) {
            config.api_base = api_base.trim_end_matches('/').to_string();
        }

        if let Some(secs) = non_empty(lookup("IDENTIFY_TIMEOUT_SECS")) {
            if let Ok(secs) = secs.parse::<u64>() {
                config.remote_timeout = Duration::from_secs(secs);
            }
        }

        if let Some(dirs) = non_empty(lookup("IDENTIFY_MODEL_DIRS")) {
            let dirs: Vec<PathBuf> = dirs
                .split(',')
                .map(str::trim)
                .filter(|dir| !dir.is_empty())
                .map(PathBuf::from)
                .collect();
            if !dirs.is_empty() {
                config.model_dirs = dirs;
            }
        }

        if let Some(demo) = non_empty(lookup("IDENTIFY_DEMO")) {
            config.demo_fallback = !matches!(demo.as_str(), "0" | "false" | "off");
        }

        if let Some(path) = non_empty(lookup("BREEDS_PREFERENCES")) {
            config.preferences_path = PathBuf::from(path);
        }

        config
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn india_standard_time() -> chrono::FixedOffset {
    use chrono::Offset;
    chrono::FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap_or_else(|| chrono::Utc.fix())
}
