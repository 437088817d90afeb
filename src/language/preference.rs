use crate::language::Language;
use crate::library::logger::interface::Logger;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

#[derive(Debug, Default, Serialize, Deserialize)]
struct PreferencesFile {
    #[serde(rename = "siteLang", default, skip_serializing_if = "Option::is_none")]
    site_lang: Option<String>,
}

/// The single persisted preference: the selected language.
///
/// Read lazily on first access and cached; written only through `set`.
pub struct LanguagePreference {
    path: PathBuf,
    logger: Arc<dyn Logger + Send + Sync>,
    current: Mutex<Option<Language>>,
}

impl LanguagePreference {
    pub fn new(path: impl Into<PathBuf>, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            path: path.into(),
            logger: logger.with_namespace("preference"),
            current: Mutex::new(None),
        }
    }

    pub fn get(&self) -> Language {
        let mut current = match self.current.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        if let Some(language) = *current {
            return language;
        }

        let language = self.read_from_disk();
        *current = Some(language);
        language
    }

    pub fn set(&self, language: Language) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let contents = serde_json::to_string_pretty(&PreferencesFile {
            site_lang: Some(language.code().to_string()),
        })?;
        write_atomically(&self.path, contents.as_bytes())?;

        let mut current = match self.current.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *current = Some(language);

        let _ = self
            .logger
            .info(&format!("Saved language preference: {}", language.code()));
        Ok(())
    }

    fn read_from_disk(&self) -> Language {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(_) => return Language::default(),
        };

        match serde_json::from_str::<PreferencesFile>(&contents) {
            Ok(file) => match file.site_lang.as_deref() {
                Some(code) => Language::from_code(code).unwrap_or_else(|| {
                    let _ = self
                        .logger
                        .info(&format!("Ignoring unsupported language code {:?}", code));
                    Language::default()
                }),
                None => Language::default(),
            },
            Err(e) => {
                let _ = self.logger.error(&format!(
                    "Unreadable preferences file {}: {}",
                    self.path.display(),
                    e
                ));
                Language::default()
            }
        }
    }
}

fn write_atomically(path: &Path, contents: &[u8]) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    std::fs::create_dir_all(&dir)?;

    let mut file = tempfile::NamedTempFile::new_in(&dir)?;
    file.write_all(contents)?;
    file.flush()?;
    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::logger::impl_console::LoggerConsole;

    fn logger() -> Arc<dyn Logger + Send + Sync> {
        Arc::new(LoggerConsole::new(crate::config::Config::default().logger_timezone))
    }

    #[test]
    fn test_missing_file_uses_default() {
        let dir = tempfile::tempdir().unwrap();
        let preference = LanguagePreference::new(dir.path().join("prefs.json"), logger());
        assert_eq!(preference.get(), Language::English);
    }

    #[test]
    fn test_set_then_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("prefs.json");

        let preference = LanguagePreference::new(&path, logger());
        preference.set(Language::Marathi).unwrap();
        assert_eq!(preference.get(), Language::Marathi);

        let reloaded = LanguagePreference::new(&path, logger());
        assert_eq!(reloaded.get(), Language::Marathi);

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"siteLang\": \"mr\""));
    }

    #[test]
    fn test_unsupported_stored_code_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, r#"{"siteLang":"fr"}"#).unwrap();

        let preference = LanguagePreference::new(&path, logger());
        assert_eq!(preference.get(), Language::English);
    }

    #[test]
    fn test_corrupt_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "not json").unwrap();

        let preference = LanguagePreference::new(&path, logger());
        assert_eq!(preference.get(), Language::English);
    }
}
