// ============================================================
// Layer 6 — Config Store
// ============================================================
// Saves and restores the application config as JSON.
//
// Every field has a default, so a config file only needs the
// keys it wants to change:
//
//   { "max_sentences": 5, "stopwords": "iso" }
//
// Reference: serde_json crate documentation
//            Rust Book §9 (Error Handling)

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::application::config::AppConfig;

pub struct ConfigStore;

impl ConfigStore {
    /// Load an AppConfig from a JSON file.
    pub fn load(path: &Path) -> Result<AppConfig> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Cannot read config from '{}'", path.display()))?;

        let config: AppConfig = serde_json::from_str(&json)
            .with_context(|| format!("Invalid config in '{}'", path.display()))?;

        tracing::debug!("Loaded config from '{}'", path.display());
        Ok(config)
    }

    /// Save an AppConfig as pretty-printed JSON.
    pub fn save(path: &Path, config: &AppConfig) -> Result<()> {
        // serde_json::to_string_pretty adds indentation for readability
        let json = serde_json::to_string_pretty(config)?;

        fs::write(path, json)
            .with_context(|| format!("Cannot write config to '{}'", path.display()))?;

        tracing::info!("Saved config to '{}'", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::stopwords::StopwordList;
    use crate::summarizer::scorer::MatchMode;

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let config = AppConfig {
            max_sentences: 3,
            resource_dir: Some(dir.path().to_path_buf()),
            stopwords: StopwordList::Iso,
            match_mode: MatchMode::Token,
        };

        ConfigStore::save(&path, &config).unwrap();
        assert_eq!(ConfigStore::load(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "max_sentences": 5 }"#).unwrap();

        let config = ConfigStore::load(&path).unwrap();
        assert_eq!(config.max_sentences, 5);
        assert_eq!(config.stopwords, StopwordList::Nltk);
        assert_eq!(config.match_mode, MatchMode::Substring);
        assert!(config.resource_dir.is_none());
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(ConfigStore::load(&dir.path().join("nope.json")).is_err());
    }
}
