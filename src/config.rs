//! Configuration file load/save (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::suggest::DEFAULT_SUGGESTION_LIMIT;

/// thaikey settings
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ThaikeyConfig {
    /// Maximum number of suggestions listed
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: usize,
    /// JSON dictionary appended after the built-in entries
    #[serde(default)]
    pub user_dictionary: Option<String>,
    /// Print weights next to suggestions
    #[serde(default)]
    pub show_weights: bool,
}

fn default_suggestion_limit() -> usize {
    DEFAULT_SUGGESTION_LIMIT
}

impl Default for ThaikeyConfig {
    fn default() -> Self {
        Self {
            suggestion_limit: default_suggestion_limit(),
            user_dictionary: None,
            show_weights: false,
        }
    }
}

/// Config file path: $XDG_CONFIG_HOME/thaikey/config.json, else ~/.config/thaikey/config.json
pub fn config_path() -> PathBuf {
    let absolute_dir = |var: &str| {
        std::env::var_os(var)
            .map(PathBuf::from)
            .filter(|p| p.is_absolute() && p.is_dir())
    };
    let base = absolute_dir("XDG_CONFIG_HOME")
        .or_else(|| absolute_dir("HOME").map(|home| home.join(".config")))
        // no usable HOME
        .unwrap_or_else(|| PathBuf::from("/var/tmp").join(".config"));
    base.join("thaikey").join("config.json")
}

/// Load the config file (defaults when missing or unparseable)
pub fn load_config() -> ThaikeyConfig {
    load_config_from(&config_path())
}

/// Load a config file at `path`; a missing file yields defaults, a malformed one is logged
pub fn load_config_from(path: &Path) -> ThaikeyConfig {
    match fs::read_to_string(path) {
        Ok(content) => match parse_config(&content) {
            Ok(config) => {
                log::info!("loaded {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("ignoring {}: {}", path.display(), e);
                ThaikeyConfig::default()
            }
        },
        Err(_) => ThaikeyConfig::default(),
    }
}

/// Parse config JSON
pub fn parse_config(content: &str) -> Result<ThaikeyConfig, String> {
    serde_json::from_str(content).map_err(|e| format!("config parse failed: {}", e))
}

/// Save the config file
pub fn save_config(config: &ThaikeyConfig) -> Result<PathBuf, String> {
    let path = config_path();
    save_config_to(config, &path)?;
    Ok(path)
}

/// Write `config` as pretty JSON to `path`, creating parent directories
pub fn save_config_to(config: &ThaikeyConfig, path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| format!("cannot create {}: {}", parent.display(), e))?;
    }
    let json = serde_json::to_string_pretty(config).map_err(|e| format!("serialization failed: {}", e))?;
    fs::write(path, json).map_err(|e| format!("cannot write {}: {}", path.display(), e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ThaikeyConfig::default();
        assert_eq!(config.suggestion_limit, 8);
        assert_eq!(config.user_dictionary, None);
        assert!(!config.show_weights);
    }

    #[test]
    fn test_serialize_deserialize() {
        let config = ThaikeyConfig {
            suggestion_limit: 4,
            user_dictionary: Some("/tmp/words.json".into()),
            show_weights: true,
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed = parse_config(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_backward_compat_missing_field() {
        let config = parse_config(r#"{"show_weights": true}"#).unwrap();
        assert_eq!(config.suggestion_limit, 8);
        assert_eq!(config.user_dictionary, None);
        assert!(config.show_weights);
    }

    #[test]
    fn test_invalid_config() {
        assert!(parse_config("{").is_err());
        assert!(parse_config(r#"{"suggestion_limit": "many"}"#).is_err());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = ThaikeyConfig {
            suggestion_limit: 3,
            user_dictionary: Some("words.json".into()),
            show_weights: true,
        };

        save_config_to(&config, &path).unwrap();
        assert_eq!(load_config_from(&path), config);
    }

    #[test]
    fn test_load_missing_or_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        assert_eq!(load_config_from(&path), ThaikeyConfig::default());

        fs::write(&path, "not json").unwrap();
        assert_eq!(load_config_from(&path), ThaikeyConfig::default());
    }

    #[test]
    fn test_save_into_file_path_fails() {
        let file = tempfile::NamedTempFile::new().unwrap();
        // parent "directory" is a regular file
        let path = file.path().join("config.json");
        assert!(save_config_to(&ThaikeyConfig::default(), &path).is_err());
    }

    #[test]
    fn test_config_path() {
        let path = config_path();
        assert!(path.ends_with("thaikey/config.json"));
        assert!(path.is_absolute());
    }
}
