use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

use super::error::ConfigError;

pub const DEFAULT_SETTINGS_FILE: &str = "Settings_Mudae.json";

/// Startup settings that seed the preference set.
///
/// Unknown keys (the bot token, for one) are ignored.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct Settings {
    #[serde(default)]
    pub series_list: Vec<String>,
    /// Lower-cased on load.
    #[serde(default)]
    pub namelist: Vec<String>,
    /// Not read by the pipeline; kept for whoever renders notifications.
    #[serde(default)]
    pub emoji_list: Vec<String>,
    #[serde(default)]
    pub min_kak: i64,
}

impl Settings {
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        let mut settings: Settings = serde_json::from_str(content)?;
        settings.namelist = settings
            .namelist
            .iter()
            .map(|name| name.to_lowercase())
            .collect();
        Ok(settings)
    }
}

pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    /// A missing or unparsable file is an error: there is no sane default seed.
    pub fn load(&self) -> Result<Settings, ConfigError> {
        let content = fs::read_to_string(&self.config_path).map_err(|source| ConfigError::Read {
            path: self.config_path.clone(),
            source,
        })?;

        Settings::from_json(&content).map_err(|source| ConfigError::Parse {
            path: self.config_path.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_lowercases_names() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(DEFAULT_SETTINGS_FILE),
            r#"{
                "token": "secret",
                "series_list": ["Re:Zero"],
                "namelist": ["Rem", "EMILIA"],
                "emoji_list": ["kakeraP"],
                "min_kak": 200
            }"#,
        )
        .unwrap();

        let settings = ConfigManager::new(dir.path().join(DEFAULT_SETTINGS_FILE)).load().unwrap();
        assert_eq!(settings.namelist, vec!["rem".to_string(), "emilia".to_string()]);
        assert_eq!(settings.series_list, vec!["Re:Zero".to_string()]);
        assert_eq!(settings.emoji_list, vec!["kakeraP".to_string()]);
        assert_eq!(settings.min_kak, 200);
    }

    #[test]
    fn test_load_defaults_missing_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{}").unwrap();

        let settings = ConfigManager::new(&path).load().unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.min_kak, 0);
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = tempdir().unwrap();
        let err = ConfigManager::new(dir.path().join(DEFAULT_SETTINGS_FILE)).load().unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"min_kak": "lots"}"#).unwrap();

        let err = ConfigManager::new(&path).load().unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("settings.json"));
    }
}
