use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Configuration loading failed: {0}")]
    Load(#[from] ConfigError),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DisplaySettings {
    pub item_count_suffix: String,
    pub checkout_prompt: String,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            item_count_suffix: "шт.".to_string(),
            checkout_prompt: "You have unsaved changes. Save them before checkout?".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub display: DisplaySettings,
}

impl Settings {
    pub fn load(config_path: &Option<String>) -> Result<Self, SettingsError> {
        let default = Self::default();

        match Self::load_from_file(config_path) {
            Ok(settings) => Ok(settings),
            Err(err) if config_path.is_none() => {
                warn!("Could not read config file: {err}. Using default configuration.",);
                Ok(default)
            }
            Err(err) => Err(err),
        }
    }

    fn load_from_file(config_path: &Option<String>) -> Result<Self, SettingsError> {
        let path = config_path.as_deref().unwrap_or("config.toml");

        let config = Config::builder()
            .add_source(File::with_name(path).required(config_path.is_some()))
            .build()?
            .try_deserialize::<Settings>()?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reads_display_settings_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[display]\nitem_count_suffix = \"pcs\"").unwrap();

        let path = file.path().to_string_lossy().to_string();
        let settings = Settings::load(&Some(path)).unwrap();

        assert_eq!(settings.display.item_count_suffix, "pcs");
        assert_eq!(
            settings.display.checkout_prompt,
            DisplaySettings::default().checkout_prompt
        );
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml").to_string_lossy().to_string();

        assert!(matches!(
            Settings::load(&Some(path)),
            Err(SettingsError::Load(_))
        ));
    }
}
