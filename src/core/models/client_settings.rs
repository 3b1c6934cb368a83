use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::global_constants::{
    self, DEFAULT_JPEG_QUALITY, DEFAULT_RECOGNITION_BASE_URL, DEFAULT_REQUEST_TIMEOUT_SECONDS,
    LOG_TAG_SETTINGS,
};

fn default_base_url() -> String {
    DEFAULT_RECOGNITION_BASE_URL.to_string()
}

fn default_request_timeout_seconds() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECONDS
}

fn default_jpeg_quality() -> u8 {
    DEFAULT_JPEG_QUALITY
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_request_timeout_seconds")]
    pub request_timeout_seconds: u64,
    #[serde(default = "default_jpeg_quality")]
    pub jpeg_quality: u8,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_seconds: default_request_timeout_seconds(),
            jpeg_quality: default_jpeg_quality(),
        }
    }
}

impl ClientSettings {
    pub fn load() -> anyhow::Result<Self> {
        let settings_path = Self::get_settings_file_path()?;
        Self::load_from(&settings_path)
    }

    pub fn load_from(settings_path: &Path) -> anyhow::Result<Self> {
        if !settings_path.exists() {
            log::info!(
                "{} No settings file at {:?}, using defaults",
                LOG_TAG_SETTINGS,
                settings_path
            );
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(settings_path)
            .with_context(|| format!("failed to read settings from {:?}", settings_path))?;
        let settings: ClientSettings = serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse settings in {:?}", settings_path))?;
        let settings = settings.normalized();

        log::info!("{} Loaded settings from {:?}", LOG_TAG_SETTINGS, settings_path);
        log::debug!("{} Base URL: {}", LOG_TAG_SETTINGS, settings.base_url);
        log::debug!(
            "{} Request timeout: {}s",
            LOG_TAG_SETTINGS,
            settings.request_timeout_seconds
        );

        Ok(settings)
    }

    pub fn save(&self) -> anyhow::Result<PathBuf> {
        let settings_path = Self::get_settings_file_path()?;
        self.save_to(&settings_path)?;
        Ok(settings_path)
    }

    pub fn save_to(&self, settings_path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = settings_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(settings_path, contents)?;

        log::info!("{} Saved settings to {:?}", LOG_TAG_SETTINGS, settings_path);
        Ok(())
    }

    pub fn with_overrides(mut self, base_url: Option<String>, timeout_seconds: Option<u64>) -> Self {
        if let Some(base_url) = base_url {
            log::debug!("{} Overriding base URL: {}", LOG_TAG_SETTINGS, base_url);
            self.base_url = base_url;
        }
        if let Some(timeout_seconds) = timeout_seconds {
            self.request_timeout_seconds = timeout_seconds;
        }
        self.normalized()
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }

    fn normalized(mut self) -> Self {
        self.jpeg_quality = self.jpeg_quality.clamp(1, 100);
        if self.request_timeout_seconds == 0 {
            log::warn!(
                "{} Request timeout of 0s is not allowed, using {}s",
                LOG_TAG_SETTINGS,
                DEFAULT_REQUEST_TIMEOUT_SECONDS
            );
            self.request_timeout_seconds = DEFAULT_REQUEST_TIMEOUT_SECONDS;
        }
        self
    }

    fn get_settings_file_path() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join(global_constants::SETTINGS_DIRECTORY_NAME);

        Ok(config_dir.join(global_constants::SETTINGS_FILE_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_settings_default_values() {
        let settings = ClientSettings::default();

        assert_eq!(settings.base_url, "https://your.face.recognition.api.url/");
        assert_eq!(settings.request_timeout_seconds, 30);
        assert_eq!(settings.jpeg_quality, 100);
    }

    #[test]
    fn test_client_settings_deserialization_with_missing_fields() {
        let json = r#"{ "base_url": "http://localhost:8080/" }"#;

        let settings: ClientSettings = serde_json::from_str(json).unwrap();

        assert_eq!(settings.base_url, "http://localhost:8080/");
        assert_eq!(settings.request_timeout_seconds, 30);
        assert_eq!(settings.jpeg_quality, 100);
    }

    #[test]
    fn test_overrides_replace_loaded_values() {
        let settings = ClientSettings::default()
            .with_overrides(Some("http://10.0.0.2:5000".to_string()), Some(5));

        assert_eq!(settings.base_url, "http://10.0.0.2:5000");
        assert_eq!(settings.request_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_overrides_keep_values_when_absent() {
        let settings = ClientSettings::default().with_overrides(None, None);

        assert_eq!(settings, ClientSettings::default());
    }

    #[test]
    fn test_zero_timeout_falls_back_to_default() {
        let settings = ClientSettings::default().with_overrides(None, Some(0));

        assert_eq!(settings.request_timeout_seconds, 30);
    }

    #[test]
    fn test_load_from_missing_file_uses_defaults() {
        let missing = std::env::temp_dir().join("face-recog-client-test-missing/settings.json");
        std::fs::remove_file(&missing).ok();

        let settings = ClientSettings::load_from(&missing).unwrap();

        assert_eq!(settings, ClientSettings::default());
    }

    #[test]
    fn test_client_settings_save_and_load_roundtrip() {
        let temp_dir = std::env::temp_dir().join("face-recog-client-test-roundtrip");
        let settings_path = temp_dir.join("settings.json");

        let original_settings = ClientSettings {
            base_url: "http://127.0.0.1:9000/api/".to_string(),
            request_timeout_seconds: 12,
            jpeg_quality: 85,
        };

        original_settings.save_to(&settings_path).unwrap();
        let loaded_settings = ClientSettings::load_from(&settings_path).unwrap();

        assert_eq!(loaded_settings, original_settings);

        std::fs::remove_dir_all(&temp_dir).ok();
    }

    #[test]
    fn test_load_from_clamps_out_of_range_quality() {
        let temp_dir = std::env::temp_dir().join("face-recog-client-test-quality");
        std::fs::create_dir_all(&temp_dir).unwrap();
        let settings_path = temp_dir.join("settings.json");
        std::fs::write(&settings_path, r#"{ "jpeg_quality": 0 }"#).unwrap();

        let settings = ClientSettings::load_from(&settings_path).unwrap();

        assert_eq!(settings.jpeg_quality, 1);

        std::fs::remove_dir_all(&temp_dir).ok();
    }

    #[test]
    fn test_load_from_invalid_json_is_an_error() {
        let temp_dir = std::env::temp_dir().join("face-recog-client-test-invalid");
        std::fs::create_dir_all(&temp_dir).unwrap();
        let settings_path = temp_dir.join("settings.json");
        std::fs::write(&settings_path, "not json").unwrap();

        let result = ClientSettings::load_from(&settings_path);

        assert!(result.is_err());

        std::fs::remove_dir_all(&temp_dir).ok();
    }
}
