//! Page behavior configuration

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use pagewire_download::{IndicatorOptions, DEFAULT_BUSY_DURATION, DEFAULT_BUSY_LABEL};
use pagewire_tabs::TabOptions;

use crate::error::CoreError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Class marking tab triggers
    pub tab_trigger_class: String,
    /// Trigger attribute naming the tab key
    pub tab_key_attribute: String,
    /// Class marking tab content panels
    pub tab_panel_class: String,
    /// Panel id is `<key><panel_id_suffix>`
    pub panel_id_suffix: String,
    /// Class carrying the active designation
    pub active_class: String,
    /// Class marking download controls
    pub download_class: String,
    /// Label shown on a download control while busy
    pub busy_label: String,
    /// How long the busy label stays, in milliseconds
    pub busy_duration_ms: u64,
}

impl Config {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        tracing::debug!(path = %path.display(), "Loaded page configuration");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let required = [
            ("tab_trigger_class", &self.tab_trigger_class),
            ("tab_key_attribute", &self.tab_key_attribute),
            ("tab_panel_class", &self.tab_panel_class),
            ("active_class", &self.active_class),
            ("download_class", &self.download_class),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(CoreError::Config(format!("{} cannot be empty", name)));
            }
        }
        Ok(())
    }

    pub fn busy_duration(&self) -> Duration {
        Duration::from_millis(self.busy_duration_ms)
    }

    pub fn tab_options(&self) -> TabOptions {
        TabOptions {
            trigger_class: self.tab_trigger_class.clone(),
            key_attribute: self.tab_key_attribute.clone(),
            panel_class: self.tab_panel_class.clone(),
            panel_suffix: self.panel_id_suffix.clone(),
            active_class: self.active_class.clone(),
        }
    }

    pub fn indicator_options(&self) -> IndicatorOptions {
        IndicatorOptions {
            busy_label: self.busy_label.clone(),
            busy_duration: self.busy_duration(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let tabs = TabOptions::default();

        Self {
            tab_trigger_class: tabs.trigger_class,
            tab_key_attribute: tabs.key_attribute,
            tab_panel_class: tabs.panel_class,
            panel_id_suffix: tabs.panel_suffix,
            active_class: tabs.active_class,
            download_class: "download-btn".to_string(),
            busy_label: DEFAULT_BUSY_LABEL.to_string(),
            busy_duration_ms: DEFAULT_BUSY_DURATION.as_millis() as u64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.tab_trigger_class, "tab-btn");
        assert_eq!(config.tab_key_attribute, "data-tab");
        assert_eq!(config.panel_id_suffix, "-tab");
        assert_eq!(config.busy_duration(), Duration::from_millis(2000));
        assert_eq!(config.tab_options(), TabOptions::default());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config =
            Config::from_json_str(r#"{ "busy_duration_ms": 500, "active_class": "is-on" }"#)
                .unwrap();
        assert_eq!(config.busy_duration_ms, 500);
        assert_eq!(config.active_class, "is-on");
        assert_eq!(config.download_class, "download-btn");
    }

    #[test]
    fn test_empty_class_rejected() {
        let result = Config::from_json_str(r#"{ "download_class": " " }"#);
        assert!(matches!(result, Err(CoreError::Config(_))));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            Config::from_json_str("{ not json"),
            Err(CoreError::Serialization(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            Config::load("/nonexistent/pagewire.json"),
            Err(CoreError::Io(_))
        ));
    }
}
