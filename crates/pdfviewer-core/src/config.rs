//! Viewer configuration

use serde::{Deserialize, Serialize};

use pdfviewer_navigation::DEFAULT_FILE_PARAM;

use crate::error::CoreError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Query parameter carrying the shown file
    pub file_param: String,
    /// Seed the signal from the first macro's first tab when the URL has none
    pub seed_default_signal: bool,
    /// Width used when a macro does not set one
    pub default_width: String,
    /// Height of single-file viewers
    pub default_height: String,
    /// Height of tab layout viewers
    pub default_tab_height: String,
}

impl Config {
    pub fn new() -> Self {
        Self {
            file_param: DEFAULT_FILE_PARAM.to_string(),
            seed_default_signal: true,
            default_width: "100%".to_string(),
            default_height: "1000px".to_string(),
            default_tab_height: "1000".to_string(),
        }
    }

    /// Load from JSON; missing keys fall back to defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.file_param.trim().is_empty() {
            return Err(CoreError::Config("file_param cannot be empty".to_string()));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.file_param, "file");
        assert!(config.seed_default_signal);
        assert_eq!(config.default_width, "100%");
        assert_eq!(config.default_height, "1000px");
        assert_eq!(config.default_tab_height, "1000");
    }

    #[test]
    fn test_partial_json() {
        let config = Config::from_json(r#"{"file_param": "pdf", "seed_default_signal": false}"#).unwrap();
        assert_eq!(config.file_param, "pdf");
        assert!(!config.seed_default_signal);
        assert_eq!(config.default_width, "100%");

        let back = Config::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_invalid_config() {
        assert!(matches!(
            Config::from_json(r#"{"file_param": " "}"#),
            Err(CoreError::Config(_))
        ));
        assert!(matches!(
            Config::from_json("{not json"),
            Err(CoreError::Serialization(_))
        ));
    }
}
