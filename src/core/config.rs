//! Application configuration
//!
//! Read once at startup from `config.json` in the platform config directory.
//! The file is optional and never written by the application.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Form defaults
    pub form: FormDefaults,
    /// Save dialog settings
    pub output: OutputConfig,
    /// UI settings
    pub ui: UiConfig,
}

/// Values pre-filled into the form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormDefaults {
    pub authorized_signatory: String,
    pub designation: String,
    /// Sample lines for the work-items box
    pub work_items: String,
}

/// Save dialog settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory the save dialog opens in
    pub default_dir: Option<PathBuf>,
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Initial window size in points
    pub window_size: [f32; 2],
    /// Show the certificate preview next to the form
    pub show_preview: bool,
    /// Preview panel width
    pub preview_width: f32,
}

const SAMPLE_WORK_ITEMS: &str = "\
Earthwork Excavation: [Quantity] [cubic meters]
Stone Soling: [Quantity] [cubic meters]
Stone Masonry : [Quantity] [meters]
Reinforced Cement Concrete (RCC): [Quantity] [cubic meters]
Reinforcement Steel: [Quantity] [kilograms]
Brickwork: [Quantity] [ cubic meters/square meters]";

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            authorized_signatory: "Sushil Acharya".to_string(),
            designation: "Engineer".to_string(),
            work_items: SAMPLE_WORK_ITEMS.to_string(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            window_size: [1100.0, 700.0],
            show_preview: true,
            preview_width: 420.0,
        }
    }
}

impl AppConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "expcert", "Expcert")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration, falling back to defaults when there is no file
    pub fn load() -> Result<Self> {
        let path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Self::load_from(&path)
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config: {}", path.display()))?;

        tracing::info!("Loaded config from: {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.form.authorized_signatory, "Sushil Acharya");
        assert_eq!(config.form.designation, "Engineer");
        assert_eq!(config.form.work_items.lines().count(), 6);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(
            &path,
            r#"{ "form": { "designation": "Senior Engineer" }, "output": { "default_dir": "/srv/certs" } }"#,
        )
        .unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.form.designation, "Senior Engineer");
        assert_eq!(config.form.authorized_signatory, "Sushil Acharya");
        assert_eq!(config.output.default_dir, Some(PathBuf::from("/srv/certs")));
        assert!(config.ui.show_preview);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(AppConfig::load_from(&path).is_err());
    }
}
