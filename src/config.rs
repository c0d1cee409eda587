//! Configuration handling for the TUI

use crate::export::CheckboxStyle;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Base URL used for share links when none is configured
pub const DEFAULT_SHARE_BASE_URL: &str = "http://localhost:5173";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Directory CSV exports are written to (defaults to the working directory)
    pub export_dir: Option<PathBuf>,
    /// Base URL prepended to `/form/{id}` share links
    pub share_base_url: Option<String>,
    /// Write checkboxes as ✓/✗ in CSV exports instead of true/false
    pub csv_checkbox_glyphs: Option<bool>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "formbuilder", "form-builder-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    pub fn export_dir(&self) -> PathBuf {
        self.export_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn share_base_url(&self) -> &str {
        self.share_base_url
            .as_deref()
            .unwrap_or(DEFAULT_SHARE_BASE_URL)
    }

    pub fn checkbox_style(&self) -> CheckboxStyle {
        CheckboxStyle::from_glyphs(self.csv_checkbox_glyphs.unwrap_or(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert!(config.export_dir.is_none());
        assert!(config.share_base_url.is_none());
        assert!(config.csv_checkbox_glyphs.is_none());
    }

    #[test]
    fn test_defaults_resolve() {
        let config = TuiConfig::default();
        assert_eq!(config.export_dir(), PathBuf::from("."));
        assert_eq!(config.share_base_url(), DEFAULT_SHARE_BASE_URL);
        assert_eq!(config.checkbox_style(), CheckboxStyle::Raw);
    }

    #[test]
    fn test_serialization() {
        let config = TuiConfig {
            export_dir: Some(PathBuf::from("/tmp/exports")),
            share_base_url: Some("https://forms.example.com".to_string()),
            csv_checkbox_glyphs: Some(true),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: TuiConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.export_dir, Some(PathBuf::from("/tmp/exports")));
        assert_eq!(parsed.share_base_url(), "https://forms.example.com");
        assert_eq!(parsed.checkbox_style(), CheckboxStyle::Glyph);
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: TuiConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.share_base_url.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"csv_checkbox_glyphs": true, "unknown_field": "value"}"#;
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.csv_checkbox_glyphs, Some(true));
    }

    #[test]
    fn test_config_path_returns_option() {
        // Just test that the function doesn't panic
        let _path = TuiConfig::config_path();
    }

    #[test]
    fn test_load_returns_ok() {
        // Falls back to defaults when no config file exists
        let result = TuiConfig::load();
        assert!(result.is_ok());
    }
}
