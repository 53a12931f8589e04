use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable naming an alternative config file.
pub const CONFIG_ENV: &str = "OVA_CONFIG";
/// Looked up in the working directory when [`CONFIG_ENV`] is unset.
pub const DEFAULT_CONFIG_FILE: &str = "ova.json";

// ---------------------------------------------------------------------------
// Application settings
// ---------------------------------------------------------------------------

/// User-tunable settings. Every field has a default so a partial file works.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where "downloads" (reports, chart images) are written.
    pub export_dir: PathBuf,
    /// Time limit of the evaluation section.
    pub evaluation_seconds: u64,
    /// Minimum score fraction to pass an evaluation.
    pub pass_threshold: f64,
    pub dark_mode: bool,
    pub window_size: [f32; 2],
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            export_dir: PathBuf::from("descargas_ova"),
            evaluation_seconds: 300,
            pass_threshold: 0.6,
            dark_mode: false,
            window_size: [1200.0, 800.0],
        }
    }
}

impl AppConfig {
    /// Read and validate a config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let mut config: AppConfig = serde_json::from_str(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        config.pass_threshold = config.pass_threshold.clamp(0.0, 1.0);
        config.evaluation_seconds = config.evaluation_seconds.max(10);
        Ok(config)
    }

    /// Config from `$OVA_CONFIG`, else `./ova.json`, else defaults.
    /// A broken file is logged and ignored.
    pub fn load() -> Self {
        let explicit = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        let path = explicit
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

        if explicit.is_none() && !path.exists() {
            log::debug!("No {DEFAULT_CONFIG_FILE} found, using defaults");
            return Self::default();
        }

        match Self::from_file(&path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("Ignoring config: {e:#}");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ova.json");
        std::fs::write(&path, r#"{ "evaluation_seconds": 120, "dark_mode": true }"#).unwrap();
        let config = AppConfig::from_file(&path).unwrap();
        assert_eq!(config.evaluation_seconds, 120);
        assert!(config.dark_mode);
        assert_eq!(config.export_dir, PathBuf::from("descargas_ova"));
        assert_eq!(config.pass_threshold, 0.6);
    }

    #[test]
    fn test_values_are_clamped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ova.json");
        std::fs::write(&path, r#"{ "evaluation_seconds": 1, "pass_threshold": 4.0 }"#).unwrap();
        let config = AppConfig::from_file(&path).unwrap();
        assert_eq!(config.evaluation_seconds, 10);
        assert_eq!(config.pass_threshold, 1.0);
    }

    #[test]
    fn test_invalid_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ova.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(AppConfig::from_file(&path).is_err());
        assert!(AppConfig::from_file(&dir.path().join("missing.json")).is_err());
    }
}
