//! Configuration handling for LCBview CLI
//!
//! Supports loading configuration from lcbview.toml files with CLI argument overrides.

use anyhow::{Context, Result};
use lcbview_core::ViewerConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub viewer: ViewerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Default log filter when neither -v nor RUST_LOG is given
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String { "info".to_string() }

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// File the configuration comes from: the explicit path, else
    /// `lcbview.toml` in the working directory when present.
    pub fn resolve_path(config_path: Option<&Path>) -> Option<PathBuf> {
        match config_path {
            Some(path) => Some(path.to_path_buf()),
            None => {
                let default_path = PathBuf::from("lcbview.toml");
                default_path.exists().then_some(default_path)
            }
        }
    }

    /// Load configuration from file or use defaults
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        match Self::resolve_path(config_path) {
            Some(path) => Self::load_from_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// Log line describing where the configuration came from.
    pub fn describe_source(path: Option<&Path>) -> String {
        match path {
            Some(path) => format!("Loaded configuration from: {}", path.display()),
            None => "Using default configuration".to_string(),
        }
    }

    /// Load configuration from a specific TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse configuration file: {}", path.display()))?;

        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write configuration file: {}", path.display()))?;

        Ok(())
    }

    /// Generate example configuration file content
    pub fn example_toml() -> Result<String> {
        toml::to_string_pretty(&Self::default()).context("Failed to serialize default configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.viewer.surface_width, 1000.0);
        assert_eq!(config.viewer.min_zoom, 1.0);
    }

    #[test]
    fn test_config_roundtrip() -> Result<()> {
        let mut config = Config::default();
        config.viewer.surface_width = 1920.0;
        config.viewer.initial_reference = Some(2);
        let temp_file = NamedTempFile::new()?;

        config.save_to_file(temp_file.path())?;
        let loaded = Config::load_from_file(temp_file.path())?;

        assert_eq!(loaded.general.log_level, config.general.log_level);
        assert_eq!(loaded.viewer, config.viewer);

        Ok(())
    }

    #[test]
    fn test_partial_config_uses_defaults() -> Result<()> {
        let mut temp_file = NamedTempFile::new()?;
        writeln!(temp_file, "[viewer]")?;
        writeln!(temp_file, "max_zoom = 500.0")?;

        let loaded = Config::load(Some(temp_file.path()))?;
        assert_eq!(loaded.viewer.max_zoom, 500.0);
        assert_eq!(loaded.viewer.surface_width, 1000.0);
        assert_eq!(loaded.general.log_level, "info");

        Ok(())
    }

    #[test]
    fn test_explicit_path_wins() {
        let path = Path::new("/etc/lcbview/custom.toml");
        assert_eq!(Config::resolve_path(Some(path)), Some(path.to_path_buf()));
        assert_eq!(
            Config::describe_source(Some(path)),
            "Loaded configuration from: /etc/lcbview/custom.toml"
        );
        assert_eq!(Config::describe_source(None), "Using default configuration");
    }

    #[test]
    fn test_invalid_config_reports_path() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "[viewer]\nsurface_width = \"wide\"").unwrap();
        let err = Config::load_from_file(temp_file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse configuration file"));
    }

    #[test]
    fn test_example_toml_generation() -> Result<()> {
        let example = Config::example_toml()?;
        assert!(example.contains("[general]"));
        assert!(example.contains("[viewer]"));
        assert!(example.contains("surface_width"));
        Ok(())
    }
}
