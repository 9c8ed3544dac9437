//! Configuration file handling.
//!
//! A config file is optional. Command line flags override whatever it sets.
//!
//! ```json
//! { "backend": "apt", "seed": 7, "exclude": ["linux-image-amd64"] }
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::types::Backend;

/// Settings that can be saved/loaded as JSON
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RouletteConfig {
    /// Package manager to query; auto-detected when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backend: Option<Backend>,
    /// Fixed seed for reproducible picks; OS entropy when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Package names never to pick
    pub exclude: Vec<String>,
}

impl RouletteConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize configuration to JSON")?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write configuration to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read configuration from {:?}", path.as_ref()))?;

        let config: Self =
            serde_json::from_str(&content).context("Failed to parse configuration JSON")?;

        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        for (i, name) in self.exclude.iter().enumerate() {
            if name.trim().is_empty() {
                anyhow::bail!("Exclude entry {} is empty", i);
            }
            if name.contains(char::is_whitespace) {
                anyhow::bail!("Exclude entry {:?} must be a single package name", name);
            }
        }
        Ok(())
    }

    /// Overlay command line values on top of this config.
    ///
    /// Scalars from the command line replace file values; exclusions add up.
    pub fn merged_with(
        mut self,
        backend: Option<Backend>,
        seed: Option<u64>,
        exclude: &[String],
    ) -> Self {
        if backend.is_some() {
            self.backend = backend;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        for name in exclude {
            if !self.exclude.contains(name) {
                self.exclude.push(name.clone());
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_save_and_load() {
        let config = RouletteConfig {
            backend: Some(Backend::Pacman),
            seed: Some(99),
            exclude: vec!["linux".to_string()],
        };
        let file = NamedTempFile::new().unwrap();
        config.save_to_file(file.path()).unwrap();

        let loaded = RouletteConfig::load_from_file(file.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_fields_default() {
        let config: RouletteConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, RouletteConfig::new());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_backend_rejected() {
        let result: std::result::Result<RouletteConfig, _> =
            serde_json::from_str(r#"{"backend": "zypper"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_rejects_bad_exclusions() {
        let config = RouletteConfig {
            exclude: vec!["".to_string()],
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = RouletteConfig {
            exclude: vec!["two words".to_string()],
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = RouletteConfig::load_from_file("/nonexistent/pkgroulette.json").unwrap_err();
        assert!(err.to_string().contains("Failed to read configuration"));
    }

    #[test]
    fn test_cli_overrides_file() {
        let file_config = RouletteConfig {
            backend: Some(Backend::Apt),
            seed: Some(1),
            exclude: vec!["a".to_string()],
        };
        let merged = file_config.merged_with(
            Some(Backend::Dnf),
            None,
            &["a".to_string(), "b".to_string()],
        );
        assert_eq!(merged.backend, Some(Backend::Dnf));
        assert_eq!(merged.seed, Some(1));
        assert_eq!(merged.exclude, vec!["a", "b"]);
    }
}
