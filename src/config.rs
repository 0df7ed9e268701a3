// src/config.rs

//! Defines the configuration structures for the pixel map generator.
//!
//! Configuration is read from a JSON file whose path is given by the
//! `PIXEL_MAP_CONFIG` environment variable. Every field has a default, so a
//! partial file (or no file at all) is valid.

use std::path::Path;

use log::{info, warn};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::color::ColorDepth;
use crate::error::{PixelMapError, Result};
use crate::generation::GenerationMethod;

/// Environment variable naming the configuration file.
pub const CONFIG_ENV_VAR: &str = "PIXEL_MAP_CONFIG";

/// Process-wide configuration, loaded on first access.
pub static CONFIG: Lazy<Config> = Lazy::new(Config::from_env);

// --- Top-Level Configuration Structure ---

/// Root of the configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Settings passed to `PixelMap::from_config`.
    pub generator: GeneratorConfig,
}

// --- Generator Configuration ---

/// Which map to generate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub method: GenerationMethod,
    pub color_depth: ColorDepth,
    /// Seed for the generator's RNG. `None` draws from the thread-local RNG,
    /// so every run differs.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            method: GenerationMethod::Random,
            color_depth: ColorDepth::Bit18,
            seed: None,
        }
    }
}

impl Config {
    /// Parses a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| PixelMapError::Config(e.to_string()))
    }

    /// Reads and parses the configuration file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| PixelMapError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&json)
    }

    /// Loads the file named by `PIXEL_MAP_CONFIG`, or defaults if the variable
    /// is unset or the file is unusable.
    pub fn from_env() -> Self {
        match std::env::var(CONFIG_ENV_VAR) {
            Ok(path) => match Self::load(&path) {
                Ok(config) => {
                    info!("Loaded configuration from {}", path);
                    config
                }
                Err(e) => {
                    warn!("{}. Using default configuration.", e);
                    Config::default()
                }
            },
            Err(_) => Config::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = Config::from_json("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.generator.method, GenerationMethod::Random);
        assert_eq!(config.generator.color_depth, ColorDepth::Bit18);
        assert_eq!(config.generator.seed, None);
    }

    #[test]
    fn test_partial_generator_section() {
        let config =
            Config::from_json(r#"{ "generator": { "color_depth": "Rgb18", "seed": 9 } }"#)
                .unwrap();
        assert_eq!(config.generator.method, GenerationMethod::Random);
        assert_eq!(config.generator.color_depth, ColorDepth::Rgb18);
        assert_eq!(config.generator.seed, Some(9));
    }

    #[test]
    fn test_unknown_method_is_config_error() {
        let err = Config::from_json(r#"{ "generator": { "method": "Plasma" } }"#).unwrap_err();
        assert!(matches!(err, PixelMapError::Config(_)));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = Config::load("/nonexistent/pixel-map.json").unwrap_err();
        assert!(matches!(err, PixelMapError::Config(msg) if msg.contains("pixel-map.json")));
    }
}
