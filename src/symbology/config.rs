//! Loading symbology tables from JSON.
//!
//! Two shapes are accepted: a bare array of bands, or an object with an
//! optional `name` and a `bands` array. Each band uses the fields
//! `label`, `colour`, `minRange` and `maxRange`.

use super::{BandConfig, Preset, SymbologyTable};
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A named band list as read from configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbologyConfig {
    #[serde(default)]
    pub name: Option<String>,
    pub bands: Vec<BandConfig>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawConfig {
    Bands(Vec<BandConfig>),
    Named(SymbologyConfig),
}

impl SymbologyConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = serde_json::from_str(json)?;
        Ok(match raw {
            RawConfig::Bands(bands) => Self { name: None, bands },
            RawConfig::Named(config) => config,
        })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn from_preset(preset: Preset) -> Self {
        Self {
            name: Some(preset.name().to_string()),
            bands: preset.table().to_bands(),
        }
    }

    /// Validates the bands and builds the table.
    pub fn build(self) -> Result<SymbologyTable, ConfigError> {
        let table = SymbologyTable::from_bands(self.bands)?;
        log::info!(
            "Loaded symbology {} with {} bands over {:?}",
            self.name.as_deref().unwrap_or("<unnamed>"),
            table.len(),
            table.domain()
        );
        Ok(table)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Reads and validates a table from a JSON file.
pub fn load_table(path: impl AsRef<Path>) -> Result<SymbologyTable, ConfigError> {
    SymbologyConfig::from_path(path)?.build()
}
