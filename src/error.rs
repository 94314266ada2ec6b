//! Error types for symbology configuration and marker rendering.
//!
//! Configuration errors are global: a table that fails validation is rejected
//! before any marker is built. Render errors are local to a single feature and
//! never abort the rest of a render pass.

use thiserror::Error;

/// A symbology table that cannot be used for classification.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SymbologyError {
    #[error("symbology table has no bands")]
    Empty,

    #[error("band {index} ({label:?}) has a non-finite range")]
    NonFiniteRange { index: usize, label: String },

    #[error("band {index} ({label:?}) has minRange {min} >= maxRange {max}")]
    InvertedRange {
        index: usize,
        label: String,
        min: f64,
        max: f64,
    },

    #[error("gap between band {index} ending at {prev_max} and band {} starting at {next_min}", .index + 1)]
    Gap {
        index: usize,
        prev_max: f64,
        next_min: f64,
    },

    #[error("band {} starting at {next_min} overlaps band {index} ending at {prev_max}", .index + 1)]
    Overlap {
        index: usize,
        prev_max: f64,
        next_min: f64,
    },

    #[error("band {} starting at {next_min} is ordered before band {index} starting at {prev_min}", .index + 1)]
    Unordered {
        index: usize,
        prev_min: f64,
        next_min: f64,
    },

    #[error("band {index} has invalid colour token {token:?}")]
    InvalidColour { index: usize, token: String },
}

/// A single feature could not be turned into a marker.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    /// The feature's value is absent, zero, or outside every configured band.
    #[error("no symbology band matches feature id {}", display_id(.feature_id))]
    NoSymbologyMatch { feature_id: Option<f64> },
}

impl RenderError {
    /// Id of the feature that failed, if it had one.
    pub fn feature_id(&self) -> Option<f64> {
        match self {
            RenderError::NoSymbologyMatch { feature_id } => *feature_id,
        }
    }
}

/// Errors reading a feature collection.
#[derive(Error, Debug)]
pub enum FeatureError {
    #[error("failed to parse GeoJSON: {0}")]
    GeoJson(#[from] geojson::Error),

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Errors loading a symbology configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid symbology JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("misconfigured symbology: {0}")]
    Symbology(#[from] SymbologyError),

    #[error("unknown preset {0:?}")]
    UnknownPreset(String),
}

fn display_id(id: &Option<f64>) -> String {
    match id {
        Some(id) => crate::geo::format_feature_id(*id),
        None => "<none>".to_string(),
    }
}
