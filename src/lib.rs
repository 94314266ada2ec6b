//! Symbology-classified, pulse-animated point markers.
//!
//! A [`symbology::SymbologyTable`] maps numeric values to colour bands. The
//! [`marker::MarkerRenderer`] classifies each point feature's id against the
//! table and builds a [`marker::VisualMarker`] with the band colour, the id as
//! text, and a random pulse delay. [`layer::PointLayer`] runs that over a whole
//! collection, skipping features that have no band.

pub mod error;
pub mod geo;
pub mod layer;
pub mod marker;
pub mod surface;
pub mod symbology;

pub use error::{ConfigError, FeatureError, RenderError, SymbologyError};
pub use layer::{PointLayer, RenderPass, UnclassifiedPolicy};
pub use marker::{MarkerRenderer, VisualMarker, VisualShell};
pub use surface::{MapSurface, MarkerStore};
pub use symbology::{SymbologyEntry, SymbologyTable};
