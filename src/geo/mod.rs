//! Geographic inputs and projection.
//!
//! Point features come from GeoJSON (or the built-in sample); the projection
//! places them on a screen rectangle for a given viewport.

mod feature;
mod projection;

pub use feature::{format_feature_id, number_from_text, FeatureSet, PointFeature};
pub use projection::{MapProjection, Viewport};
