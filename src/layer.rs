//! Render pass over a feature collection.
//!
//! Each feature is rendered independently. A feature whose value has no band
//! is recorded and logged, and the pass carries on with the rest.

use crate::error::RenderError;
use crate::geo::PointFeature;
use crate::marker::{DelaySource, MarkerRenderer, VisualMarker};
use crate::surface::{MapSurface, MarkerHandle};

/// What to show for a feature that cannot be classified.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum UnclassifiedPolicy {
    /// Leave it off the map.
    #[default]
    Omit,
    /// Show a static grey marker in its place.
    Flag,
}

impl UnclassifiedPolicy {
    pub fn label(&self) -> &'static str {
        match self {
            UnclassifiedPolicy::Omit => "Omit",
            UnclassifiedPolicy::Flag => "Flag",
        }
    }

    pub fn all() -> &'static [UnclassifiedPolicy] {
        &[UnclassifiedPolicy::Omit, UnclassifiedPolicy::Flag]
    }
}

/// A feature that did not get a band.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedFeature {
    /// Position of the feature in the input collection.
    pub index: usize,
    pub error: RenderError,
}

/// Output of one render pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderPass {
    /// Markers in input order (including unknown markers under `Flag`).
    pub markers: Vec<VisualMarker>,
    pub skipped: Vec<SkippedFeature>,
}

impl RenderPass {
    /// True if every feature was classified.
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }

    /// Hands every marker to a map surface, returning their handles.
    pub fn attach_to<S: MapSurface + ?Sized>(self, surface: &mut S) -> Vec<MarkerHandle> {
        self.markers
            .into_iter()
            .map(|marker| surface.add_marker(marker))
            .collect()
    }
}

/// A point layer: renders features with a marker renderer.
#[derive(Debug, Default, Clone, Copy)]
pub struct PointLayer {
    pub policy: UnclassifiedPolicy,
}

impl PointLayer {
    pub fn new(policy: UnclassifiedPolicy) -> Self {
        Self { policy }
    }

    /// Renders every feature at its own position.
    pub fn render<'a, D, I>(&self, features: I, renderer: &mut MarkerRenderer<'_, D>) -> RenderPass
    where
        D: DelaySource,
        I: IntoIterator<Item = &'a PointFeature>,
    {
        let mut pass = RenderPass::default();

        for (index, feature) in features.into_iter().enumerate() {
            match renderer.render_point(feature, feature.position) {
                Ok(marker) => pass.markers.push(marker),
                Err(error) => {
                    log::warn!("Skipping feature #{}: {}", index, error);
                    if self.policy == UnclassifiedPolicy::Flag {
                        pass.markers
                            .push(renderer.render_unknown(feature, feature.position));
                    }
                    pass.skipped.push(SkippedFeature { index, error });
                }
            }
        }

        log::debug!(
            "Rendered {} markers, {} unclassified",
            pass.markers.len(),
            pass.skipped.len()
        );

        pass
    }
}
