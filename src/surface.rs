//! The map surface markers are handed to.
//!
//! The core never draws; it gives finished markers to a `MapSurface`, which
//! owns placement, panning and interaction.

use crate::geo::Viewport;
use crate::marker::VisualMarker;

/// Opaque id for a marker placed on a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkerHandle(u64);

/// A display that can hold markers.
pub trait MapSurface {
    fn add_marker(&mut self, marker: VisualMarker) -> MarkerHandle;

    /// Removes a marker, returning it if it was present.
    fn remove_marker(&mut self, handle: MarkerHandle) -> Option<VisualMarker>;

    fn set_viewport(&mut self, viewport: Viewport);
}

/// In-memory surface keeping markers in insertion order.
#[derive(Debug, Default)]
pub struct MarkerStore {
    next_handle: u64,
    markers: Vec<(MarkerHandle, VisualMarker)>,
    viewport: Viewport,
}

impl MarkerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn markers(&self) -> impl Iterator<Item = &VisualMarker> {
        self.markers.iter().map(|(_, m)| m)
    }

    pub fn get(&self, handle: MarkerHandle) -> Option<&VisualMarker> {
        self.markers
            .iter()
            .find(|(h, _)| *h == handle)
            .map(|(_, m)| m)
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Removes every marker.
    pub fn clear(&mut self) {
        self.markers.clear();
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

impl MapSurface for MarkerStore {
    fn add_marker(&mut self, marker: VisualMarker) -> MarkerHandle {
        let handle = MarkerHandle(self.next_handle);
        self.next_handle += 1;
        self.markers.push((handle, marker));
        handle
    }

    fn remove_marker(&mut self, handle: MarkerHandle) -> Option<VisualMarker> {
        let index = self.markers.iter().position(|(h, _)| *h == handle)?;
        Some(self.markers.remove(index).1)
    }

    fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::PointFeature;
    use crate::marker::{FixedDelay, MarkerRenderer};
    use crate::symbology::presets;

    fn marker(id: f64) -> VisualMarker {
        let table = presets::red_green();
        let mut renderer = MarkerRenderer::new(&table, FixedDelay(0));
        renderer
            .render_feature(&PointFeature::new(id, 0.0, 0.0))
            .unwrap()
    }

    #[test]
    fn test_add_and_remove() {
        let mut store = MarkerStore::new();
        let a = store.add_marker(marker(1.0));
        let b = store.add_marker(marker(2.0));
        assert_ne!(a, b);
        assert_eq!(store.len(), 2);

        let removed = store.remove_marker(a).unwrap();
        assert_eq!(removed.feature_id, Some(1.0));
        assert!(store.get(a).is_none());
        assert!(store.remove_marker(a).is_none());
        assert_eq!(store.get(b).unwrap().feature_id, Some(2.0));
    }

    #[test]
    fn test_handles_are_not_reused() {
        let mut store = MarkerStore::new();
        let a = store.add_marker(marker(1.0));
        store.clear();
        let b = store.add_marker(marker(1.0));
        assert_ne!(a, b);
    }

    #[test]
    fn test_viewport() {
        let mut store = MarkerStore::new();
        assert_eq!(store.viewport(), Viewport::default());
        store.set_viewport(Viewport::new(10.0, -5.0, 6.0));
        assert_eq!(store.viewport().zoom, 6.0);
    }
}
