//! Viewport and screen projection.
//!
//! Converts between geographic coordinates (lon/lat) and screen coordinates
//! for whatever surface ends up drawing the markers.

use eframe::egui::{Pos2, Rect, Vec2};
use geo_types::Coord;

/// Tile edge length used to derive the scale at a given zoom level.
const TILE_SIZE: f64 = 256.0;

/// Map centre and zoom level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// `x` is longitude, `y` is latitude.
    pub center: Coord<f64>,
    /// Slippy-map zoom level: the world is `256 * 2^zoom` pixels wide.
    pub zoom: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            center: Coord { x: 0.0, y: 0.0 },
            zoom: 4.0,
        }
    }
}

impl Viewport {
    pub const MIN_ZOOM: f32 = 1.0;
    pub const MAX_ZOOM: f32 = 12.0;

    pub fn new(lon: f64, lat: f64, zoom: f32) -> Self {
        Self {
            center: Coord { x: lon, y: lat },
            zoom: zoom.clamp(Self::MIN_ZOOM, Self::MAX_ZOOM),
        }
    }

    /// Degrees of longitude covered by one screen pixel.
    pub fn degrees_per_pixel(&self) -> f64 {
        360.0 / (TILE_SIZE * 2f64.powf(self.zoom as f64))
    }
}

/// Equirectangular projection of a viewport onto a screen rectangle.
#[derive(Debug, Clone)]
pub struct MapProjection {
    pub viewport: Viewport,
    /// Pan offset in screen pixels
    pub pan_offset: Vec2,
    /// Screen rectangle for the canvas
    pub screen_rect: Rect,
}

impl Default for MapProjection {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            pan_offset: Vec2::ZERO,
            screen_rect: Rect::from_min_size(Pos2::ZERO, Vec2::new(800.0, 600.0)),
        }
    }
}

impl MapProjection {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            ..Default::default()
        }
    }

    /// Updates the projection with current view state.
    pub fn update(&mut self, pan_offset: Vec2, screen_rect: Rect) {
        self.pan_offset = pan_offset;
        self.screen_rect = screen_rect;
    }

    /// Converts geographic coordinates (lon, lat) to screen position.
    pub fn geo_to_screen(&self, coord: Coord<f64>) -> Pos2 {
        let dpp = self.viewport.degrees_per_pixel();
        let rel_lon = coord.x - self.viewport.center.x;
        // Screen Y increases downward
        let rel_lat = -(coord.y - self.viewport.center.y);

        let center = self.screen_rect.center() + self.pan_offset;
        Pos2::new(
            center.x + (rel_lon / dpp) as f32,
            center.y + (rel_lat / dpp) as f32,
        )
    }

    /// Converts screen position to geographic coordinates (lon, lat).
    pub fn screen_to_geo(&self, pos: Pos2) -> Coord<f64> {
        let dpp = self.viewport.degrees_per_pixel();
        let center = self.screen_rect.center() + self.pan_offset;

        Coord {
            x: self.viewport.center.x + (pos.x - center.x) as f64 * dpp,
            y: self.viewport.center.y - (pos.y - center.y) as f64 * dpp,
        }
    }

    /// Returns the visible geographic bounds as (min_lon, min_lat, max_lon, max_lat).
    pub fn visible_bounds(&self) -> (f64, f64, f64, f64) {
        let top_left = self.screen_to_geo(self.screen_rect.left_top());
        let bottom_right = self.screen_to_geo(self.screen_rect.right_bottom());

        (
            top_left.x.min(bottom_right.x),
            top_left.y.min(bottom_right.y),
            top_left.x.max(bottom_right.x),
            top_left.y.max(bottom_right.y),
        )
    }

    /// Checks if a coordinate is within the visible bounds (with margin).
    pub fn is_visible(&self, coord: Coord<f64>, margin_deg: f64) -> bool {
        let (min_lon, min_lat, max_lon, max_lat) = self.visible_bounds();
        coord.x >= min_lon - margin_deg
            && coord.x <= max_lon + margin_deg
            && coord.y >= min_lat - margin_deg
            && coord.y <= max_lat + margin_deg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn projection() -> MapProjection {
        let mut projection = MapProjection::new(Viewport::default());
        projection.update(
            Vec2::ZERO,
            Rect::from_min_size(Pos2::ZERO, Vec2::new(800.0, 600.0)),
        );
        projection
    }

    #[test]
    fn test_center_maps_to_screen_center() {
        let p = projection();
        let pos = p.geo_to_screen(Coord { x: 0.0, y: 0.0 });
        assert!((pos.x - 400.0).abs() < 0.01);
        assert!((pos.y - 300.0).abs() < 0.01);
    }

    #[test]
    fn test_north_east_is_up_right() {
        let p = projection();
        let pos = p.geo_to_screen(Coord { x: 10.0, y: 10.0 });
        assert!(pos.x > 400.0);
        assert!(pos.y < 300.0);
    }

    #[test]
    fn test_screen_to_geo_inverts() {
        let p = projection();
        let coord = Coord {
            x: 20.113042190422988,
            y: 7.169236944483231,
        };
        let back = p.screen_to_geo(p.geo_to_screen(coord));
        assert!((back.x - coord.x).abs() < 0.01);
        assert!((back.y - coord.y).abs() < 0.01);
    }

    #[test]
    fn test_zoom_scale() {
        // Zoom 4: world is 4096px wide.
        let vp = Viewport::default();
        assert!((vp.degrees_per_pixel() - 360.0 / 4096.0).abs() < 1e-12);
        assert_eq!(Viewport::new(0.0, 0.0, 40.0).zoom, Viewport::MAX_ZOOM);
    }

    #[test]
    fn test_sample_points_visible_at_default_view() {
        let p = projection();
        assert!(p.is_visible(Coord { x: -6.88, y: 8.83 }, 0.0));
        assert!(!p.is_visible(Coord { x: 120.0, y: 8.83 }, 1.0));
    }
}
