//! Centralized color constants for the UI.

use eframe::egui::Color32;

/// General UI colors for labels and values.
pub mod ui {
    use super::Color32;

    /// Muted gray for stat labels.
    pub const LABEL: Color32 = Color32::from_rgb(100, 100, 100);
    /// Slightly brighter for stat values.
    pub const VALUE: Color32 = Color32::from_rgb(160, 160, 160);
    /// Unclassified feature warning.
    pub const WARNING: Color32 = Color32::from_rgb(255, 180, 50);
    /// Swatch outline in the legend.
    pub const SWATCH_BORDER: Color32 = Color32::from_rgb(60, 60, 70);
}

/// Colors for the map canvas.
pub mod canvas {
    use super::Color32;

    /// Background color.
    pub const BACKGROUND: Color32 = Color32::from_rgb(236, 236, 232);
    /// Overlay text.
    pub const OVERLAY_TEXT: Color32 = Color32::from_rgb(70, 70, 80);
    /// Marker text on light fills.
    pub const TEXT_DARK: Color32 = Color32::from_rgb(30, 30, 30);
    /// Marker text on dark fills.
    pub const TEXT_LIGHT: Color32 = Color32::from_rgb(250, 250, 250);

    /// Graticule line color - requires alpha, use function.
    pub fn graticule() -> Color32 {
        Color32::from_rgba_unmultiplied(120, 120, 130, 70)
    }

    /// Equator and prime meridian - requires alpha, use function.
    pub fn graticule_major() -> Color32 {
        Color32::from_rgba_unmultiplied(100, 100, 120, 140)
    }
}
