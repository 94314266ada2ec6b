//! Neutral description of a marker's look.
//!
//! A `VisualShell` is what the renderer produces instead of a DOM element: any
//! target (egui painter, HTML, canvas) can draw from it.

use crate::symbology::Colour;
use geo_types::Coord;

/// Base class every marker carries.
pub const MARKER_CLASS: &str = "custom-div-icon";
/// Class that enables the pulse animation.
pub const PULSE_CLASS: &str = "pulse";
/// Class for markers whose value has no symbology band.
pub const UNKNOWN_CLASS: &str = "unknown";

/// Icon box size in pixels.
pub const ICON_SIZE: [f32; 2] = [40.0, 40.0];
/// Icon anchor in pixels, relative to the top-left of the box; centres the icon.
pub const ICON_ANCHOR: [f32; 2] = [20.0, 20.0];

/// Styling for one marker.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualShell {
    pub text: String,
    pub classes: Vec<&'static str>,
    pub border_colour: Colour,
    pub fill_colour: Colour,
    /// Start offset of the pulse animation.
    pub animation_delay_ms: u32,
    pub icon_size: [f32; 2],
    pub icon_anchor: [f32; 2],
}

impl VisualShell {
    /// Whether the shell carries the pulse class.
    pub fn pulses(&self) -> bool {
        self.classes.contains(&PULSE_CLASS)
    }

    pub fn class_list(&self) -> String {
        self.classes.join(" ")
    }

    /// Renders the shell as a styled `div`, as used for HTML icon markers.
    pub fn to_html(&self) -> String {
        format!(
            "<div class=\"{}\" style=\"border-color: {}; background-color: {}; animation-delay: {}ms;\">{}</div>",
            self.class_list(),
            escape_attr(self.border_colour.token()),
            escape_attr(self.fill_colour.token()),
            self.animation_delay_ms,
            escape_text(&self.text),
        )
    }
}

/// A shell placed at a geographic position.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualMarker {
    pub feature_id: Option<f64>,
    /// `x` is longitude, `y` is latitude.
    pub position: Coord<f64>,
    /// Label of the matched band; `None` for unknown markers.
    pub band: Option<String>,
    pub icon: VisualShell,
}

impl VisualMarker {
    pub fn is_unknown(&self) -> bool {
        self.band.is_none()
    }
}

fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}
