//! Map view state (viewport, pan, animation clock).

use eframe::egui::Vec2;
use pulse_map::geo::Viewport;
use pulse_map::marker::PulseAnimation;
use web_time::Instant;

/// Canvas view controls.
pub struct ViewState {
    /// Viewport the map opened with; double-click returns here.
    pub home: Viewport,

    /// Current centre and zoom
    pub viewport: Viewport,

    /// Current pan offset from center
    pub pan_offset: Vec2,

    /// Shape of the marker pulse
    pub pulse: PulseAnimation,

    /// When the current set of markers appeared; pulse delays count from here.
    pub markers_shown_at: Instant,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}

impl ViewState {
    pub fn new(home: Viewport) -> Self {
        Self {
            home,
            viewport: home,
            pan_offset: Vec2::ZERO,
            pulse: PulseAnimation::default(),
            markers_shown_at: Instant::now(),
        }
    }

    /// Milliseconds since the markers were last rebuilt.
    pub fn animation_elapsed_ms(&self) -> f64 {
        self.markers_shown_at.elapsed().as_secs_f64() * 1000.0
    }

    pub fn restart_animation(&mut self) {
        self.markers_shown_at = Instant::now();
    }

    pub fn reset(&mut self) {
        self.viewport = self.home;
        self.pan_offset = Vec2::ZERO;
    }
}
