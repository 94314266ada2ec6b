//! Pulse animation timing.
//!
//! Every marker runs the same looping pulse; the per-marker delay only shifts
//! when the loop starts, so markers breathe out of phase with each other.

/// Per-frame pulse values for one marker.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PulseFrame {
    /// Progress through the current cycle (0.0 - 1.0).
    pub phase: f32,
    /// Glow ring radius as a multiple of the marker radius.
    pub ring_scale: f32,
    /// Glow ring opacity (0.0 - 1.0).
    pub ring_alpha: f32,
    /// False until the marker's delay has elapsed.
    pub started: bool,
}

impl PulseFrame {
    /// A marker that is not (yet) animating.
    pub const REST: PulseFrame = PulseFrame {
        phase: 0.0,
        ring_scale: 1.0,
        ring_alpha: 0.0,
        started: false,
    };
}

/// Shape of the pulse loop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PulseAnimation {
    /// Length of one cycle in milliseconds.
    pub period_ms: f64,
    /// Ring radius multiple at the end of a cycle.
    pub max_ring_scale: f32,
    /// Ring opacity at the start of a cycle.
    pub max_ring_alpha: f32,
}

impl Default for PulseAnimation {
    fn default() -> Self {
        Self {
            period_ms: 2000.0,
            max_ring_scale: 1.6,
            max_ring_alpha: 0.7,
        }
    }
}

impl PulseAnimation {
    /// Computes the frame for a marker `elapsed_ms` after the layer appeared.
    ///
    /// Before `delay_ms` has passed the marker is at rest; after that the ring
    /// grows from the marker edge and fades out once per period.
    pub fn frame(&self, elapsed_ms: f64, delay_ms: u32) -> PulseFrame {
        let since_start = elapsed_ms - delay_ms as f64;
        if since_start < 0.0 || self.period_ms <= 0.0 {
            return PulseFrame::REST;
        }

        let phase = ((since_start % self.period_ms) / self.period_ms) as f32;

        PulseFrame {
            phase,
            ring_scale: 1.0 + (self.max_ring_scale - 1.0) * phase,
            ring_alpha: self.max_ring_alpha * (1.0 - phase),
            started: true,
        }
    }
}
