//! Marker construction and animation.
//!
//! The renderer turns a point feature into a [`VisualMarker`]: a band colour
//! for border and fill, the feature id as text, and a random start offset for
//! the pulse animation.

mod delay;
mod pulse;
mod renderer;
mod shell;

pub use delay::{DelaySource, FixedDelay, RandomDelay, SequenceDelay};
pub use pulse::{PulseAnimation, PulseFrame};
pub use renderer::{MarkerRenderer, PULSE_DELAY_RANGE_MS, UNKNOWN_COLOUR};
pub use shell::{
    VisualMarker, VisualShell, ICON_ANCHOR, ICON_SIZE, MARKER_CLASS, PULSE_CLASS, UNKNOWN_CLASS,
};
