//! UI modules for the Pulse Map application.
//!
//! The UI is split into distinct panels:
//! - Top bar: Title, symbology selector, and status
//! - Central canvas: Map with pulsing markers
//! - Right panel: Legend, unclassified features, and marker options

mod canvas;
mod colors;
mod right_panel;
mod top_bar;

pub use canvas::render_canvas;
pub use right_panel::render_right_panel;
pub use top_bar::render_top_bar;
