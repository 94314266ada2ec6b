//! Value-to-colour classification.
//!
//! A symbology table is an ordered list of half-open `(min, max]` bands, each
//! with a label and a colour. Tables are validated once when built and are
//! read-only afterwards.

mod colour;
mod config;
mod entry;
pub mod presets;
mod table;

pub use colour::Colour;
pub use config::{load_table, SymbologyConfig};
pub use entry::{BandConfig, SymbologyEntry};
pub use presets::Preset;
pub use table::SymbologyTable;
