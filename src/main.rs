#![warn(clippy::all)]

//! Pulse Map - a desktop map of symbology-classified point markers.
//!
//! Each point is coloured by the symbology band its id falls in and pulses
//! with its own random start offset. Features with no band are reported in
//! the side panel and either omitted or drawn as grey "unknown" markers.

mod state;
mod ui;

use clap::{Parser, ValueEnum};
use eframe::egui;
use pulse_map::geo::FeatureSet;
use pulse_map::layer::UnclassifiedPolicy;
use pulse_map::symbology::{Preset, SymbologyConfig};
use pulse_map::ConfigError;
use state::{AppState, Startup, SymbologySource};
use std::path::PathBuf;
use std::process;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PresetArg {
    /// #7b3294 .. #008837
    PurpleGreen,
    /// #d7191c .. #1a9641
    RedGreen,
}

impl From<PresetArg> for Preset {
    fn from(arg: PresetArg) -> Self {
        match arg {
            PresetArg::PurpleGreen => Preset::PurpleGreen,
            PresetArg::RedGreen => Preset::RedGreen,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PolicyArg {
    /// Leave unclassified features off the map
    Omit,
    /// Draw unclassified features as grey markers
    Flag,
}

impl From<PolicyArg> for UnclassifiedPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Omit => UnclassifiedPolicy::Omit,
            PolicyArg::Flag => UnclassifiedPolicy::Flag,
        }
    }
}

#[derive(Parser)]
#[command(name = "pulse-map")]
#[command(about = "Show point features as pulsing, symbology-coloured markers", long_about = None)]
struct Args {
    /// Symbology JSON file (array of {label, colour, minRange, maxRange})
    #[arg(long)]
    symbology: Option<PathBuf>,

    /// Built-in symbology to use when no file is given
    #[arg(long, value_enum, default_value = "red-green")]
    preset: PresetArg,

    /// GeoJSON file with point features (defaults to the five sample points)
    #[arg(long)]
    features: Option<PathBuf>,

    /// What to do with features whose id has no symbology band
    #[arg(long, value_enum, default_value = "omit")]
    unclassified: PolicyArg,
}

/// Resolves the command line into validated startup state.
///
/// A bad symbology file is fatal here, before anything is drawn.
fn load_startup(args: &Args) -> Result<Startup, Box<dyn std::error::Error>> {
    let (source, table) = match &args.symbology {
        Some(path) => {
            let config = SymbologyConfig::from_path(path)?;
            let name = config
                .name
                .clone()
                .unwrap_or_else(|| path.display().to_string());
            (SymbologySource::File(name), config.build()?)
        }
        None => {
            let preset = Preset::from(args.preset);
            let table = SymbologyConfig::from_preset(preset).build()?;
            (SymbologySource::Preset(preset), table)
        }
    };

    let features = match &args.features {
        Some(path) => FeatureSet::from_path(path)?,
        None => FeatureSet::sample(),
    };

    Ok(Startup {
        source,
        table,
        features,
        policy: args.unclassified.into(),
    })
}

// Native entry point
fn main() -> eframe::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let startup = match load_startup(&args) {
        Ok(startup) => startup,
        Err(e) => {
            if e.downcast_ref::<ConfigError>().is_some() {
                log::error!("Symbology configuration rejected: {}", e);
            } else {
                log::error!("Failed to start: {}", e);
            }
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let native_options = eframe::NativeOptions::default();

    eframe::run_native(
        "Pulse Map",
        native_options,
        Box::new(|cc| Ok(Box::new(PulseMapApp::new(cc, startup)))),
    )
}

/// Main application state and logic.
pub struct PulseMapApp {
    state: AppState,
}

impl PulseMapApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, startup: Startup) -> Self {
        log::info!(
            "Starting with {} features and symbology {}",
            startup.features.len(),
            startup.source.label()
        );
        Self {
            state: AppState::new(startup),
        }
    }
}

impl eframe::App for PulseMapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ui::render_top_bar(ctx, &mut self.state);
        ui::render_right_panel(ctx, &mut self.state);
        ui::render_canvas(ctx, &mut self.state);
    }
}
