//! Application state.
//!
//! Holds the active symbology, the loaded features, the markers currently on
//! the map and the view controls.

mod view;

pub use view::ViewState;

use pulse_map::geo::FeatureSet;
use pulse_map::layer::{PointLayer, SkippedFeature, UnclassifiedPolicy};
use pulse_map::marker::MarkerRenderer;
use pulse_map::surface::{MapSurface, MarkerStore};
use pulse_map::symbology::{Preset, SymbologyTable};

/// Where the active table came from.
#[derive(Clone, Debug, PartialEq)]
pub enum SymbologySource {
    Preset(Preset),
    /// Loaded from a file; holds the display name.
    File(String),
}

impl SymbologySource {
    pub fn label(&self) -> &str {
        match self {
            SymbologySource::Preset(preset) => preset.label(),
            SymbologySource::File(name) => name,
        }
    }
}

/// Everything needed to start the app, resolved from the command line.
pub struct Startup {
    pub source: SymbologySource,
    pub table: SymbologyTable,
    pub features: FeatureSet,
    pub policy: UnclassifiedPolicy,
}

/// Root application state.
pub struct AppState {
    pub source: SymbologySource,
    pub table: SymbologyTable,
    pub features: FeatureSet,
    pub policy: UnclassifiedPolicy,

    /// Table loaded from `--symbology`, kept so it can be reselected
    loaded_file: Option<(String, SymbologyTable)>,

    /// Markers currently placed on the map
    pub markers: MarkerStore,

    /// Features left off (or flagged) in the last render pass
    pub skipped: Vec<SkippedFeature>,

    pub view: ViewState,

    /// Status message displayed in top bar
    pub status_message: String,
}

impl AppState {
    pub fn new(startup: Startup) -> Self {
        let view = ViewState::default();
        let mut markers = MarkerStore::new();
        markers.set_viewport(view.viewport);

        let loaded_file = match &startup.source {
            SymbologySource::File(name) => Some((name.clone(), startup.table.clone())),
            SymbologySource::Preset(_) => None,
        };

        let mut state = Self {
            source: startup.source,
            table: startup.table,
            loaded_file,
            features: startup.features,
            policy: startup.policy,
            markers,
            skipped: Vec::new(),
            view,
            status_message: String::new(),
        };
        state.rebuild_markers();
        state
    }

    /// Re-runs the render pass, drawing fresh delays for every marker.
    pub fn rebuild_markers(&mut self) {
        self.markers.clear();

        let mut renderer = MarkerRenderer::with_random_delays(&self.table);
        let pass = PointLayer::new(self.policy).render(&self.features, &mut renderer);

        self.skipped = pass.skipped.clone();
        let placed = pass.attach_to(&mut self.markers).len();
        self.view.restart_animation();

        self.status_message = if self.skipped.is_empty() {
            format!("{} markers", placed)
        } else {
            format!(
                "{} markers, {} unclassified",
                placed - self.flagged_count(),
                self.skipped.len()
            )
        };
        log::info!("{} ({})", self.status_message, self.source.label());
    }

    /// Sources the user can pick from: the loaded file (if any), then presets.
    pub fn available_sources(&self) -> Vec<SymbologySource> {
        let file = self
            .loaded_file
            .iter()
            .map(|(name, _)| SymbologySource::File(name.clone()));
        let presets = Preset::all().iter().copied().map(SymbologySource::Preset);
        file.chain(presets).collect()
    }

    /// Switches the active table and rebuilds.
    pub fn select_source(&mut self, source: SymbologySource) {
        if self.source == source {
            return;
        }

        let table = match &source {
            SymbologySource::Preset(preset) => preset.table(),
            SymbologySource::File(name) => match &self.loaded_file {
                Some((loaded, table)) if loaded == name => table.clone(),
                _ => {
                    log::warn!("No loaded symbology named {}", name);
                    return;
                }
            },
        };

        self.source = source;
        self.table = table;
        self.rebuild_markers();
    }

    pub fn select_policy(&mut self, policy: UnclassifiedPolicy) {
        if self.policy == policy {
            return;
        }
        self.policy = policy;
        self.rebuild_markers();
    }

    fn flagged_count(&self) -> usize {
        match self.policy {
            UnclassifiedPolicy::Flag => self.skipped.len(),
            UnclassifiedPolicy::Omit => 0,
        }
    }
}
