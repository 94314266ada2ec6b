//! Top bar UI: app title, symbology selection, and status.

use crate::state::AppState;
use eframe::egui::{self, Color32, RichText};

pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState) {
    egui::TopBottomPanel::top("top_bar")
        .exact_height(36.0)
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                ui.label(
                    RichText::new("Pulse Map")
                        .strong()
                        .size(16.0)
                        .color(Color32::WHITE),
                );

                ui.separator();

                ui.label(RichText::new("Symbology:").size(12.0).color(Color32::GRAY));
                let mut selected = state.source.clone();
                egui::ComboBox::from_id_salt("symbology_selector")
                    .selected_text(state.source.label().to_string())
                    .width(140.0)
                    .show_ui(ui, |ui| {
                        for source in state.available_sources() {
                            let label = source.label().to_string();
                            ui.selectable_value(&mut selected, source, label);
                        }
                    });
                state.select_source(selected);

                if ui
                    .button("Shuffle pulses")
                    .on_hover_text("Draw new animation delays for every marker")
                    .clicked()
                {
                    state.rebuild_markers();
                }

                ui.separator();

                ui.label(
                    RichText::new(&state.status_message)
                        .size(13.0)
                        .color(Color32::GRAY),
                );
            });
        });
}
