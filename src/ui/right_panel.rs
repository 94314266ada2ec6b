//! Right panel UI: legend, unclassified features, and marker options.

use super::colors::ui as colors;
use crate::state::AppState;
use eframe::egui::{self, RichText, ScrollArea, Sense, Stroke, Vec2};
use pulse_map::layer::UnclassifiedPolicy;

pub fn render_right_panel(ctx: &egui::Context, state: &mut AppState) {
    egui::SidePanel::right("right_panel")
        .resizable(true)
        .default_width(220.0)
        .min_width(180.0)
        .max_width(350.0)
        .show(ctx, |ui| {
            ScrollArea::vertical().show(ui, |ui| {
                ui.heading("Legend");
                ui.separator();

                render_legend_section(ui, state);
                ui.add_space(5.0);

                render_features_section(ui, state);
                ui.add_space(5.0);

                render_options_section(ui, state);
            });
        });
}

fn render_legend_section(ui: &mut egui::Ui, state: &AppState) {
    egui::CollapsingHeader::new(RichText::new(state.source.label()).strong())
        .default_open(true)
        .show(ui, |ui| {
            for (label, colour) in state.table.legend() {
                ui.horizontal(|ui| {
                    let (rect, _) = ui.allocate_exact_size(Vec2::new(14.0, 14.0), Sense::hover());
                    ui.painter().rect_filled(rect, 2.0, colour.rgba());
                    ui.painter().rect_stroke(
                        rect,
                        2.0,
                        Stroke::new(1.0, colors::SWATCH_BORDER),
                        egui::StrokeKind::Inside,
                    );
                    ui.label(label);
                    ui.label(
                        RichText::new(colour.token())
                            .monospace()
                            .small()
                            .color(colors::LABEL),
                    );
                });
            }
            ui.label(
                RichText::new("Bands include their upper bound only")
                    .small()
                    .color(colors::LABEL),
            );
        });
}

fn render_features_section(ui: &mut egui::Ui, state: &AppState) {
    egui::CollapsingHeader::new(RichText::new("Features").strong())
        .default_open(true)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("Loaded:").color(colors::LABEL));
                ui.label(RichText::new(state.features.len().to_string()).color(colors::VALUE));
            });
            ui.horizontal(|ui| {
                ui.label(RichText::new("On map:").color(colors::LABEL));
                ui.label(RichText::new(state.markers.len().to_string()).color(colors::VALUE));
            });

            if state.skipped.is_empty() {
                return;
            }

            ui.add_space(4.0);
            ui.label(
                RichText::new(format!("{} unclassified", state.skipped.len()))
                    .color(colors::WARNING),
            );
            for skipped in &state.skipped {
                let id = state
                    .features
                    .iter()
                    .nth(skipped.index)
                    .map(|feature| feature.label())
                    .filter(|label| !label.is_empty())
                    .unwrap_or_else(|| "no id".to_string());
                ui.label(
                    RichText::new(format!("#{}  id {}", skipped.index, id))
                        .monospace()
                        .small(),
                )
                .on_hover_text(skipped.error.to_string());
            }
        });
}

fn render_options_section(ui: &mut egui::Ui, state: &mut AppState) {
    egui::CollapsingHeader::new(RichText::new("Markers").strong())
        .default_open(true)
        .show(ui, |ui| {
            let mut policy = state.policy;
            egui::ComboBox::from_id_salt("unclassified_policy")
                .selected_text(format!("Unclassified: {}", policy.label()))
                .width(170.0)
                .show_ui(ui, |ui| {
                    for option in UnclassifiedPolicy::all() {
                        ui.selectable_value(&mut policy, *option, option.label());
                    }
                });
            state.select_policy(policy);

            ui.add_space(4.0);
            ui.label(RichText::new("Pulse period").color(colors::LABEL));
            ui.add(
                egui::Slider::new(&mut state.view.pulse.period_ms, 500.0..=5000.0)
                    .suffix(" ms")
                    .step_by(100.0),
            );
        });
}
