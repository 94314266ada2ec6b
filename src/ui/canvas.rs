//! Central canvas UI: the map with its pulsing markers.

use super::colors::canvas as colors;
use crate::state::AppState;
use eframe::egui::{self, Color32, Painter, Pos2, Rect, RichText, Sense, Stroke, Vec2};
use geo_types::Coord;
use pulse_map::geo::{MapProjection, Viewport};
use pulse_map::marker::{PulseAnimation, VisualMarker};
use pulse_map::surface::MapSurface;

/// Graticule spacing in degrees.
const GRATICULE_STEP_DEG: f64 = 10.0;

pub fn render_canvas(ctx: &egui::Context, state: &mut AppState) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let available_size = ui.available_size();
        let (response, painter) = ui.allocate_painter(available_size, Sense::click_and_drag());
        let rect = response.rect;

        painter.rect_filled(rect, 0.0, colors::BACKGROUND);

        let mut projection = MapProjection::new(state.view.viewport);
        projection.update(state.view.pan_offset, rect);

        render_graticule(&painter, &projection);

        let elapsed_ms = state.view.animation_elapsed_ms();
        for marker in state.markers.markers() {
            render_marker(&painter, &projection, &state.view.pulse, marker, elapsed_ms);
        }

        draw_overlay_info(ui, &rect, state, &projection);

        handle_canvas_interaction(&response, state);
    });

    // The pulse never stops, so keep frames coming.
    ctx.request_repaint();
}

fn render_graticule(painter: &Painter, projection: &MapProjection) {
    let (min_lon, min_lat, max_lon, max_lat) = projection.visible_bounds();
    let rect = projection.screen_rect;

    let mut lon = (min_lon / GRATICULE_STEP_DEG).floor() * GRATICULE_STEP_DEG;
    while lon <= max_lon {
        let x = projection.geo_to_screen(Coord { x: lon, y: 0.0 }).x;
        let color = if lon == 0.0 {
            colors::graticule_major()
        } else {
            colors::graticule()
        };
        painter.line_segment(
            [Pos2::new(x, rect.top()), Pos2::new(x, rect.bottom())],
            Stroke::new(1.0, color),
        );
        lon += GRATICULE_STEP_DEG;
    }

    let mut lat = (min_lat / GRATICULE_STEP_DEG).floor() * GRATICULE_STEP_DEG;
    while lat <= max_lat {
        let y = projection.geo_to_screen(Coord { x: 0.0, y: lat }).y;
        let color = if lat == 0.0 {
            colors::graticule_major()
        } else {
            colors::graticule()
        };
        painter.line_segment(
            [Pos2::new(rect.left(), y), Pos2::new(rect.right(), y)],
            Stroke::new(1.0, color),
        );
        lat += GRATICULE_STEP_DEG;
    }
}

/// Draws one marker: pulse ring, filled disc with border, id text.
fn render_marker(
    painter: &Painter,
    projection: &MapProjection,
    pulse: &PulseAnimation,
    marker: &VisualMarker,
    elapsed_ms: f64,
) {
    // Skip if well outside visible bounds
    if !projection.is_visible(marker.position, 2.0) {
        return;
    }

    let icon = &marker.icon;
    // The anchor sits at the icon centre, so the point lands in the middle.
    let anchor_offset = Vec2::new(
        icon.icon_size[0] / 2.0 - icon.icon_anchor[0],
        icon.icon_size[1] / 2.0 - icon.icon_anchor[1],
    );
    let center = projection.geo_to_screen(marker.position) + anchor_offset;
    let radius = icon.icon_size[0].min(icon.icon_size[1]) / 2.0;

    let fill = icon.fill_colour.rgba();
    let border = icon.border_colour.rgba();

    if icon.pulses() {
        let frame = pulse.frame(elapsed_ms, icon.animation_delay_ms);
        if frame.started {
            painter.circle_stroke(
                center,
                radius * frame.ring_scale,
                Stroke::new(3.0, border.gamma_multiply(frame.ring_alpha)),
            );
        }
    }

    painter.circle_filled(center, radius, fill);
    if marker.is_unknown() {
        render_dashed_ring(painter, center, radius, border);
    } else {
        painter.circle_stroke(center, radius, Stroke::new(2.0, border));
    }

    painter.text(
        center,
        egui::Align2::CENTER_CENTER,
        &icon.text,
        egui::FontId::proportional(14.0),
        text_color_for(fill),
    );
}

fn render_dashed_ring(painter: &Painter, center: Pos2, radius: f32, color: Color32) {
    let segments = 16;
    let step = std::f32::consts::TAU / segments as f32;
    for i in (0..segments).step_by(2) {
        let a0 = i as f32 * step;
        let a1 = a0 + step;
        painter.line_segment(
            [
                center + Vec2::angled(a0) * (radius + 3.0),
                center + Vec2::angled(a1) * (radius + 3.0),
            ],
            Stroke::new(2.0, color),
        );
    }
}

/// Picks dark or light text depending on fill brightness.
fn text_color_for(fill: Color32) -> Color32 {
    let luma = 0.299 * fill.r() as f32 + 0.587 * fill.g() as f32 + 0.114 * fill.b() as f32;
    if luma > 150.0 {
        colors::TEXT_DARK
    } else {
        colors::TEXT_LIGHT
    }
}

fn draw_overlay_info(ui: &mut egui::Ui, rect: &Rect, state: &AppState, projection: &MapProjection) {
    let overlay_pos = rect.left_top() + Vec2::new(10.0, 10.0);
    let overlay_rect = Rect::from_min_size(overlay_pos, Vec2::new(220.0, 50.0));

    let center = projection.screen_to_geo(rect.center());

    ui.scope_builder(egui::UiBuilder::new().max_rect(overlay_rect), |ui| {
        ui.vertical(|ui| {
            ui.label(
                RichText::new(format!("Center: {:.2}, {:.2}", center.y, center.x))
                    .monospace()
                    .size(12.0)
                    .color(colors::OVERLAY_TEXT),
            );
            ui.label(
                RichText::new(format!("Zoom: {:.1}", state.view.viewport.zoom))
                    .monospace()
                    .size(12.0)
                    .color(colors::OVERLAY_TEXT),
            );
        });
    });
}

fn handle_canvas_interaction(response: &egui::Response, state: &mut AppState) {
    // Handle dragging for panning
    if response.dragged() {
        state.view.pan_offset += response.drag_delta();
    }

    if response.hovered() {
        let scroll_delta = response.ctx.input(|i| i.raw_scroll_delta);
        if scroll_delta.y != 0.0 {
            let viewport = &mut state.view.viewport;
            let old_zoom = viewport.zoom;
            let new_zoom =
                (old_zoom + scroll_delta.y * 0.005).clamp(Viewport::MIN_ZOOM, Viewport::MAX_ZOOM);

            // Pixel distances scale by 2^(zoom change); keep the pan proportional.
            let ratio = 2f32.powf(new_zoom - old_zoom);
            state.view.pan_offset *= ratio;
            viewport.zoom = new_zoom;
        }
    }

    // Reset view on double-click
    if response.double_clicked() {
        state.view.reset();
    }

    state.markers.set_viewport(state.view.viewport);
}
