// src/gui/components/aesthetics_panel.rs

use eframe::egui;

use crate::config::consts::{MAX_ASPECT_RATIO, MAX_TITLE_CHARS, MIN_ASPECT_RATIO};
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Plot aesthetics");

    let chart = &mut app.state.options.chart;
    let mut changed = false;

    ui.horizontal(|ui| {
        ui.label("Custom title:");
        changed |= ui
            .add(
                egui::TextEdit::singleline(&mut chart.custom_title)
                    .char_limit(MAX_TITLE_CHARS)
                    .hint_text("auto"),
            )
            .changed();
    });

    changed |= ui
        .add_enabled(
            !chart.highlights.is_empty(),
            egui::Checkbox::new(&mut chart.subtitle, "Subtitle"),
        )
        .changed();

    ui.horizontal(|ui| {
        ui.label("Aspect ratio:");
        changed |= ui
            .add(
                egui::Slider::new(
                    &mut chart.aspect_ratio,
                    MIN_ASPECT_RATIO..=MAX_ASPECT_RATIO,
                )
                .step_by(0.05),
            )
            .changed();
    });

    ui.horizontal(|ui| {
        ui.label("Background:");
        changed |= ui.color_edit_button_srgb(&mut chart.facecolor).changed();
    });

    if changed {
        logd!("UI: Aesthetics changed");
        app.mark_dirty();
    }
}
