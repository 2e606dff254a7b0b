// src/gui/components/highlight_panel.rs
//
// Team multi-select (latest standings order) plus one color picker per
// highlighted team. Selection order is preserved; it drives subtitle
// wording and which lines draw on top.

use eframe::egui;

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Highlight teams");

    let teams = app.team_names();
    if teams.is_empty() {
        ui.small("Scrape a season first.");
        return;
    }

    let mut changed = false;

    egui::ScrollArea::vertical()
        .id_salt("highlight_scroll")
        .max_height(240.0)
        .show(ui, |ui| {
            for team in &teams {
                let selected = app
                    .state
                    .options
                    .chart
                    .highlight_color(team)
                    .is_some();
                if ui.selectable_label(selected, team).clicked() {
                    app.state.options.chart.toggle_highlight(team);
                    changed = true;
                }
            }
        });

    let highlights = &mut app.state.options.chart.highlights;
    if !highlights.is_empty() {
        ui.add_space(4.0);
        ui.label("Colors:");
        for h in highlights.iter_mut() {
            ui.horizontal(|ui| {
                if ui.color_edit_button_srgb(&mut h.color).changed() {
                    changed = true;
                }
                ui.label(&h.team);
            });
        }
    }

    if changed {
        let n = app.state.options.chart.highlights.len();
        logf!("UI: Highlights changed ({n} team(s))");
        app.mark_dirty();
    }
}
