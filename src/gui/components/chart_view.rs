// src/gui/components/chart_view.rs

use eframe::egui;

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    match &app.chart_tex {
        Some(tex) => {
            let size = tex.size_vec2();
            let scale = (ui.available_width() / size.x).min(1.0);
            egui::ScrollArea::both()
                .id_salt("chart_scroll")
                .show(ui, |ui| {
                    ui.image((tex.id(), size * scale));
                });
        }
        None => {
            ui.centered_and_justified(|ui| {
                ui.label("No chart yet — pick a league and season, then SCRAPE.");
            });
        }
    }
}
