// src/gui/components/export_bar.rs

use eframe::egui;

use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label("Output:");
        if ui
            .add(
                egui::TextEdit::singleline(&mut app.state.gui.out_dir_text)
                    .desired_width(160.0)
                    .font(egui::TextStyle::Monospace),
            )
            .changed()
        {
            logd!("UI: out dir → {}", app.state.gui.out_dir_text);
        }

        let have_chart = !app.chart_png.is_empty();

        if ui
            .add_enabled(have_chart, egui::Button::new("Save PNG"))
            .clicked()
        {
            actions::export::save_png(app);
        }
        if ui
            .add_enabled(app.standings.is_some(), egui::Button::new("Save CSV"))
            .clicked()
        {
            actions::export::save_csv(app);
        }
        if ui
            .add_enabled(have_chart, egui::Button::new("Copy image link"))
            .clicked()
        {
            actions::export::copy_image_link(app, ui.ctx());
        }
        if ui
            .add_enabled(app.standings.is_some(), egui::Button::new("Copy data link"))
            .clicked()
        {
            actions::export::copy_csv_link(app, ui.ctx());
        }

        ui.checkbox(&mut app.state.gui.show_grid, "Raw data");
    });
}
