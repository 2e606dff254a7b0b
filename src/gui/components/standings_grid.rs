// src/gui/components/standings_grid.rs
//
// Raw standings grid: one row per rank, one column per matchday.
// Purely a view over the scraped table.

use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(table) = app.standings.clone() else {
        return;
    };
    if table.is_empty() {
        ui.small("No played matchdays.");
        return;
    }

    let matchdays = table.num_matchdays();
    let rows = table.rows();

    egui::ScrollArea::horizontal()
        .id_salt("grid_scroll")
        .show(ui, |ui| {
            TableBuilder::new(ui)
                .striped(true)
                .column(Column::exact(40.0))
                .columns(Column::auto().at_least(120.0), matchdays)
                .header(20.0, |mut header| {
                    header.col(|ui| {
                        ui.strong("Pos");
                    });
                    for m in 1..=matchdays {
                        header.col(|ui| {
                            ui.strong(format!("{m}"));
                        });
                    }
                })
                .body(|mut body| {
                    for (pos, row) in rows.iter().enumerate() {
                        body.row(18.0, |mut r| {
                            r.col(|ui| {
                                ui.label(format!("{}", pos + 1));
                            });
                            for cell in row {
                                r.col(|ui| {
                                    ui.label(cell);
                                });
                            }
                        });
                    }
                });
        });
}
