// src/gui/actions/export.rs
use std::path::PathBuf;

use eframe::egui;

use crate::export;
use crate::gui::app::App;

/// Mirror the output text field into ExportOptions before any export.
fn sync_out_dir(app: &mut App) {
    let text = app.state.gui.out_dir_text.trim();
    if !text.is_empty() {
        app.state.options.export.out_dir = PathBuf::from(text);
    }
}

pub fn save_png(app: &mut App) {
    sync_out_dir(app);
    if app.chart_png.is_empty() {
        logd!("Export: Save PNG clicked with no rendered chart");
        app.status("Nothing to export");
        return;
    }
    let path = app.state.options.export.png_path();
    match export::write_file(&path, &app.chart_png) {
        Ok(()) => {
            logf!("Export: PNG → {}", path.display());
            app.status(format!("Saved {}", path.display()));
        }
        Err(e) => {
            loge!("Export: PNG failed: {}", e);
            app.status(format!("Export error: {e}"));
        }
    }
}

pub fn save_csv(app: &mut App) {
    sync_out_dir(app);
    let Some(table) = app.standings.as_ref() else {
        app.status("Nothing to export");
        return;
    };
    let csv_text = export::standings_csv(table);
    let path = app.state.options.export.csv_path();
    match export::write_file(&path, csv_text.as_bytes()) {
        Ok(()) => {
            logf!("Export: CSV → {}", path.display());
            app.status(format!("Saved {}", path.display()));
        }
        Err(e) => {
            loge!("Export: CSV failed: {}", e);
            app.status(format!("Export error: {e}"));
        }
    }
}

pub fn copy_image_link(app: &App, ctx: &egui::Context) {
    if app.chart_png.is_empty() {
        app.status("Nothing to copy");
        return;
    }
    ctx.copy_text(export::png_download_link(&app.chart_png));
    logf!("Export: image link copied ({} bytes)", app.chart_png.len());
    app.status("Image link copied to clipboard");
}

pub fn copy_csv_link(app: &App, ctx: &egui::Context) {
    let Some(table) = app.standings.as_ref() else {
        app.status("Nothing to copy");
        return;
    };
    let csv_text = export::standings_csv(table);
    ctx.copy_text(export::csv_download_link(&csv_text));
    logf!("Export: data link copied ({} rows)", table.num_teams());
    app.status("Data link copied to clipboard");
}
