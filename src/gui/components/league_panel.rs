// src/gui/components/league_panel.rs
//
// League + season selection and the scrape trigger. Scraping runs
// synchronously on the UI thread (one render per request); the status
// line reports per-matchday progress written by the progress sink.

use eframe::egui;

use crate::chart::text::season_label;
use crate::config::consts::LEAGUES;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("League & Season");

    let scrape = &mut app.state.options.scrape;
    let prev_league = scrape.league.clone();

    egui::ComboBox::from_id_salt("league_select")
        .selected_text(scrape.league.clone())
        .width(200.0)
        .show_ui(ui, |ui| {
            for league in LEAGUES {
                ui.selectable_value(&mut scrape.league, s!(league.name), league.name);
            }
        });

    if scrape.league != prev_league {
        logf!("UI: League → {}", scrape.league);
        // Old table no longer matches the selector; next scrape refills.
        app.standings = None;
        app.chart_tex = None;
        app.chart_png.clear();
        app.state.options.chart.highlights.clear();
        app.status("League changed — scrape to load standings");
    }

    let scrape = &mut app.state.options.scrape;
    let range = app.season_ranges.get(scrape.slug()).copied();

    ui.horizontal(|ui| {
        ui.label("Season:");
        let drag = match range {
            Some((lo, hi)) => egui::DragValue::new(&mut scrape.season).range(lo..=hi),
            None => egui::DragValue::new(&mut scrape.season).range(1888..=2100),
        };
        ui.add(drag);
    });

    ui.label(format!("Selected season: {}", season_label(scrape.season)));
    if let Some((lo, hi)) = range {
        ui.small(format!("Data available: {lo} – {hi}"));
    }

    ui.add_space(4.0);

    let red = egui::Color32::from_rgb(220, 30, 30);
    let button = egui::Button::new(
        egui::RichText::new("SCRAPE")
            .color(egui::Color32::BLACK)
            .strong(),
    )
    .fill(red);

    if ui.add(button).clicked() {
        crate::gui::actions::scrape(app);
    }

    let status = app.status.lock().unwrap().clone();
    ui.label(status);
}
