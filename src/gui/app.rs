// src/gui/app.rs
use std::{
    collections::HashMap,
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::{consts::CACHE_CAPACITY, state::AppState},
    store::ScrapeCache,
    table::StandingsTable,
};

use super::components;

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "League Standings",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // scraped tables, key = (league slug, season end year)
    pub cache: ScrapeCache,

    // per-league season ranges, resolved once per league
    pub season_ranges: HashMap<&'static str, (u16, u16)>,

    // table behind the current chart (cloned out of the cache)
    pub standings: Option<StandingsTable>,

    // current render: GUI texture + PNG bytes for export
    pub chart_tex: Option<egui::TextureHandle>,
    pub chart_png: Vec<u8>,
    pub chart_dirty: bool,

    // status line (progress sink writes here)
    pub status: Arc<Mutex<String>>,
}

impl App {
    pub fn new(mut state: AppState) -> Self {
        state.gui.out_dir_text = state
            .options
            .export
            .out_dir
            .to_string_lossy()
            .into_owned();

        logf!(
            "Init: league={}, season={}",
            state.options.scrape.league,
            state.options.scrape.season
        );

        Self {
            state,
            cache: ScrapeCache::new(CACHE_CAPACITY),
            season_ranges: HashMap::new(),
            standings: None,
            chart_tex: None,
            chart_png: Vec::new(),
            chart_dirty: false,
            status: Arc::new(Mutex::new(s!("Idle"))),
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        *self.status.lock().unwrap() = msg.into();
    }

    #[inline]
    pub fn mark_dirty(&mut self) {
        self.chart_dirty = true;
    }

    /// Team names offered for highlighting (latest matchday order).
    pub fn team_names(&self) -> Vec<String> {
        self.standings
            .as_ref()
            .map(|t| t.team_names().to_vec())
            .unwrap_or_default()
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.chart_dirty && self.standings.is_some() {
            super::actions::render(self, ctx);
        }

        egui::SidePanel::left("controls")
            .resizable(false)
            .default_width(280.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    components::league_panel::draw(ui, self);
                    ui.separator();
                    components::highlight_panel::draw(ui, self);
                    ui.separator();
                    components::aesthetics_panel::draw(ui, self);
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::export_bar::draw(ui, self);

            ui.separator();

            components::chart_view::draw(ui, self);

            if self.state.gui.show_grid {
                ui.separator();
                components::standings_grid::draw(ui, self);
            }
        });
    }
}
