// src/config/options.rs
use std::path::PathBuf;
use super::consts::*;

#[derive(Clone, Debug, PartialEq)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub chart: ChartOptions,
    pub export: ExportOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            scrape: ScrapeOptions::default(),
            chart: ChartOptions::default(),
            export: ExportOptions::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    /// League display name (one of `consts::LEAGUES`).
    pub league: String,
    /// Season end year, e.g. 2021 for 2020/21.
    pub season: u16,
}

impl ScrapeOptions {
    pub fn slug(&self) -> &'static str {
        league_slug(&self.league)
    }
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            league: s!("Premier League"),
            season: 2021,
        }
    }
}

/// One highlighted team and its line/label color.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Highlight {
    pub team: String,
    pub color: [u8; 3],
}

/// Render parameters for a single pass. The GUI mutates a working copy
/// through its widgets; the renderer only ever sees a shared reference.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartOptions {
    pub aspect_ratio: f32,
    pub facecolor: [u8; 3],
    /// Empty string means "auto title from league + season".
    pub custom_title: String,
    pub subtitle: bool,
    /// Selection order is preserved; it drives subtitle and draw order.
    pub highlights: Vec<Highlight>,
}

impl ChartOptions {
    /// Color for the n-th new highlight: fixed cycle, then white.
    pub fn next_highlight_color(&self) -> [u8; 3] {
        DEFAULT_HIGHLIGHT_COLORS
            .get(self.highlights.len())
            .copied()
            .unwrap_or([0xFF, 0xFF, 0xFF])
    }

    pub fn highlight_color(&self, team: &str) -> Option<[u8; 3]> {
        self.highlights
            .iter()
            .find(|h| h.team == team)
            .map(|h| h.color)
    }

    pub fn toggle_highlight(&mut self, team: &str) {
        if let Some(ix) = self.highlights.iter().position(|h| h.team == team) {
            self.highlights.remove(ix);
        } else {
            let color = self.next_highlight_color();
            self.highlights.push(Highlight { team: s!(team), color });
        }
    }

    /// Drop highlights for teams not present in `teams` (league/season switch).
    pub fn retain_teams(&mut self, teams: &[String]) {
        self.highlights.retain(|h| teams.iter().any(|t| t == &h.team));
    }
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            aspect_ratio: DEFAULT_ASPECT_RATIO,
            facecolor: DEFAULT_FACECOLOR,
            custom_title: s!(),
            subtitle: true,
            highlights: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub out_dir: PathBuf,
}

impl ExportOptions {
    pub fn png_path(&self) -> PathBuf {
        self.out_dir.join(PNG_FILENAME)
    }
    pub fn csv_path(&self) -> PathBuf {
        self.out_dir.join(CSV_FILENAME)
    }
    pub fn links_path(&self) -> PathBuf {
        self.out_dir.join(LINKS_FILENAME)
    }
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { out_dir: PathBuf::from(DEFAULT_OUT_DIR) }
    }
}
