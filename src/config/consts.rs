// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://www.worldfootball.net/";
pub const USER_AGENT: &str = concat!("standings_chart/", env!("CARGO_PKG_VERSION"));
pub const REQUEST_TIMEOUT_SECS: u64 = 15;

// Leagues offered in the UI, mapped to the site's slugs.
pub struct League {
    pub name: &'static str,
    pub slug: &'static str,
}

pub const LEAGUES: &[League] = &[
    League { name: "Premier League", slug: "eng-premier-league" },
    League { name: "La Liga",        slug: "esp-primera-division" },
    League { name: "Bundesliga",     slug: "bundesliga" },
    League { name: "Serie A",        slug: "ita-serie-a" },
    League { name: "Ligue 1",        slug: "fra-ligue-1" },
    League { name: "Eredivisie",     slug: "ned-eredivisie" },
    League { name: "Primeira Liga",  slug: "por-primeira-liga" },
];

/// Slug for a league display name. Unknown names fall back to the
/// Premier League, matching the site's own default.
pub fn league_slug(name: &str) -> &'static str {
    LEAGUES
        .iter()
        .find(|l| l.name.eq_ignore_ascii_case(name))
        .map(|l| l.slug)
        .unwrap_or("eng-premier-league")
}

// Scrape
//
// Safety bound on the sequential matchday loop. A 20-team double
// round-robin is 38 matchdays; 64 leaves headroom for playoff rounds.
pub const MAX_MATCHDAYS: u32 = 64;

// Scrape cache: FIFO eviction once this many (league, season) tables are
// held. No TTL; entries are stale until process restart.
pub const CACHE_CAPACITY: usize = 16;

// Chart
pub const CANVAS_WIDTH: u32 = 2000;
pub const DEFAULT_ASPECT_RATIO: f32 = 0.60;
pub const MIN_ASPECT_RATIO: f32 = 0.40;
pub const MAX_ASPECT_RATIO: f32 = 0.80;
pub const DEFAULT_FACECOLOR: [u8; 3] = [0x11, 0x11, 0x11];
pub const NEUTRAL_TEAM_COLOR: [u8; 3] = [105, 105, 105]; // dimgrey

// Color cycle for newly highlighted teams; white once exhausted.
pub const DEFAULT_HIGHLIGHT_COLORS: &[[u8; 3]] = &[
    [0xFF, 0x00, 0x00],
    [0x2E, 0xFD, 0xF7],
    [0x3B, 0xEF, 0x1D],
    [0xE6, 0x4B, 0xF7],
];

pub const MAX_TITLE_CHARS: usize = 40;

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const PNG_FILENAME: &str = "league-standings-overview.png";
pub const CSV_FILENAME: &str = "raw_data.csv";
pub const LINKS_FILENAME: &str = "downloads.html";
