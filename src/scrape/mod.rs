// src/scrape/mod.rs
pub mod seasons;
pub mod standings;

/// Schedule index page for a league (season selector lives here).
pub fn schedule_index_path(slug: &str) -> String {
    format!("schedule/{slug}")
}

/// Result page for one matchday of one season. `season` is the end year,
/// so 2021 addresses the 2020/21 season.
pub fn matchday_path(slug: &str, season: u16, matchday: u32) -> String {
    format!("schedule/{}-{}-{}-spieltag/{}/", slug, season - 1, season, matchday)
}
