// src/gui/actions/scrape.rs
use crate::{
    gui::app::App,
    gui::progress::GuiProgress,
    scrape::{seasons, standings},
};

/// Resolve the season range (once per league), clamp the requested
/// season into it, then fetch standings through the cache. A repeat
/// request for a cached (league, season) never hits the network.
pub fn scrape(app: &mut App) {
    let slug = app.state.options.scrape.slug();

    let range = match app.season_ranges.get(slug).copied() {
        Some(r) => r,
        None => match seasons::fetch(slug) {
            Ok(r) => {
                logf!("Seasons: {} → {}–{}", slug, r.0, r.1);
                app.season_ranges.insert(slug, r);
                r
            }
            Err(e) => {
                loge!("Seasons: {} failed: {}", slug, e);
                app.status(format!("Error: {e}"));
                return;
            }
        },
    };

    let season = app.state.options.scrape.season.clamp(range.0, range.1);
    app.state.options.scrape.season = season;

    logf!("Scrape: Begin {}/{}", slug, season);
    let mut prog = GuiProgress::new(app.status.clone());

    let key = (s!(slug), season);
    let was_cached = app.cache.contains(&key);

    let table = match app
        .cache
        .get_or_fetch(&key, || standings::fetch(slug, season, Some(&mut prog)))
    {
        Ok(t) => t.clone(),
        Err(e) => {
            loge!("Scrape: {}/{} failed: {}", slug, season, e);
            app.status(format!("Error: {e}"));
            return;
        }
    };

    if !table.is_consistent() {
        // Still renderable; trajectories just get gaps. Worth a trace.
        loge!("Scrape: {}/{} columns are not one team set", slug, season);
    }

    logf!(
        "Scrape: OK {}/{} matchdays={} teams={} cached={}",
        slug,
        season,
        table.num_matchdays(),
        table.num_teams(),
        was_cached
    );

    // Highlights from a previous season may no longer exist.
    let names = table.team_names().to_vec();
    app.state.options.chart.retain_teams(&names);

    app.standings = Some(table);
    app.mark_dirty();
    if was_cached {
        app.status("Loaded from cache");
    }
}
