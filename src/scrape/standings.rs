// src/scrape/standings.rs
//
// Standings scraper: one page per matchday, fetched strictly in order
// (page numbering is sequential). Each played page contributes one
// ranking column; the first unplayed matchday terminates the loop and
// the table built so far is final.

use std::error::Error;
use std::time::Instant;

use crate::config::consts::MAX_MATCHDAYS;
use crate::core::html::{nth_block_with_class_ci, strip_tags, tag_inner_texts};
use crate::core::net;
use crate::core::sanitize::{normalize_entities, normalize_ws};
use crate::progress::Progress;
use crate::table::StandingsTable;

use super::matchday_path;

// Site contract (worldfootball.net). The standings grid is the SECOND
// table with this class on a matchday page; the first holds fixtures.
pub const RESULTS_TABLE_CLASS: &str = "standard_tabelle";
pub const RESULTS_TABLE_INDEX: usize = 1;

// Site contract: on a matchday with no standings yet, the first cell of
// that table links news items instead of ranks; unplayed fixtures show
// a "-:-" score anywhere on the page. Either means "not played".
pub const NO_STANDINGS_MARKER: &str = "news";
pub const UNPLAYED_SCORE_MARKER: &str = "-:-";

/// One parsed matchday page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatchdayPage {
    /// Team names in rank order (index 0 = first place).
    Played(Vec<String>),
    NotPlayed,
}

/// Scrape all played matchdays of (league slug, season end year).
/// Matchday 1 unplayed yields an empty table, not an error.
pub fn fetch(
    slug: &str,
    season: u16,
    mut progress: Option<&mut dyn Progress>,
) -> Result<StandingsTable, Box<dyn Error>> {
    let mut table = StandingsTable::new();
    let t = Instant::now();

    for matchday in 1..=MAX_MATCHDAYS {
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Scraping matchday {matchday}…"));
        }

        let doc = net::http_get(&matchday_path(slug, season, matchday))?;
        match parse_matchday_doc(&doc)? {
            MatchdayPage::NotPlayed => break,
            MatchdayPage::Played(teams) => {
                if !table.is_empty() && teams.len() != table.num_teams() {
                    return Err(format!(
                        "matchday {} has {} teams, matchday 1 had {}",
                        matchday,
                        teams.len(),
                        table.num_teams()
                    )
                    .into());
                }
                table.push_matchday(teams);
                if let Some(p) = progress.as_deref_mut() {
                    p.matchday_done(matchday);
                }
            }
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish(table.num_matchdays());
    }
    logd!(
        "Standings: {}/{} → {} matchdays, {} teams in {:?}",
        slug,
        season,
        table.num_matchdays(),
        table.num_teams(),
        t.elapsed()
    );
    Ok(table)
}

/// Split out for unit tests.
pub fn parse_matchday_doc(doc: &str) -> Result<MatchdayPage, Box<dyn Error>> {
    let table = nth_block_with_class_ci(
        doc,
        "<table",
        "</table>",
        RESULTS_TABLE_CLASS,
        RESULTS_TABLE_INDEX,
    )
    .ok_or("standings table not found")?;

    if matchday_not_played(doc, table) {
        return Ok(MatchdayPage::NotPlayed);
    }

    let teams: Vec<String> = tag_inner_texts(table, "<a", "</a>")
        .iter()
        .map(|inner| normalize_ws(&strip_tags(normalize_entities(inner))))
        .filter(|name| !name.is_empty())
        .collect();

    if teams.is_empty() {
        return Err("standings table has no team links".into());
    }
    Ok(MatchdayPage::Played(teams))
}

/// Termination predicate over the two unplayed markers. Kept as one
/// named function so the site contract has a single place to validate.
fn matchday_not_played(doc: &str, table: &str) -> bool {
    let first_cell = tag_inner_texts(table, "<td", "</td>")
        .into_iter()
        .next()
        .map(|inner| normalize_ws(&strip_tags(normalize_entities(&inner))))
        .unwrap_or_default();

    first_cell.to_ascii_lowercase().contains(NO_STANDINGS_MARKER)
        || doc.contains(UNPLAYED_SCORE_MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn played_doc(ranking: &[&str]) -> String {
        let rows: String = ranking
            .iter()
            .enumerate()
            .map(|(i, team)| {
                format!(
                    r#"<tr><td>{}.</td><td><a href="/teams/{}/">{}</a></td><td>{}</td></tr>"#,
                    i + 1,
                    team.to_ascii_lowercase().replace(' ', "-"),
                    team,
                    (ranking.len() - i) * 3,
                )
            })
            .collect();
        format!(
            r#"
            <html><body>
              <table class="standard_tabelle"><tr><td>fixtures</td></tr></table>
              <table class="standard_tabelle">
                <tr><th>#</th><th>Team</th><th>Pts</th></tr>
                {rows}
              </table>
            </body></html>
            "#
        )
    }

    fn unplayed_doc() -> String {
        r#"
        <html><body>
          <table class="standard_tabelle"><tr><td>Arsenal -:- Chelsea</td></tr></table>
          <table class="standard_tabelle">
            <tr><td><a href="/news/1/">Latest news</a></td></tr>
          </table>
        </body></html>
        "#
        .to_string()
    }

    #[test]
    fn extracts_teams_in_table_order() {
        let doc = played_doc(&["Arsenal", "Spurs", "Chelsea"]);
        assert_eq!(
            parse_matchday_doc(&doc).unwrap(),
            MatchdayPage::Played(vec![s!("Arsenal"), s!("Spurs"), s!("Chelsea")])
        );
    }

    #[test]
    fn entities_in_team_names_are_normalized() {
        let doc = played_doc(&["Brighton &amp; Hove Albion"]);
        assert_eq!(
            parse_matchday_doc(&doc).unwrap(),
            MatchdayPage::Played(vec![s!("Brighton & Hove Albion")])
        );
    }

    #[test]
    fn news_cell_means_not_played() {
        assert_eq!(
            parse_matchday_doc(&unplayed_doc()).unwrap(),
            MatchdayPage::NotPlayed
        );
    }

    #[test]
    fn unplayed_score_marker_means_not_played() {
        // Standings table looks normal, but the fixture list still holds
        // an unplayed "-:-" match somewhere on the page.
        let doc = played_doc(&["Arsenal", "Spurs"])
            .replace("fixtures", "Arsenal -:- Spurs");
        assert_eq!(parse_matchday_doc(&doc).unwrap(), MatchdayPage::NotPlayed);
    }

    #[test]
    fn missing_second_table_is_an_error() {
        let doc = r#"<table class="standard_tabelle"><tr><td>only one</td></tr></table>"#;
        assert!(parse_matchday_doc(doc).is_err());
    }
}
