// src/chart/text.rs
//
// Title and subtitle composition. The subtitle is a list of colored
// spans so the renderer can paint team names in their highlight colors
// inside one centered line.

use crate::config::options::Highlight;

/// One subtitle fragment. `color: None` renders in the neutral text
/// color; colored spans are also bold.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub color: Option<[u8; 3]>,
}

impl Span {
    fn plain(text: impl Into<String>) -> Self {
        Self { text: text.into(), color: None }
    }
    fn team(h: &Highlight) -> Self {
        Self { text: h.team.clone(), color: Some(h.color) }
    }
}

/// "2020/21" style season label (end year 2021).
pub fn season_label(season: u16) -> String {
    format!("{}/{:02}", season - 1, season % 100)
}

/// Custom title if present, else the auto title.
pub fn title_text(custom: &str, league: &str, season: u16) -> String {
    if custom.is_empty() {
        format!("{} {} Standings by Gameweek", league, season_label(season))
    } else {
        s!(custom)
    }
}

/// Subtitle spans for the highlighted teams, in selection order:
/// 1 team  → "{A} highlighted."
/// 2 teams → "Comparison between {A} and {B}."
/// 3+      → "Comparison between {A}, {B}, and {C}." (serial comma)
/// Empty highlight list yields no spans.
pub fn subtitle_spans(highlights: &[Highlight]) -> Vec<Span> {
    let mut spans = Vec::new();
    match highlights {
        [] => {}
        [only] => {
            spans.push(Span::team(only));
            spans.push(Span::plain(" highlighted."));
        }
        [a, b] => {
            spans.push(Span::plain("Comparison between "));
            spans.push(Span::team(a));
            spans.push(Span::plain(" and "));
            spans.push(Span::team(b));
            spans.push(Span::plain("."));
        }
        [init @ .., last] => {
            spans.push(Span::plain("Comparison between "));
            for h in init {
                spans.push(Span::team(h));
                spans.push(Span::plain(", "));
            }
            spans.push(Span::plain("and "));
            spans.push(Span::team(last));
            spans.push(Span::plain("."));
        }
    }
    spans
}

/// Concatenated subtitle text (for tests and logs).
pub fn subtitle_text(highlights: &[Highlight]) -> String {
    subtitle_spans(highlights)
        .iter()
        .map(|sp| sp.text.as_str())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hl(names: &[&str]) -> Vec<Highlight> {
        names
            .iter()
            .map(|n| Highlight { team: s!(*n), color: [255, 0, 0] })
            .collect()
    }

    #[test]
    fn auto_title_names_league_and_season() {
        assert_eq!(
            title_text("", "Premier League", 2021),
            "Premier League 2020/21 Standings by Gameweek"
        );
        assert_eq!(title_text("", "Serie A", 2000), "Serie A 1999/00 Standings by Gameweek");
    }

    #[test]
    fn custom_title_wins() {
        assert_eq!(title_text("The Title Race", "La Liga", 2021), "The Title Race");
    }

    #[test]
    fn one_team_subtitle() {
        assert_eq!(subtitle_text(&hl(&["Arsenal"])), "Arsenal highlighted.");
    }

    #[test]
    fn two_team_subtitle() {
        assert_eq!(
            subtitle_text(&hl(&["Arsenal", "Spurs"])),
            "Comparison between Arsenal and Spurs."
        );
    }

    #[test]
    fn three_team_subtitle_uses_serial_comma() {
        assert_eq!(
            subtitle_text(&hl(&["Arsenal", "Spurs", "Chelsea"])),
            "Comparison between Arsenal, Spurs, and Chelsea."
        );
    }

    #[test]
    fn no_highlights_no_subtitle() {
        assert!(subtitle_spans(&[]).is_empty());
    }

    #[test]
    fn team_spans_carry_their_colors() {
        let spans = subtitle_spans(&hl(&["Arsenal", "Spurs"]));
        let colored: Vec<_> = spans.iter().filter(|sp| sp.color.is_some()).collect();
        assert_eq!(colored.len(), 2);
        assert_eq!(colored[0].text, "Arsenal");
    }
}
