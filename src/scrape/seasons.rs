// src/scrape/seasons.rs
//
// Season range resolver: the schedule index page carries a
// <select name="saison"> with one option per archived season, newest
// first. Option labels look like "2020/2021"; the end year identifies
// the season throughout this crate.

use std::error::Error;

use crate::core::html::{next_tag_block_ci, opener_has_attr, tag_inner_texts};
use crate::core::net;
use crate::core::sanitize::{normalize_entities, normalize_ws};

use super::schedule_index_path;

/// Earliest and latest season end years with data for `slug`.
/// One GET, no retry; a missing or unparsable selector is an error.
pub fn fetch(slug: &str) -> Result<(u16, u16), Box<dyn Error>> {
    let doc = net::http_get(&schedule_index_path(slug))?;
    parse_index_doc(&doc)
}

/// Split out for unit tests.
pub fn parse_index_doc(doc: &str) -> Result<(u16, u16), Box<dyn Error>> {
    let select = season_selector(doc).ok_or("season selector not found")?;

    let labels = tag_inner_texts(select, "<option", "</option>");
    let newest = labels.first().ok_or("season selector is empty")?;
    let oldest = labels.last().ok_or("season selector is empty")?;

    Ok((end_year(oldest)?, end_year(newest)?))
}

fn season_selector(doc: &str) -> Option<&str> {
    let mut pos = 0usize;
    while let Some((bs, be)) = next_tag_block_ci(doc, "<select", "</select>", pos) {
        let block = &doc[bs..be];
        pos = be;
        if opener_has_attr(block, "name", "saison") {
            return Some(block);
        }
    }
    None
}

/// "2020/2021" → 2021. A label without a slash-separated end year is a
/// structural change on the site and surfaces as a parse error.
fn end_year(label: &str) -> Result<u16, Box<dyn Error>> {
    let clean = normalize_ws(&normalize_entities(label));
    let (_, end) = clean
        .split_once('/')
        .ok_or_else(|| format!("unexpected season label: {:?}", clean))?;
    Ok(end.trim().parse::<u16>()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_newest_and_oldest_end_years() {
        let doc = r#"
            <html><body>
              <form><select name="saison">
                <option value="2021">2020/2021</option>
                <option value="2020">2019/2020</option>
                <option value="2019">2018/2019</option>
              </select></form>
            </body></html>
        "#;
        assert_eq!(parse_index_doc(doc).unwrap(), (2019, 2021));
    }

    #[test]
    fn ignores_other_selectors() {
        let doc = r#"
            <select name='runde'><option>1. Round</option></select>
            <select name='saison'><option>1999/2000</option></select>
        "#;
        assert_eq!(parse_index_doc(doc).unwrap(), (2000, 2000));
    }

    #[test]
    fn missing_selector_is_an_error() {
        assert!(parse_index_doc("<html><body>nothing here</body></html>").is_err());
    }

    #[test]
    fn single_year_label_is_an_error() {
        let doc = r#"<select name="saison"><option>2021</option></select>"#;
        assert!(parse_index_doc(doc).is_err());
    }
}
