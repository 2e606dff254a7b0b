// src/export.rs
//
// Fixed-format exports: CSV of the standings grid, PNG of the rendered
// chart, and base64 data-URI anchors for both. One encoder serves the
// GUI (clipboard links, file saves) and the CLI (files, downloads.html).

use std::error::Error;
use std::fs;
use std::path::Path;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::config::consts::{CSV_FILENAME, PNG_FILENAME};
use crate::csv;
use crate::table::StandingsTable;

/// Standings grid as CSV: header `Position,1..N`, one row per rank with
/// the team holding that rank at each matchday.
pub fn standings_csv(table: &StandingsTable) -> String {
    let mut header = vec![s!("Position")];
    header.extend((1..=table.num_matchdays()).map(|m| m.to_string()));

    let rows: Vec<Vec<String>> = table
        .rows()
        .into_iter()
        .enumerate()
        .map(|(pos, mut row)| {
            let mut full = vec![(pos + 1).to_string()];
            full.append(&mut row);
            full
        })
        .collect();

    csv::to_csv_string(&header, &rows)
}

/// `<a href="data:…;base64,…" download="…">Download</a>`
fn download_link(mime: &str, payload: &[u8], filename: &str) -> String {
    format!(
        r#"<a href="data:{};base64,{}" download="{}">Download</a>"#,
        mime,
        BASE64.encode(payload),
        filename
    )
}

pub fn png_download_link(png: &[u8]) -> String {
    download_link("image/png", png, PNG_FILENAME)
}

pub fn csv_download_link(csv_text: &str) -> String {
    download_link("text/csv", csv_text.as_bytes(), CSV_FILENAME)
}

/// Minimal HTML page holding both download anchors (CLI `--links`).
pub fn links_page(png: &[u8], csv_text: &str) -> String {
    format!(
        "<!doctype html>\n<html><body>\n<h3>Downloads</h3>\n<ul>\n\
         <li>Image (.png): {}</li>\n<li>Raw data (.csv): {}</li>\n</ul>\n</body></html>\n",
        png_download_link(png),
        csv_download_link(csv_text)
    )
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn Error>> {
    if !dir.as_os_str().is_empty() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// Write `contents` under `path`, creating parent directories.
pub fn write_file(path: &Path, contents: &[u8]) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        ensure_directory(parent)?;
    }
    fs::write(path, contents)?;
    Ok(())
}
