// src/chart/render.rs
//
// Bump chart renderer. Data coordinates: x = matchday (1-based),
// y = position (0 = first place), y axis inverted by a descending
// range. The band above position 0 (y in -4..0) is headroom for the
// title block.

use std::error::Error;

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{FontDesc, FontFamily, FontStyle, FontTransform};

use crate::config::consts::{CANVAS_WIDTH, NEUTRAL_TEAM_COLOR};
use crate::config::options::ChartOptions;
use crate::table::StandingsTable;

use super::geometry::connector;
use super::text::{subtitle_spans, title_text, Span};

/// Samples per Bézier segment when flattening connectors.
const CURVE_STEPS: usize = 24;
const LINE_WIDTH: u32 = 3;
const DOT_RADIUS: i32 = 6;
const DOT_ALPHA: f64 = 0.3;

const TITLE_SIZE: f64 = 36.0;
const SUBTITLE_SIZE: f64 = 28.0;
const LABEL_SIZE: f64 = 18.0;
const TICK_SIZE: f64 = 12.0;
const AXIS_SIZE: f64 = 18.0;

/// Everything one render pass needs, borrowed immutably.
pub struct ChartRequest<'a> {
    pub table: &'a StandingsTable,
    pub options: &'a ChartOptions,
    pub league: &'a str,
    pub season: u16,
}

impl ChartRequest<'_> {
    pub fn canvas_size(&self) -> (u32, u32) {
        let w = CANVAS_WIDTH;
        let h = (w as f32 * self.options.aspect_ratio).round() as u32;
        (w, h.max(1))
    }
}

/// Render into an RGB8 buffer (w * h * 3 bytes). Never fails on a valid
/// table; a zero-matchday table yields background and title only.
pub fn render_rgb(req: &ChartRequest) -> Result<(Vec<u8>, (u32, u32)), Box<dyn Error>> {
    let (w, h) = req.canvas_size();
    let mut buf = vec![0u8; (w as usize) * (h as usize) * 3];
    {
        let root = BitMapBackend::with_buffer(&mut buf, (w, h)).into_drawing_area();
        draw(&root, req)?;
        root.present().map_err(draw_err)?;
    }
    Ok((buf, (w, h)))
}

/// Render and PNG-encode.
pub fn render_png(req: &ChartRequest) -> Result<Vec<u8>, Box<dyn Error>> {
    let (buf, dims) = render_rgb(req)?;
    encode_png(buf, dims)
}

/// PNG-encode an RGB8 buffer from `render_rgb`.
pub fn encode_png(buf: Vec<u8>, (w, h): (u32, u32)) -> Result<Vec<u8>, Box<dyn Error>> {
    let img = image::RgbImage::from_raw(w, h, buf).ok_or("chart buffer size mismatch")?;
    let mut png = std::io::Cursor::new(Vec::new());
    img.write_to(&mut png, image::ImageFormat::Png)?;
    Ok(png.into_inner())
}

/// Teams in paint order: latest standings order, highlighted teams
/// moved to the back (in highlight order) so their paths draw on top.
pub fn draw_order(table: &StandingsTable, options: &ChartOptions) -> Vec<String> {
    let mut names: Vec<String> = table.team_names().to_vec();
    for h in &options.highlights {
        if let Some(ix) = names.iter().position(|n| n == &h.team) {
            let name = names.remove(ix);
            names.push(name);
        }
    }
    names
}

fn draw<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    req: &ChartRequest,
) -> Result<(), Box<dyn Error>> {
    let opts = req.options;
    let facecolor = rgb(opts.facecolor);

    root.fill(&facecolor).map_err(draw_err)?;
    draw_heading(root, req)?;

    let table = req.table;
    if table.is_empty() {
        return Ok(()); // nothing played yet: empty plot area, no error
    }

    let n = table.num_matchdays() as f64;
    let teams = table.num_teams() as f64;

    let mut chart = ChartBuilder::on(root)
        .margin(0)
        .build_cartesian_2d(-1.0..(n + 3.0), (teams + 1.0)..-4.0)
        .map_err(draw_err)?;

    for team in draw_order(table, opts) {
        let highlight = opts.highlight_color(&team);
        let color = rgb(highlight.unwrap_or(NEUTRAL_TEAM_COLOR));
        let coords: Vec<(f64, f64)> = table
            .trajectory(&team)
            .into_iter()
            .map(|(m, p)| (m as f64, p as f64))
            .collect();

        for pair in coords.windows(2) {
            let pts = connector(pair[0], pair[1]).points(CURVE_STEPS);
            chart
                .draw_series(LineSeries::new(pts, color.stroke_width(LINE_WIDTH)))
                .map_err(draw_err)?;
        }

        for &(x, y) in &coords {
            chart
                .draw_series(std::iter::once(Circle::new(
                    (x, y),
                    DOT_RADIUS,
                    color.mix(DOT_ALPHA).filled(),
                )))
                .map_err(draw_err)?;
        }

        if let Some(&(_, last_pos)) = coords.last() {
            let font = if highlight.is_some() {
                FontDesc::new(FontFamily::SansSerif, LABEL_SIZE, FontStyle::Bold)
            } else {
                FontDesc::new(FontFamily::SansSerif, LABEL_SIZE, FontStyle::Normal)
            };
            let style = TextStyle::from(font)
                .color(&color)
                .pos(Pos::new(HPos::Left, VPos::Center));
            chart
                .draw_series(std::iter::once(Text::new(
                    team.clone(),
                    (n + 0.75, last_pos),
                    style,
                )))
                .map_err(draw_err)?;
        }
    }

    // Hand-placed axis furniture; no mesh, no frame.
    let white = RGBColor(255, 255, 255);
    let tick = TextStyle::from(FontDesc::new(FontFamily::SansSerif, TICK_SIZE, FontStyle::Normal))
        .color(&white)
        .pos(Pos::new(HPos::Center, VPos::Center));

    for m in 1..=table.num_matchdays() {
        chart
            .draw_series(std::iter::once(Text::new(
                format!("{m}"),
                (m as f64, teams - 0.25),
                tick.clone(),
            )))
            .map_err(draw_err)?;
    }
    for p in 0..table.num_teams() {
        chart
            .draw_series(std::iter::once(Text::new(
                format!("{}", p + 1),
                (0.5, p as f64),
                tick.clone(),
            )))
            .map_err(draw_err)?;
    }

    let axis = TextStyle::from(FontDesc::new(FontFamily::SansSerif, AXIS_SIZE, FontStyle::Normal))
        .color(&white)
        .pos(Pos::new(HPos::Center, VPos::Center));
    chart
        .draw_series(std::iter::once(Text::new(
            s!("Gameweek"),
            ((1.0 + n) / 2.0, teams + 0.5),
            axis.clone(),
        )))
        .map_err(draw_err)?;
    chart
        .draw_series(std::iter::once(Text::new(
            s!("Position"),
            (-0.25, teams / 2.0),
            axis.transform(FontTransform::Rotate270),
        )))
        .map_err(draw_err)?;

    Ok(())
}

/// Title and, when enabled, the colored subtitle, centered near the top.
fn draw_heading<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    req: &ChartRequest,
) -> Result<(), Box<dyn Error>> {
    let opts = req.options;
    let (w, h) = req.canvas_size();
    let white = RGBColor(255, 255, 255);

    let title = title_text(&opts.custom_title, req.league, req.season);
    let title_style =
        TextStyle::from(FontDesc::new(FontFamily::SansSerif, TITLE_SIZE, FontStyle::Bold))
            .color(&white)
            .pos(Pos::new(HPos::Center, VPos::Top));
    let title_y = (h as f64 * 0.04) as i32;
    root.draw(&Text::new(title, (w as i32 / 2, title_y), title_style))
        .map_err(draw_err)?;

    if !opts.subtitle || opts.highlights.is_empty() {
        return Ok(());
    }

    let spans = subtitle_spans(&opts.highlights);
    let subtitle_y = title_y + (TITLE_SIZE * 1.6) as i32;

    // Lay the spans out as one centered line: measure each, then walk
    // left to right from the centered start position.
    let mut widths = Vec::with_capacity(spans.len());
    let mut total = 0i32;
    for sp in &spans {
        let (sw, _sh) = root
            .estimate_text_size(&sp.text, &span_style(sp))
            .map_err(draw_err)?;
        widths.push(sw as i32);
        total += sw as i32;
    }

    let mut x = (w as i32 - total) / 2;
    for (sp, sw) in spans.iter().zip(widths) {
        root.draw(&Text::new(sp.text.clone(), (x, subtitle_y), span_style(sp)))
            .map_err(draw_err)?;
        x += sw;
    }
    Ok(())
}

fn span_style(sp: &Span) -> TextStyle<'static> {
    let (color, weight) = match sp.color {
        Some(c) => (rgb(c), FontStyle::Bold),
        None => (RGBColor(255, 255, 255), FontStyle::Normal),
    };
    let mut style = TextStyle::from(FontDesc::new(FontFamily::SansSerif, SUBTITLE_SIZE, weight))
        .pos(Pos::new(HPos::Left, VPos::Top));
    style.color = color.to_backend_color();
    style
}

fn rgb(c: [u8; 3]) -> RGBColor {
    RGBColor(c[0], c[1], c[2])
}

fn draw_err(e: impl std::fmt::Display) -> Box<dyn Error> {
    format!("chart: {e}").into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::options::Highlight;

    fn options(highlights: &[&str]) -> ChartOptions {
        let mut o = ChartOptions::default();
        for (i, t) in highlights.iter().enumerate() {
            o.highlights.push(Highlight {
                team: s!(*t),
                color: [i as u8, 0, 0],
            });
        }
        o
    }

    #[test]
    fn highlighted_teams_paint_last() {
        let table = StandingsTable::from_columns(vec![vec![
            s!("A"),
            s!("B"),
            s!("C"),
            s!("D"),
        ]]);
        let order = draw_order(&table, &options(&["B", "A"]));
        assert_eq!(order, vec![s!("C"), s!("D"), s!("B"), s!("A")]);
    }

    #[test]
    fn unknown_highlight_leaves_order_alone() {
        let table = StandingsTable::from_columns(vec![vec![s!("A"), s!("B")]]);
        let order = draw_order(&table, &options(&["Nobody"]));
        assert_eq!(order, vec![s!("A"), s!("B")]);
    }
}
