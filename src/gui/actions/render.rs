// src/gui/actions/render.rs
use eframe::egui;

use crate::chart::render::{encode_png, render_rgb};
use crate::chart::ChartRequest;
use crate::gui::app::App;

/// Re-render the chart from the current table + options, refreshing the
/// GUI texture and the PNG bytes the export actions hand out.
pub fn render(app: &mut App, ctx: &egui::Context) {
    app.chart_dirty = false;

    let rendered = {
        let Some(table) = app.standings.as_ref() else {
            return;
        };
        let opts = &app.state.options;
        let req = ChartRequest {
            table,
            options: &opts.chart,
            league: &opts.scrape.league,
            season: opts.scrape.season,
        };
        render_rgb(&req)
    };

    match rendered {
        Ok((buf, (w, h))) => {
            let color =
                egui::ColorImage::from_rgb([w as usize, h as usize], &buf);
            app.chart_tex =
                Some(ctx.load_texture("bump-chart", color, Default::default()));

            match encode_png(buf, (w, h)) {
                Ok(png) => app.chart_png = png,
                Err(e) => {
                    loge!("Render: PNG encode failed: {}", e);
                    app.chart_png.clear();
                }
            }
            logd!("Render: OK {}x{}", w, h);
        }
        Err(e) => {
            loge!("Render: {}", e);
            app.status(format!("Render error: {e}"));
        }
    }
}
