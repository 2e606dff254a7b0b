// src/cli.rs
use std::env;
use std::error::Error;
use std::path::PathBuf;

use crate::chart::color::parse_hex;
use crate::chart::{render_png, ChartRequest};
use crate::config::consts::{LEAGUES, MAX_ASPECT_RATIO, MIN_ASPECT_RATIO};
use crate::config::options::{AppOptions, Highlight};
use crate::export;
use crate::progress::Progress;
use crate::scrape::{seasons, standings};

struct CliParams {
    options: AppOptions,
    season_explicit: bool,
    links: bool,
    list_leagues: bool,
    print_seasons: bool,
}

impl CliParams {
    fn new() -> Self {
        Self {
            options: AppOptions::default(),
            season_explicit: false,
            links: false,
            list_leagues: false,
            print_seasons: false,
        }
    }
}

/// Line-per-event progress on stderr, keeping stdout for results.
struct CliProgress;

impl Progress for CliProgress {
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn matchday_done(&mut self, matchday: u32) {
        eprintln!("  matchday {matchday} done");
    }
    fn finish(&mut self, total: usize) {
        eprintln!("Scraped {total} matchday(s)");
    }
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let mut params = CliParams::new();
    parse_cli(&mut params)?;

    if params.list_leagues {
        for league in LEAGUES {
            println!("{} ({})", league.name, league.slug);
        }
        return Ok(());
    }

    let league = params.options.scrape.league.clone();
    let slug = params.options.scrape.slug();

    let (first, last) = seasons::fetch(slug)?;
    if params.print_seasons {
        println!("{}: seasons {}-{}", league, first, last);
        return Ok(());
    }

    let season = if params.season_explicit {
        let wanted = params.options.scrape.season;
        if wanted < first || wanted > last {
            return Err(format!(
                "season {} out of range for {} ({}-{})",
                wanted, league, first, last
            )
            .into());
        }
        wanted
    } else {
        last
    };
    params.options.scrape.season = season;

    let mut prog = CliProgress;
    let table = standings::fetch(slug, season, Some(&mut prog))?;
    if !table.is_consistent() {
        eprintln!("Warning: standings columns are not one team set");
    }

    // Keep only highlights that exist in this season's table.
    let names = table.team_names().to_vec();
    params.options.chart.retain_teams(&names);

    let req = ChartRequest {
        table: &table,
        options: &params.options.chart,
        league: &league,
        season,
    };
    let png = render_png(&req)?;
    let csv_text = export::standings_csv(&table);

    let out = &params.options.export;
    export::write_file(&out.png_path(), &png)?;
    println!("Wrote {}", out.png_path().display());
    export::write_file(&out.csv_path(), csv_text.as_bytes())?;
    println!("Wrote {}", out.csv_path().display());

    if params.links {
        let page = export::links_page(&png, &csv_text);
        export::write_file(&out.links_path(), page.as_bytes())?;
        println!("Wrote {}", out.links_path().display());
    }

    Ok(())
}

fn parse_cli(params: &mut CliParams) -> Result<(), Box<dyn Error>> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "--league" | "-l" => {
                let v = args.next().ok_or("Missing value for --league")?;
                if !LEAGUES.iter().any(|l| l.name.eq_ignore_ascii_case(&v)) {
                    return Err(format!("Unknown league: {} (try --list-leagues)", v).into());
                }
                params.options.scrape.league = v;
            }
            "--season" | "-s" => {
                let v = args.next().ok_or("Missing value for --season")?;
                params.options.scrape.season = v.parse()?;
                params.season_explicit = true;
            }
            "--highlight" => {
                let v = args.next().ok_or("Missing value for --highlight")?;
                let chart = &mut params.options.chart;
                let (team, color) = match v.split_once('=') {
                    Some((team, hex)) => {
                        let color = parse_hex(hex)
                            .ok_or_else(|| format!("Bad color in --highlight: {}", hex))?;
                        (team.to_string(), color)
                    }
                    None => (v, chart.next_highlight_color()),
                };
                chart.highlights.push(Highlight { team, color });
            }
            "--title" => {
                params.options.chart.custom_title =
                    args.next().ok_or("Missing value for --title")?;
            }
            "--no-subtitle" => params.options.chart.subtitle = false,
            "--aspect" => {
                let v: f32 = args.next().ok_or("Missing value for --aspect")?.parse()?;
                if !(MIN_ASPECT_RATIO..=MAX_ASPECT_RATIO).contains(&v) {
                    return Err(format!(
                        "Aspect ratio out of range ({}-{})",
                        MIN_ASPECT_RATIO, MAX_ASPECT_RATIO
                    )
                    .into());
                }
                params.options.chart.aspect_ratio = v;
            }
            "--facecolor" => {
                let v = args.next().ok_or("Missing value for --facecolor")?;
                params.options.chart.facecolor =
                    parse_hex(&v).ok_or_else(|| format!("Bad color: {}", v))?;
            }
            "-o" | "--out" => {
                params.options.export.out_dir =
                    PathBuf::from(args.next().ok_or("Missing output directory")?);
            }
            "--links" => params.links = true,
            "--seasons" => params.print_seasons = true,
            "--list-leagues" => params.list_leagues = true,
            "-h" | "--help" => {
                eprintln!("{}", include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(())
}
