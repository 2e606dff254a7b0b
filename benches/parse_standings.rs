// benches/parse_standings.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use standings_chart::scrape::standings::parse_matchday_doc;

/// Synthetic matchday page shaped like the live markup: a fixture table
/// followed by a 20-team standings table, plus filler around both.
fn synthetic_doc(teams: usize) -> String {
    let rows: String = (0..teams)
        .map(|i| {
            format!(
                r#"<tr><td>{}.</td><td><img src="/f.gif"></td>
                   <td><a href="/teams/team-{i}/">Team {i}</a></td>
                   <td>{}</td><td>{}</td></tr>"#,
                i + 1,
                38,
                (teams - i) * 3,
            )
        })
        .collect();
    format!(
        r#"<html><head><title>Matchday</title></head><body>
          <div class="navi">{filler}</div>
          <table class="standard_tabelle"><tr><td>Home 2:1 Away</td></tr></table>
          <table class="standard_tabelle">
            <tr><th>#</th><th></th><th>Team</th><th>M.</th><th>Pts</th></tr>
            {rows}
          </table>
        </body></html>"#,
        filler = "x".repeat(4096),
    )
}

fn bench_parse(c: &mut Criterion) {
    let doc = synthetic_doc(20);

    c.bench_function("parse_matchday", |b| {
        b.iter(|| {
            let page = parse_matchday_doc(black_box(&doc)).unwrap();
            black_box(page)
        })
    });
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
