// tests/scrape_cache.rs
//
// Cache behavior: one fetch per (league, season) key, FIFO eviction.

use standings_chart::store::{ScrapeCache, SeasonKey};
use standings_chart::table::StandingsTable;

fn key(slug: &str, season: u16) -> SeasonKey {
    (slug.to_string(), season)
}

fn table(team: &str) -> StandingsTable {
    StandingsTable::from_columns(vec![vec![team.to_string()]])
}

#[test]
fn fetch_closure_runs_once_per_key() {
    let mut cache = ScrapeCache::new(8);
    let k = key("eng-premier-league", 2021);
    let mut calls = 0;

    for _ in 0..3 {
        let t = cache
            .get_or_fetch(&k, || -> Result<_, String> {
                calls += 1;
                Ok(table("Arsenal"))
            })
            .unwrap();
        assert_eq!(t.team_names(), ["Arsenal".to_string()]);
    }

    assert_eq!(calls, 1, "repeat requests must be served from cache");
}

#[test]
fn distinct_keys_fetch_separately() {
    let mut cache = ScrapeCache::new(8);
    let mut calls = 0;
    for season in [2019u16, 2020, 2021] {
        cache
            .get_or_fetch(&key("bundesliga", season), || -> Result<_, String> {
                calls += 1;
                Ok(table("Bayern"))
            })
            .unwrap();
    }
    assert_eq!(calls, 3);
    assert_eq!(cache.len(), 3);
}

#[test]
fn failed_fetch_is_not_cached() {
    let mut cache = ScrapeCache::new(8);
    let k = key("ita-serie-a", 2021);

    let err = cache.get_or_fetch(&k, || Err::<StandingsTable, _>("boom".to_string()));
    assert!(err.is_err());
    assert!(!cache.contains(&k));

    // Next attempt runs the closure again and can succeed.
    let ok = cache.get_or_fetch(&k, || -> Result<_, String> { Ok(table("Inter")) });
    assert!(ok.is_ok());
    assert!(cache.contains(&k));
}

#[test]
fn eviction_is_fifo_at_capacity() {
    let mut cache = ScrapeCache::new(2);
    cache.insert(key("a", 1), table("A"));
    cache.insert(key("b", 2), table("B"));
    cache.insert(key("c", 3), table("C"));

    assert_eq!(cache.len(), 2);
    assert!(!cache.contains(&key("a", 1)), "oldest entry evicted first");
    assert!(cache.contains(&key("b", 2)));
    assert!(cache.contains(&key("c", 3)));
}

#[test]
fn reinserting_same_key_does_not_grow() {
    let mut cache = ScrapeCache::new(2);
    cache.insert(key("a", 1), table("A"));
    cache.insert(key("a", 1), table("A2"));
    assert_eq!(cache.len(), 1);
    assert_eq!(
        cache.get(&key("a", 1)).unwrap().team_names(),
        ["A2".to_string()]
    );
}
