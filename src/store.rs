// src/store.rs
//
// Per-(league, season) scrape cache. Populated at most once per key and
// read-only thereafter; no TTL, entries live until evicted or the process
// exits. Eviction is FIFO by insertion order once `capacity` is reached,
// purely to bound memory across many league/season switches in a session.

use std::collections::{HashMap, VecDeque};

use crate::table::StandingsTable;

/// (league slug, season end year)
pub type SeasonKey = (String, u16);

pub struct ScrapeCache {
    capacity: usize,
    order: VecDeque<SeasonKey>,
    map: HashMap<SeasonKey, StandingsTable>,
}

impl ScrapeCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            order: VecDeque::new(),
            map: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn contains(&self, key: &SeasonKey) -> bool {
        self.map.contains_key(key)
    }

    pub fn get(&self, key: &SeasonKey) -> Option<&StandingsTable> {
        self.map.get(key)
    }

    pub fn insert(&mut self, key: SeasonKey, table: StandingsTable) {
        if self.map.insert(key.clone(), table).is_none() {
            self.order.push_back(key);
        }
        while self.map.len() > self.capacity {
            match self.order.pop_front() {
                Some(oldest) => {
                    self.map.remove(&oldest);
                    logd!("Cache: evicted {}/{}", oldest.0, oldest.1);
                }
                None => break,
            }
        }
    }

    /// Return the cached table for `key`, running `fetch` only on a miss.
    /// Repeated calls for the same key never re-fetch.
    pub fn get_or_fetch<E>(
        &mut self,
        key: &SeasonKey,
        fetch: impl FnOnce() -> Result<StandingsTable, E>,
    ) -> Result<&StandingsTable, E> {
        if !self.map.contains_key(key) {
            let table = fetch()?;
            logf!(
                "Cache: stored {}/{} ({} matchdays)",
                key.0,
                key.1,
                table.num_matchdays()
            );
            self.insert(key.clone(), table);
        }
        Ok(self.map.get(key).expect("present after insert"))
    }
}
