// src/progress.rs
/// Lightweight progress reporting used by the sequential scrape loop.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one matchday column has been scraped.
    fn matchday_done(&mut self, _matchday: u32) {}

    /// Called at the end, successful or not.
    fn finish(&mut self, _total: usize) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
