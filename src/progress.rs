// src/progress.rs
use std::path::Path;

use crate::data::PlayerRecord;

/// Lightweight progress reporting used by the collector.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of leaderboard pages.
    fn begin(&mut self, _pages: u32) {}

    /// A leaderboard page is about to be fetched.
    fn page_started(&mut self, _page: u32, _url: &str) {}

    /// One player's profile has been scraped.
    fn player_done(&mut self, _record: &PlayerRecord, _profile_url: &str) {}

    /// The accumulated table has been written (once per page).
    fn exported(&mut self, _path: &Path, _rows: usize) {}

    /// Called at the end of a completed run.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
