// src/scrape.rs
use std::path::PathBuf;

use crate::{
    config::options::{AppOptions, ScrapeOptions},
    core::Fetch,
    data::PlayerRecord,
    error::Result,
    file,
    progress::Progress,
    specs::{leaderboard, profile},
};

/// What a completed run produced.
#[derive(Debug)]
pub struct RunSummary {
    pub pages: u32,
    pub records: Vec<PlayerRecord>,
    pub out_path: Option<PathBuf>,
}

/// Scrape one player's profile.
pub fn collect_player(
    fetcher: &dyn Fetch,
    scrape: &ScrapeOptions,
    name: &str,
) -> Result<(PlayerRecord, String)> {
    let url = profile::profile_url(scrape, name);
    let doc = fetcher.get_document(&url)?;
    let stats = profile::extract_stats(&doc, &scrape.titles);
    Ok((PlayerRecord::new(name, stats), url))
}

/// Scrape one leaderboard page and every player on it, appending to `records`.
/// Any fetch failure aborts; records gathered before it are dropped with the error.
pub fn collect_page(
    fetcher: &dyn Fetch,
    scrape: &ScrapeOptions,
    page: u32,
    mut records: Vec<PlayerRecord>,
    progress: &mut dyn Progress,
) -> Result<Vec<PlayerRecord>> {
    let url = leaderboard::leaderboard_url(scrape, page);
    progress.page_started(page, &url);
    log::info!("Leaderboard page {page}: {url}");

    let doc = fetcher.get_document(&url)?;
    let names = leaderboard::player_names(&doc)?;
    if names.is_empty() {
        log::info!("Leaderboard page {page} has no players");
    }

    for name in names {
        let (record, profile_url) = collect_player(fetcher, scrape, &name)?;
        log::info!("Player {} ({} stats)", record.name, record.stats.len());
        progress.player_done(&record, &profile_url);
        records.push(record);
    }

    Ok(records)
}

/// Walk pages 1..=N, re-exporting everything collected so far after each page.
/// If a later page fails, the file from the last finished page stays on disk.
pub fn run(
    fetcher: &dyn Fetch,
    opts: &AppOptions,
    progress: &mut dyn Progress,
) -> Result<RunSummary> {
    let scrape = &opts.scrape;
    progress.begin(scrape.pages);

    let mut records = Vec::new();
    let mut out_path = None;

    for page in 1..=scrape.pages {
        records = collect_page(fetcher, scrape, page, records, &mut *progress)?;

        let path = file::export_records(&opts.export, &records, &scrape.titles)?;
        progress.exported(&path, records.len());
        out_path = Some(path);
    }

    progress.finish();

    Ok(RunSummary { pages: scrape.pages, records, out_path })
}
