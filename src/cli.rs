// src/cli.rs
use std::path::Path;

use crate::config::options::AppOptions;
use crate::core::HttpFetcher;
use crate::data::PlayerRecord;
use crate::error::{Error, Result};
use crate::progress::Progress;
use crate::scrape::{self, RunSummary};

pub const HELP: &str = include_str!("cli_help.txt");

pub enum Command {
    Scrape(AppOptions),
    Help,
}

/// Flags only override defaults; with no arguments this is the reference run.
pub fn parse_args<I>(args: I) -> Result<Command>
where
    I: IntoIterator<Item = String>,
{
    let mut opts = AppOptions::default();
    let mut args = args.into_iter();

    while let Some(a) = args.next() {
        match a.as_str() {
            "--pages" => {
                let v = args.next().ok_or_else(|| usage("Missing value for --pages"))?;
                let n: u32 = v.parse().map_err(|_| usage(&format!("Invalid page count: {v}")))?;
                if n == 0 { return Err(usage("--pages must be at least 1")); }
                opts.scrape.pages = n;
            }
            "-o" | "--out" => {
                let v = args.next().ok_or_else(|| usage("Missing output path"))?;
                opts.export.set_path(&v);
            }
            "--titles" => {
                let v = args.next().ok_or_else(|| usage("Missing value for --titles"))?;
                opts.scrape.set_titles(&v);
                if opts.scrape.titles.is_empty() { return Err(usage("--titles is empty")); }
            }
            "-h" | "--help" => return Ok(Command::Help),
            _ => return Err(usage(&format!("Unknown arg: {a}"))),
        }
    }

    Ok(Command::Scrape(opts))
}

fn usage(msg: &str) -> Error {
    Error::Usage(s!(msg))
}

pub fn run(cmd: &Command) -> Result<()> {
    match cmd {
        Command::Help => {
            eprintln!("{HELP}");
            Ok(())
        }
        Command::Scrape(opts) => {
            let fetcher = HttpFetcher::new()?;
            let mut progress = ConsoleProgress::default();
            let summary: RunSummary = scrape::run(&fetcher, opts, &mut progress)?;
            println!(
                "Done: {} players from {} pages.",
                summary.records.len(),
                summary.pages
            );
            Ok(())
        }
    }
}

/// Prints per-page, per-player and per-stat lines to stdout.
#[derive(Default)]
pub struct ConsoleProgress {
    pages: u32,
    players: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, pages: u32) {
        self.pages = pages;
    }
    fn page_started(&mut self, page: u32, url: &str) {
        println!("Page {page}/{}: {url}", self.pages);
    }
    fn player_done(&mut self, record: &PlayerRecord, profile_url: &str) {
        self.players += 1;
        println!("Player: {}", record.name);
        println!("Stats Page Link: {profile_url}");
        for stat in &record.stats {
            println!("  Stat Title: {}, Stat Value: {}", stat.title, stat.value);
        }
    }
    fn exported(&mut self, path: &Path, rows: usize) {
        println!("Player data exported to {} ({rows} players).", path.display());
    }
    fn finish(&mut self) {
        println!("Scrape complete ({} players).", self.players);
    }
}
