// src/config/options.rs
use std::path::{ Path, PathBuf };
use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    /// Leaderboard endpoint without query string.
    pub leaderboard_base: String,
    pub leaderboard_playlist: String,
    /// Profile pages are always requested for this ranked playlist.
    pub profile_playlist: String,
    /// Inclusive upper bound; pages run 1..=pages.
    pub pages: u32,
    /// Allow-list for parsing and column order for export.
    pub titles: Vec<String>,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            leaderboard_base: format!("{SITE}{LEADERBOARD_PATH}"),
            leaderboard_playlist: s!(LEADERBOARD_PLAYLIST),
            profile_playlist: s!(PROFILE_PLAYLIST),
            pages: DEFAULT_PAGES,
            titles: DEFAULT_STAT_TITLES.iter().map(|t| s!(*t)).collect(),
        }
    }
}

impl ScrapeOptions {
    pub fn set_titles(&mut self, text: &str) {
        self.titles = text
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(String::from)
            .collect();
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    out_path: PathBuf,
    pub sheet_name: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            out_path: PathBuf::from(DEFAULT_OUT_FILE),
            sheet_name: s!(SHEET_NAME),
        }
    }
}

impl ExportOptions {
    pub fn out_path(&self) -> &Path {
        &self.out_path
    }

    /// Accepts a file path, or a directory (existing, or hinted by a trailing
    /// separator) in which case the default file name is appended.
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        if s.is_empty() {
            self.out_path = PathBuf::from(DEFAULT_OUT_FILE);
            return;
        }
        let p = PathBuf::from(s);
        self.out_path = if s.ends_with('/') || s.ends_with('\\') || p.is_dir() {
            p.join(DEFAULT_OUT_FILE)
        } else {
            p
        };
    }
}
