// src/specs/leaderboard.rs
use scraper::Html;

use crate::config::options::ScrapeOptions;
use crate::core::html::{inner_text, selector};
use crate::error::ParseError;

const USERNAME: &str = r#"span[class="trn-ign__username"]"#;

pub fn leaderboard_url(opts: &ScrapeOptions, page: u32) -> String {
    format!(
        "{}?page={}&playlist={}",
        opts.leaderboard_base, page, opts.leaderboard_playlist
    )
}

/// Player names in document order. A page without any is not an error.
pub fn player_names(doc: &Html) -> Result<Vec<String>, ParseError> {
    let sel = selector(USERNAME)?;
    Ok(doc.select(&sel).map(inner_text).collect())
}
