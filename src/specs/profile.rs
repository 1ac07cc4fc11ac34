// src/specs/profile.rs
//! Profile page spec.
//!
//! Stats come from three places on the page, each read by its own pass:
//! - the rating block: first `stat__value` inside a `stat` div, reported as
//!   "MMR Rating" regardless of the wanted titles;
//! - the `giant-stats` section: big expandable tiles (Win %, K/D, ...);
//! - the `main` section: regular expandable tiles (Kills, Deaths, ...).
//!
//! A pass that fails is logged and skipped; the others still run. Output
//! order is rating, giant, main, and duplicate titles are all kept.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use scraper::Html;

use crate::config::consts::{RATING_TITLE, SITE};
use crate::config::options::ScrapeOptions;
use crate::core::html::{first_text, inner_text, selector};
use crate::data::StatEntry;
use crate::error::ParseError;

const RATING_VALUE: &str = r#"div[class="stat"] span[class="stat__value"]"#;
const GIANT_TILES: &str = r#"div[class="giant-stats"] div[class="stat align-left giant expandable"]"#;
const MAIN_TILES: &str = r#"div[class="main"] div[class="stat align-left expandable"]"#;
const TILE_NAME: &str = r#"span[class="name"]"#;
const TILE_VALUE: &str = r#"span[class="value"]"#;

/// Everything but RFC 3986 unreserved characters gets escaped.
const PATH_DATA: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

pub fn profile_url(opts: &ScrapeOptions, name: &str) -> String {
    let encoded = utf8_percent_encode(name, PATH_DATA);
    format!(
        "{SITE}/profile/xbl/{encoded}/overview?experience=ranked&playlist={}",
        opts.profile_playlist
    )
}

/// Run all three passes. Never fails; a broken pass just contributes nothing.
pub fn extract_stats(doc: &Html, titles: &[String]) -> Vec<StatEntry> {
    let mut stats = Vec::new();

    match rating(doc) {
        Ok(entry) => {
            log::debug!("MMR Title: {}, MMR Value: {}", entry.title, entry.value);
            stats.push(entry);
        }
        Err(e) => log::warn!("Error extracting MMR rating: {e}"),
    }

    for (section, css) in [("giant-stats", GIANT_TILES), ("main", MAIN_TILES)] {
        match section_stats(doc, css, titles) {
            Ok(found) => stats.extend(found),
            Err(e) => log::warn!("Error extracting {section} stats: {e}"),
        }
    }

    stats
}

pub fn rating(doc: &Html) -> Result<StatEntry, ParseError> {
    let sel = selector(RATING_VALUE)?;
    doc.select(&sel)
        .next()
        .map(|el| StatEntry::new(RATING_TITLE, inner_text(el)))
        .ok_or(ParseError::NotFound("MMR rating"))
}

pub fn giant_stats(doc: &Html, titles: &[String]) -> Result<Vec<StatEntry>, ParseError> {
    section_stats(doc, GIANT_TILES, titles)
}

pub fn main_stats(doc: &Html, titles: &[String]) -> Result<Vec<StatEntry>, ParseError> {
    section_stats(doc, MAIN_TILES, titles)
}

fn section_stats(doc: &Html, tiles: &str, titles: &[String]) -> Result<Vec<StatEntry>, ParseError> {
    let tile_sel = selector(tiles)?;
    let name_sel = selector(TILE_NAME)?;
    let value_sel = selector(TILE_VALUE)?;

    let mut out = Vec::new();
    for tile in doc.select(&tile_sel) {
        let Some(title) = first_text(tile, &name_sel) else { continue };
        if !titles.iter().any(|t| *t == title) {
            continue;
        }
        // A named tile without a value still counts; it exports as blank.
        let value = first_text(tile, &value_sel).unwrap_or_default();
        log::debug!("Stat Title: {title}, Stat Value: {value}");
        out.push(StatEntry { title, value });
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(v: &[&str]) -> Vec<String> {
        v.iter().map(|t| s!(*t)).collect()
    }

    const PAGE: &str = r#"
        <html><body>
          <div class="rating-block">
            <div class="stat"><span class="stat__label">CSR</span><span class="stat__value"> 1,523 </span></div>
            <div class="stat"><span class="stat__value">999</span></div>
          </div>
          <div class="giant-stats">
            <div class="stat align-left giant expandable">
              <span class="name">Win %</span><span class="value">55.2%</span>
            </div>
            <div class="stat align-left giant expandable">
              <span class="name">K/D Ratio</span><span class="value">1.12</span>
            </div>
          </div>
          <div class="main">
            <div class="stat align-left expandable"><span class="name">Kills</span><span class="value">4,210</span></div>
            <div class="stat align-left expandable"><span class="name">Win %</span><span class="value">56%</span></div>
            <div class="stat align-left expandable"><span class="name">Betrayals</span><span class="value">2</span></div>
          </div>
        </body></html>
    "#;

    #[test]
    fn url_escapes_space_and_hash() {
        let url = profile_url(&ScrapeOptions::default(), "Foo Bar#123");
        assert_eq!(
            url,
            "https://halotracker.com/halo-infinite/profile/xbl/Foo%20Bar%23123/overview?experience=ranked&playlist=edfef3ac-9cbe-4fa2-b949-8f29deafd483"
        );
    }

    #[test]
    fn url_keeps_unreserved_and_escapes_utf8() {
        let url = profile_url(&ScrapeOptions::default(), "a-b_c.d~é/");
        assert!(url.contains("/xbl/a-b_c.d~%C3%A9%2F/overview"));
    }

    #[test]
    fn rating_takes_first_stat_value() {
        let doc = Html::parse_document(PAGE);
        assert_eq!(rating(&doc).unwrap(), StatEntry::new("MMR Rating", "1,523"));
    }

    #[test]
    fn passes_filter_by_title_and_keep_duplicates() {
        let doc = Html::parse_document(PAGE);
        let stats = extract_stats(&doc, &titles(&["Win %", "Kills"]));
        assert_eq!(stats, vec![
            StatEntry::new("MMR Rating", "1,523"),
            StatEntry::new("Win %", "55.2%"),
            StatEntry::new("Kills", "4,210"),
            StatEntry::new("Win %", "56%"),
        ]);
    }

    #[test]
    fn missing_rating_does_not_stop_other_passes() {
        let doc = Html::parse_document(r#"
            <div class="main">
              <div class="stat align-left expandable"><span class="name">Deaths</span><span class="value">17</span></div>
            </div>
        "#);
        assert!(matches!(rating(&doc), Err(ParseError::NotFound(_))));
        let stats = extract_stats(&doc, &titles(&["Deaths"]));
        assert_eq!(stats, vec![StatEntry::new("Deaths", "17")]);
    }

    #[test]
    fn tile_without_name_is_skipped_and_without_value_is_blank() {
        let doc = Html::parse_document(r#"
            <div class="giant-stats">
              <div class="stat align-left giant expandable"><span class="value">9</span></div>
              <div class="stat align-left giant expandable"><span class="name">Kills</span></div>
            </div>
        "#);
        let stats = giant_stats(&doc, &titles(&["Kills"])).unwrap();
        assert_eq!(stats, vec![StatEntry::new("Kills", "")]);
    }

    #[test]
    fn tiles_outside_their_section_are_ignored() {
        let doc = Html::parse_document(r#"
            <div class="sidebar">
              <div class="stat align-left expandable"><span class="name">Kills</span><span class="value">1</span></div>
            </div>
        "#);
        assert!(main_stats(&doc, &titles(&["Kills"])).unwrap().is_empty());
    }
}
