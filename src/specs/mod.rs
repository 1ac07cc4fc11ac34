//! # Page specs
//!
//! Each spec knows how to read one page family of the tracker site: where the
//! data lives in the markup and which URL produces it.
//!
//! - `leaderboard` – ordered player names from a CSR leaderboard page.
//! - `profile` – profile URL for a player, and the stats found on that page.
//!
//! Specs only extract. Fetching order, accumulation and export live in
//! `scrape` and `file`.
//!
//! Selectors match the `class` attribute exactly (`[class="..."]`), not by
//! token, so a container that picks up an extra class stops matching.
pub mod leaderboard;
pub mod profile;
