// src/config/consts.rs

// Net config
pub const SITE: &str = "https://halotracker.com/halo-infinite";
pub const LEADERBOARD_PATH: &str = "/leaderboards/csr/all/default";
pub const LEADERBOARD_PLAYLIST: &str = "1";
pub const PROFILE_PLAYLIST: &str = "edfef3ac-9cbe-4fa2-b949-8f29deafd483";
pub const USER_AGENT: &str = "halo_scrape/0.1";

// Local log
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Scrape
pub const DEFAULT_PAGES: u32 = 10;
pub const RATING_TITLE: &str = "MMR Rating";
pub const DEFAULT_STAT_TITLES: &[&str] = &[
    "Win %",
    "Avg KDA",
    "K/D Ratio",
    "Avg. Damage",
    "Kills",
    "Assists",
    "Deaths",
    "Headshots",
    "Matches Won",
    "Matches Lost",
];

// Export
pub const DEFAULT_OUT_FILE: &str = "PlayerStats.xlsx";
pub const SHEET_NAME: &str = "Player Stats";
pub const NAME_HEADER: &str = "Player Name";
