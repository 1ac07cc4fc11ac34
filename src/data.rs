// src/data.rs
//
// Scraped records. Built once by the collector and only read afterwards.

/// One (label, value) pair lifted from a profile page. The value is kept as
/// text: percentages, ratios and counts all stay as the site prints them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatEntry {
    pub title: String,
    pub value: String,
}

impl StatEntry {
    pub fn new(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self { title: title.into(), value: value.into() }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerRecord {
    pub name: String,
    pub stats: Vec<StatEntry>,
}

impl PlayerRecord {
    pub fn new(name: impl Into<String>, stats: Vec<StatEntry>) -> Self {
        Self { name: name.into(), stats }
    }

    /// Last entry with this title wins; secondary stats are appended after
    /// the giant ones, so they override on duplicates.
    pub fn stat(&self, title: &str) -> Option<&str> {
        self.stats
            .iter()
            .rev()
            .find(|s| s.title == title)
            .map(|s| s.value.as_str())
    }
}
