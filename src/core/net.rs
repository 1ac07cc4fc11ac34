// src/core/net.rs

// Blocking HTTP GET. Redirects and timeouts are left at client defaults.

#[cfg(any(test, feature = "test-util"))]
use std::collections::HashMap;

use reqwest::blocking::Client;
use scraper::Html;

use crate::config::consts::USER_AGENT;
use crate::error::FetchError;

/// Anything that can turn a URL into page text.
pub trait Fetch {
    fn get_text(&self, url: &str) -> Result<String, FetchError>;

    /// Fetch and parse in one go. html5ever recovers from any markup, so the
    /// only failures are the ones `get_text` reports.
    fn get_document(&self, url: &str) -> Result<Html, FetchError> {
        let body = self.get_text(url)?;
        Ok(Html::parse_document(&body))
    }
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn get_text(&self, url: &str) -> Result<String, FetchError> {
        log::debug!("GET {url}");
        let request_err = |source| FetchError::Request { url: s!(url), source };

        let resp = self.client.get(url).send().map_err(request_err)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status { url: s!(url), status: status.as_u16() });
        }
        resp.text().map_err(request_err)
    }
}

/// Serves canned pages by exact URL. Test-only stand-in for `HttpFetcher`.
#[cfg(any(test, feature = "test-util"))]
#[derive(Default)]
pub struct StaticFetcher {
    pages: HashMap<String, String>,
}

#[cfg(any(test, feature = "test-util"))]
impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.pages.insert(url.into(), body.into());
        self
    }
}

#[cfg(any(test, feature = "test-util"))]
impl Fetch for StaticFetcher {
    fn get_text(&self, url: &str) -> Result<String, FetchError> {
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::Missing(s!(url)))
    }
}
