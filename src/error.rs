// src/error.rs
use thiserror::Error;

/// Network / HTTP failures. Never recovered from.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },
    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[cfg(any(test, feature = "test-util"))]
    #[error("no page registered for {0}")]
    Missing(String),
}

/// Page structure did not look the way we expected.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid selector `{0}`")]
    Selector(String),
    #[error("{0} not found")]
    NotFound(&'static str),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("export failed: {0}")]
    Export(#[from] rust_xlsxwriter::XlsxError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("{0} columns do not fit in a sheet (max 16384)")]
    TooManyColumns(usize),
    #[error("{0}")]
    Usage(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
