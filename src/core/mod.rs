// src/core/mod.rs

pub mod html;
pub mod net;

pub use net::{Fetch, HttpFetcher};
#[cfg(any(test, feature = "test-util"))]
pub use net::StaticFetcher;
