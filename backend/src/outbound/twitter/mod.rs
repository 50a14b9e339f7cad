//! X API v2 outbound adapter.
//!
//! This module provides a thin HTTP implementation of the `TweetSource`
//! port.

mod dto;
mod http_source;

pub use http_source::{DEFAULT_API_BASE_URL, TwitterHttpSource};
