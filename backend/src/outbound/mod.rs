//! Outbound adapters implementing ports over HTTP.
//!
//! - **twitter**: the X API v2 source behind `TweetSource`.
//! - **feed_proxy**: the view's client for the local proxy endpoint.
//!
//! Adapters translate between domain types and wire formats. They contain no
//! business logic.

pub mod feed_proxy;
pub mod twitter;
