//! HTTP inbound adapter: the proxy endpoint, the page, and health probes.

pub mod error;
pub mod health;
pub mod page;
pub mod query;
pub mod schemas;
pub mod state;
pub mod tweets;

pub use error::{ApiError, ApiResult};
