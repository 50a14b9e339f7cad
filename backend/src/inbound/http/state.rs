//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on ports and remain testable without I/O.

use std::sync::Arc;

use mockable::Clock;

use crate::domain::ports::TweetFeedQuery;
use crate::view::FeedClient;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Proxy pipeline behind `GET /api/tweets`.
    pub tweets: Arc<dyn TweetFeedQuery>,
    /// Client the page view uses to reach the proxy.
    pub feed_client: Arc<dyn FeedClient>,
    /// Time source for relative timestamps.
    pub clock: Arc<dyn Clock>,
}

impl HttpState {
    /// Bundle the ports.
    pub fn new(
        tweets: Arc<dyn TweetFeedQuery>,
        feed_client: Arc<dyn FeedClient>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            tweets,
            feed_client,
            clock,
        }
    }
}
