//! Driving port used by the HTTP proxy endpoint.

use async_trait::async_trait;

use crate::domain::tweet_feed_service::MISSING_TOKEN_MESSAGE;
use crate::domain::{Error, Handle, UserTweets};

/// Use-case: fetch a user's recent tweets in one call.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TweetFeedQuery: Send + Sync {
    /// Resolve `handle` and fetch its recent tweets.
    ///
    /// # Errors
    ///
    /// Returns a domain [`Error`] whose code tells adapters how to answer:
    /// misconfiguration, not found, an upstream rejection carrying its
    /// status, or an internal failure.
    async fn user_tweets(&self, handle: &Handle) -> Result<UserTweets, Error>;
}

/// Fixture implementation that always reports the missing credential.
///
/// Used when wiring HTTP state in tests that never reach the proxy.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureTweetFeedQuery;

#[async_trait]
impl TweetFeedQuery for FixtureTweetFeedQuery {
    async fn user_tweets(&self, _handle: &Handle) -> Result<UserTweets, Error> {
        Err(Error::misconfigured(MISSING_TOKEN_MESSAGE))
    }
}
