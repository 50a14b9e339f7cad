//! Proxy pipeline: resolve a handle, then fetch that account's tweets.
//!
//! The two stages run strictly in sequence and each maps its own failures,
//! returning early, so the status a caller sees always names the stage that
//! failed. Nothing is retried.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::domain::ports::{TweetFeedQuery, TweetSource, TweetSourceError};
use crate::domain::{BearerToken, Error, Handle, UserRecord, UserTweets};

/// Message returned when no usable bearer token is configured.
pub const MISSING_TOKEN_MESSAGE: &str =
    "Twitter Bearer Token not configured in environment variables";
/// Message returned when the handle lookup is rejected upstream.
pub const LOOKUP_REJECTED_MESSAGE: &str =
    "Failed to authenticate with X API. Your Bearer Token may be invalid or expired.";
/// Remediation hint attached to rejected handle lookups.
pub const LOOKUP_REJECTED_HELP: &str =
    "Get a new Bearer Token from https://developer.x.com/en/portal/dashboard";
/// Message returned when fetching tweets fails.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch tweets";

/// [`TweetFeedQuery`] implementation backed by a [`TweetSource`].
///
/// The token is optional so the server can start without one; every request
/// then fails fast with a misconfiguration error and no outbound call.
pub struct TweetFeedService {
    source: Arc<dyn TweetSource>,
    token: Option<BearerToken>,
}

impl TweetFeedService {
    /// Build the service from a source adapter and the configured token.
    pub fn new(source: Arc<dyn TweetSource>, token: Option<BearerToken>) -> Self {
        Self { source, token }
    }

    async fn resolve_user(&self, handle: &Handle, token: &BearerToken) -> Result<UserRecord, Error> {
        match self.source.user_by_handle(handle, token).await {
            Ok(Some(user)) => {
                debug!(handle = %handle, user_id = user.id(), "handle resolved");
                Ok(user)
            }
            Ok(None) => {
                info!(handle = %handle, "handle resolved to no user");
                Err(Error::not_found(format!("User @{handle} not found")))
            }
            Err(TweetSourceError::Status { status, payload }) => {
                warn!(handle = %handle, status, "handle lookup rejected upstream");
                Err(Error::upstream(status, LOOKUP_REJECTED_MESSAGE)
                    .with_details(payload)
                    .with_help(LOOKUP_REJECTED_HELP))
            }
            Err(other) => Err(unexpected(&other)),
        }
    }

    async fn fetch_tweets(&self, user: &UserRecord, token: &BearerToken) -> Result<Vec<Value>, Error> {
        match self.source.recent_tweets(user.id(), token).await {
            Ok(tweets) => {
                debug!(user_id = user.id(), count = tweets.len(), "tweets fetched");
                Ok(tweets)
            }
            Err(TweetSourceError::Status { status, payload }) => {
                warn!(user_id = user.id(), status, "tweet listing rejected upstream");
                Err(Error::upstream(status, FETCH_FAILED_MESSAGE).with_details(payload))
            }
            Err(other) => Err(unexpected(&other)),
        }
    }
}

fn unexpected(error: &TweetSourceError) -> Error {
    warn!(error = %error, "x api call failed");
    Error::internal(FETCH_FAILED_MESSAGE).with_details(Value::String(error.to_string()))
}

#[async_trait]
impl TweetFeedQuery for TweetFeedService {
    async fn user_tweets(&self, handle: &Handle) -> Result<UserTweets, Error> {
        let Some(token) = self.token.as_ref() else {
            warn!("bearer token missing; refusing to call the x api");
            return Err(Error::misconfigured(MISSING_TOKEN_MESSAGE));
        };

        let user = self.resolve_user(handle, token).await?;
        let tweets = self.fetch_tweets(&user, token).await?;
        Ok(UserTweets {
            user: user.into_payload(),
            tweets,
        })
    }
}
