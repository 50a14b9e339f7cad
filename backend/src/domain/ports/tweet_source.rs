//! Driven port for reading users and tweets from the X API.
//!
//! The domain owns the call shape; adapters own URLs, headers and decoding.

use async_trait::async_trait;
use serde_json::Value;

use super::define_port_error;
use crate::domain::{BearerToken, Handle, UserRecord};

define_port_error! {
    /// Errors surfaced while calling the X API.
    pub enum TweetSourceError {
        /// The API answered with a non-success status. `payload` is the
        /// response body decoded best-effort; an empty object when it was not
        /// JSON.
        Status { status: u16, payload: Value } =>
            "x api responded with status {status}",
        /// The request never completed.
        Transport { message: String } =>
            "x api transport failed: {message}",
        /// A success response carried a body that could not be decoded.
        Decode { message: String } =>
            "x api response decode failed: {message}",
    }
}

/// Port for the two X API lookups the proxy chains together.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TweetSource: Send + Sync {
    /// Resolve a handle to its account.
    ///
    /// Returns `Ok(None)` when the API answered successfully but without a
    /// user object.
    async fn user_by_handle(
        &self,
        handle: &Handle,
        token: &BearerToken,
    ) -> Result<Option<UserRecord>, TweetSourceError>;

    /// List the account's most recent tweets as upstream objects, in
    /// upstream order.
    ///
    /// An omitted list decodes as empty.
    async fn recent_tweets(
        &self,
        user_id: &str,
        token: &BearerToken,
    ) -> Result<Vec<Value>, TweetSourceError>;
}
