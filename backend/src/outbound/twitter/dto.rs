//! DTOs for decoding X API v2 envelopes.
//!
//! The API wraps every payload in `data`; lookups for unknown handles answer
//! `200` with an `errors` array instead, so `data` is optional throughout.
//! Payloads stay raw JSON so the proxy can return them unchanged.

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub(super) struct UserLookupDto {
    #[serde(default)]
    pub(super) data: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub(super) struct TweetListDto {
    #[serde(default)]
    pub(super) data: Option<Vec<Value>>,
}

impl TweetListDto {
    pub(super) fn into_tweets(self) -> Vec<Value> {
        self.data.unwrap_or_default()
    }
}
