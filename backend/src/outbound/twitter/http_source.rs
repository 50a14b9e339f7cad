//! Reqwest-backed X API source adapter.
//!
//! This adapter owns transport details only: URL construction, bearer
//! authentication, HTTP error mapping and unwrapping the `data` envelopes.
//! It sets no request timeout and never retries.

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::debug;

use super::dto::{TweetListDto, UserLookupDto};
use crate::domain::ports::{TweetSource, TweetSourceError};
use crate::domain::{BearerToken, Handle, UserRecord};

/// Production API root.
pub const DEFAULT_API_BASE_URL: &str = "https://api.twitter.com/2";

const USER_AGENT: &str = "hackertweet-proxy/0.1";
const MAX_RESULTS: &str = "10";
const TWEET_FIELDS: &str = "created_at,public_metrics";

/// X API source adapter issuing bearer-authenticated GET requests.
pub struct TwitterHttpSource {
    client: Client,
    base_url: Url,
}

impl TwitterHttpSource {
    /// Build an adapter against `base_url` (e.g. [`DEFAULT_API_BASE_URL`]).
    /// ```rust,ignore
    /// let source = TwitterHttpSource::new(Url::parse(DEFAULT_API_BASE_URL)?)?;
    /// ```
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base_url: Url) -> Result<Self, reqwest::Error> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client, base_url })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, TweetSourceError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                TweetSourceError::transport(format!(
                    "base url {} cannot carry a path",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn user_lookup_url(&self, handle: &Handle) -> Result<Url, TweetSourceError> {
        self.endpoint(&["users", "by", "username", handle.as_str()])
    }

    fn recent_tweets_url(&self, user_id: &str) -> Result<Url, TweetSourceError> {
        let mut url = self.endpoint(&["users", user_id, "tweets"])?;
        url.query_pairs_mut()
            .append_pair("max_results", MAX_RESULTS)
            .append_pair("tweet.fields", TWEET_FIELDS);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        token: &BearerToken,
    ) -> Result<T, TweetSourceError> {
        debug!(path = url.path(), "calling x api");
        let response = self
            .client
            .get(url)
            .bearer_auth(token.expose())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(TweetSourceError::status(status.as_u16(), error_payload(&body)));
        }
        decode(&body)
    }
}

#[async_trait]
impl TweetSource for TwitterHttpSource {
    async fn user_by_handle(
        &self,
        handle: &Handle,
        token: &BearerToken,
    ) -> Result<Option<UserRecord>, TweetSourceError> {
        let url = self.user_lookup_url(handle)?;
        let lookup: UserLookupDto = self.get_json(url, token).await?;
        user_record(lookup)
    }

    async fn recent_tweets(
        &self,
        user_id: &str,
        token: &BearerToken,
    ) -> Result<Vec<Value>, TweetSourceError> {
        let url = self.recent_tweets_url(user_id)?;
        let listing: TweetListDto = self.get_json(url, token).await?;
        Ok(listing.into_tweets())
    }
}

fn user_record(lookup: UserLookupDto) -> Result<Option<UserRecord>, TweetSourceError> {
    lookup
        .data
        .map(|payload| {
            UserRecord::new(payload)
                .ok_or_else(|| TweetSourceError::decode("user object has no string id"))
        })
        .transpose()
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, TweetSourceError> {
    serde_json::from_slice(body)
        .map_err(|error| TweetSourceError::decode(format!("invalid x api JSON payload: {error}")))
}

/// Best-effort decode of an error body; an empty object when it is not JSON.
fn error_payload(body: &[u8]) -> Value {
    serde_json::from_slice(body).unwrap_or_else(|_| Value::Object(Map::new()))
}

fn map_transport_error(error: reqwest::Error) -> TweetSourceError {
    TweetSourceError::transport(error.to_string())
}
