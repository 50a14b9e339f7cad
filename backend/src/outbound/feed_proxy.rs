//! Reqwest-backed client for the proxy endpoint, used by the page view.

use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::debug;

use crate::domain::Handle;
use crate::view::{FeedClient, FeedClientError, ProxyReply};

const TWEETS_PATH: [&str; 2] = ["api", "tweets"];

/// [`FeedClient`] calling `GET {base}/api/tweets?username=<handle>`.
pub struct HttpFeedClient {
    client: Client,
    base_url: Url,
}

impl HttpFeedClient {
    /// Build a client for the proxy rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base_url: Url) -> Result<Self, reqwest::Error> {
        let client = Client::builder().build()?;
        Ok(Self { client, base_url })
    }

    fn feed_url(&self, handle: &Handle) -> Result<Url, FeedClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                FeedClientError::transport(format!(
                    "proxy url {} cannot carry a path",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(TWEETS_PATH);
        url.query_pairs_mut()
            .append_pair("username", handle.as_str());
        Ok(url)
    }
}

#[async_trait]
impl FeedClient for HttpFeedClient {
    async fn fetch_feed(&self, handle: &Handle) -> Result<ProxyReply, FeedClientError> {
        let url = self.feed_url(handle)?;
        debug!(handle = %handle, "requesting feed from proxy");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|error| FeedClientError::transport(error.to_string()))?;

        let status = response.status().as_u16();
        let bytes = response
            .bytes()
            .await
            .map_err(|error| FeedClientError::transport(error.to_string()))?;
        let body = serde_json::from_slice(&bytes)
            .map_err(|error| FeedClientError::decode(error.to_string()))?;
        Ok(ProxyReply { status, body })
    }
}
