//! Builders wiring outbound adapters into the HTTP state.

use std::sync::Arc;

use actix_web::web;
use mockable::DefaultClock;

use hackertweet::domain::TweetFeedService;
use hackertweet::inbound::http::state::HttpState;
use hackertweet::outbound::feed_proxy::HttpFeedClient;
use hackertweet::outbound::twitter::TwitterHttpSource;

use super::ServerConfig;

/// Build the handler state: the proxy pipeline over the X API adapter and
/// the page's client for the proxy.
///
/// # Errors
///
/// Returns [`std::io::Error`] when an HTTP client cannot be constructed.
pub(super) fn build_http_state(config: &ServerConfig) -> std::io::Result<web::Data<HttpState>> {
    let source = TwitterHttpSource::new(config.api_base_url.clone())
        .map_err(|e| std::io::Error::other(format!("x api client construction failed: {e}")))?;
    let feed_client = HttpFeedClient::new(config.proxy_url.clone())
        .map_err(|e| std::io::Error::other(format!("proxy client construction failed: {e}")))?;
    let tweets = TweetFeedService::new(Arc::new(source), config.bearer_token.clone());

    Ok(web::Data::new(HttpState::new(
        Arc::new(tweets),
        Arc::new(feed_client),
        Arc::new(DefaultClock),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hackertweet::domain::{ErrorCode, Handle};
    use rstest::rstest;
    use url::Url;

    fn config() -> ServerConfig {
        ServerConfig {
            bind_addr: "127.0.0.1:0".parse().expect("valid addr"),
            // Unroutable: the state must not reach it without a token.
            api_base_url: Url::parse("http://127.0.0.1:9/2").expect("valid url"),
            proxy_url: Url::parse("http://127.0.0.1:9").expect("valid url"),
            bearer_token: None,
        }
    }

    #[rstest]
    #[tokio::test]
    async fn missing_token_state_answers_misconfigured() {
        let state = build_http_state(&config()).expect("state builds");
        let handle = Handle::new("sama").expect("valid handle");

        let error = state
            .tweets
            .user_tweets(&handle)
            .await
            .expect_err("no token configured");

        assert_eq!(error.code(), ErrorCode::Misconfigured);
    }
}
