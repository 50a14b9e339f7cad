//! View state and the operations that change it.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use super::client::{FeedClient, ProxyReply};
use crate::domain::{Handle, Tweet, TwitterUser, UserFeed};

/// Shown when the proxy rejects a query without a readable message.
pub const FALLBACK_ERROR_MESSAGE: &str = "Failed to fetch tweets";
/// Shown when no usable reply arrived at all.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error occurred";

/// A preset account reachable with one click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickLink {
    /// Text shown in the navigation bar.
    pub label: &'static str,
    /// Handle loaded when the link is used.
    pub handle: &'static str,
}

/// The four navigation-bar presets, in display order.
pub const QUICK_LINKS: [QuickLink; 4] = [
    QuickLink {
        label: "trending",
        handle: "elonmusk",
    },
    QuickLink {
        label: "paulg",
        handle: "paulg",
    },
    QuickLink {
        label: "naval",
        handle: "naval",
    },
    QuickLink {
        label: "sama",
        handle: "sama",
    },
];

impl QuickLink {
    /// Find a preset by its label.
    pub fn by_label(label: &str) -> Option<&'static QuickLink> {
        QUICK_LINKS.iter().find(|link| link.label == label)
    }
}

/// Everything the page renders from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    /// Current contents of the handle input.
    pub query: String,
    /// Tweets of the loaded user, in upstream order.
    pub tweets: Vec<Tweet>,
    /// Loaded user, if any.
    pub user: Option<TwitterUser>,
    /// Whether a fetch is in flight.
    pub loading: bool,
    /// Message from the last failed fetch.
    pub error: Option<String>,
}

/// State holder for the feed page.
///
/// Operations take `&mut self`, so one view never has two fetches in
/// flight. Nothing tags requests; separate views do not coordinate.
pub struct FeedView {
    client: Arc<dyn FeedClient>,
    state: ViewState,
}

impl FeedView {
    /// Create an empty view that fetches through `client`.
    pub fn new(client: Arc<dyn FeedClient>) -> Self {
        Self {
            client,
            state: ViewState::default(),
        }
    }

    /// Read-only access for rendering.
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Replace the contents of the handle input.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.state.query = query.into();
    }

    /// Fetch the feed for `handle`, or for the current query when `handle`
    /// is `None` or empty.
    ///
    /// Does nothing when the effective handle is blank. Otherwise clears the
    /// previous results, fetches, and either commits user and tweets
    /// together or records an error message. `loading` is cleared last on
    /// every path.
    pub async fn submit_query(&mut self, handle: Option<&str>) {
        let requested = handle
            .filter(|value| !value.is_empty())
            .unwrap_or(&self.state.query);
        let Ok(handle) = Handle::new(requested) else {
            debug!("blank handle; nothing to fetch");
            return;
        };

        self.state.loading = true;
        self.state.error = None;
        self.state.tweets.clear();
        self.state.user = None;

        match self.client.fetch_feed(&handle).await {
            Ok(reply) => self.apply_reply(&handle, reply),
            Err(error) => {
                warn!(handle = %handle, error = %error, "feed request failed");
                self.state.error = Some(NETWORK_ERROR_MESSAGE.to_owned());
            }
        }

        self.state.loading = false;
    }

    /// Put a preset's handle into the input and fetch it.
    pub async fn quick_load(&mut self, link: &QuickLink) {
        self.set_query(link.handle);
        self.submit_query(Some(link.handle)).await;
    }

    fn apply_reply(&mut self, handle: &Handle, reply: ProxyReply) {
        if !reply.is_success() {
            debug!(handle = %handle, status = reply.status, "proxy rejected feed request");
            self.state.error = Some(error_message(&reply.body));
            return;
        }

        match serde_json::from_value::<UserFeed>(reply.body) {
            Ok(UserFeed { user, tweets }) => {
                self.state.user = Some(user);
                self.state.tweets = tweets;
            }
            Err(error) => {
                warn!(handle = %handle, error = %error, "proxy returned an unreadable feed");
                self.state.error = Some(NETWORK_ERROR_MESSAGE.to_owned());
            }
        }
    }
}

/// Pick the most specific readable message from an error body: a nested
/// `error.detail`, then a top-level `error` string, then the fallback.
fn error_message(body: &Value) -> String {
    let error = body.get("error");
    error
        .and_then(|value| value.get("detail"))
        .and_then(Value::as_str)
        .filter(|message| !message.is_empty())
        .or_else(|| error.and_then(Value::as_str).filter(|message| !message.is_empty()))
        .unwrap_or(FALLBACK_ERROR_MESSAGE)
        .to_owned()
}
