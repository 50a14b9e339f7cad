//! View component: page state, the operations that drive it, and HTML
//! rendering.
//!
//! The view reaches the proxy only through the [`FeedClient`] port and never
//! propagates failures; every failure ends as a message in [`ViewState`].

pub mod client;
pub mod render;
pub mod state;
pub mod time_ago;

pub use client::{FeedClient, FeedClientError, ProxyReply};
pub use render::{EMPTY_PROMPT, FeedPage};
pub use state::{
    FALLBACK_ERROR_MESSAGE, FeedView, NETWORK_ERROR_MESSAGE, QUICK_LINKS, QuickLink, ViewState,
};
pub use time_ago::time_ago;
