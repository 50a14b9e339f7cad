//! Domain primitives, ports and services.
//!
//! Purpose: define the data the proxy moves around (users, tweets, handles,
//! the bearer credential), the transport-agnostic error taxonomy, and the
//! two-stage feed pipeline. Adapters live in `inbound` and `outbound`.
//!
//! Public surface:
//! - Error / ErrorCode: failure categories adapters map to responses.
//! - Handle / BearerToken: validated request and configuration inputs.
//! - UserRecord / UserTweets: upstream objects passed through verbatim.
//! - TwitterUser / Tweet / UserFeed: the typed reading the page renders.
//! - TweetFeedService: the proxy pipeline behind `ports::TweetFeedQuery`.

pub mod credential;
pub mod error;
pub mod handle;
pub mod ports;
pub mod trace_id;
pub mod tweet;
pub mod tweet_feed_service;

pub use self::credential::{BearerToken, PLACEHOLDER_BEARER_TOKEN};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::handle::{DEFAULT_HANDLE, Handle, HandleValidationError};
pub use self::trace_id::TraceId;
pub use self::tweet::{PublicMetrics, Tweet, TwitterUser, UserFeed, UserRecord, UserTweets};
pub use self::tweet_feed_service::TweetFeedService;

/// HTTP header used to echo the request trace identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";
