//! Domain ports for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod tweet_feed_query;
mod tweet_source;

#[cfg(test)]
pub use tweet_feed_query::MockTweetFeedQuery;
pub use tweet_feed_query::{FixtureTweetFeedQuery, TweetFeedQuery};
#[cfg(test)]
pub use tweet_source::MockTweetSource;
pub use tweet_source::{TweetSource, TweetSourceError};
