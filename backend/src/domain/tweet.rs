//! Users and tweets as the X API v2 describes them.
//!
//! The proxy never reshapes upstream objects: [`UserRecord`] and
//! [`UserTweets`] carry the `data` payloads as raw JSON so fields this crate
//! does not model (`edit_history_tweet_ids`, `impression_count`, ...) survive
//! the round trip. [`TwitterUser`] and [`Tweet`] are the typed reading the
//! page renders from.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Account object returned by the handle lookup, kept verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct UserRecord {
    id: String,
    payload: Value,
}

impl UserRecord {
    /// Wrap an upstream user object.
    ///
    /// Returns `None` when the object carries no string `id`, since the
    /// tweet listing cannot be addressed without one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hackertweet::domain::UserRecord;
    /// use serde_json::json;
    ///
    /// let user = UserRecord::new(json!({ "id": "1", "username": "sama" })).expect("has id");
    /// assert_eq!(user.id(), "1");
    /// assert!(UserRecord::new(json!({ "username": "sama" })).is_none());
    /// ```
    #[must_use]
    pub fn new(payload: Value) -> Option<Self> {
        let id = payload.get("id")?.as_str()?.to_owned();
        Some(Self { id, payload })
    }

    /// Account identifier used to address the tweet listing.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Consume the record, returning the upstream object.
    #[must_use]
    pub fn into_payload(self) -> Value {
        self.payload
    }
}

/// Account resolved from a handle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwitterUser {
    /// Numeric account identifier, kept as a string like the upstream API.
    pub id: String,
    /// Display name, e.g. `Sam`. Empty when the upstream object omits it.
    #[serde(default)]
    pub name: String,
    /// Handle without the leading `@`.
    pub username: String,
}

/// Engagement counters attached to a tweet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PublicMetrics {
    /// Retweets (amplification).
    pub retweet_count: u64,
    /// Replies.
    pub reply_count: u64,
    /// Likes (favorites). Rendered as "points".
    pub like_count: u64,
    /// Quote tweets.
    pub quote_count: u64,
}

/// One tweet with the fields requested through `tweet.fields`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tweet {
    /// Tweet identifier.
    pub id: String,
    /// Body text.
    #[serde(default)]
    pub text: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Engagement counters; absent metrics decode as zero.
    #[serde(default)]
    pub public_metrics: PublicMetrics,
}

/// The proxy's success payload: the upstream user object and tweet list,
/// both unchanged.
///
/// Both halves are fetched together; a value of this type only exists once
/// both upstream calls succeeded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserTweets {
    /// Resolved account, as returned by the lookup.
    pub user: Value,
    /// Recent tweets in upstream order; empty when the upstream omitted the
    /// list.
    #[serde(default)]
    pub tweets: Vec<Value>,
}

/// Typed reading of a [`UserTweets`] payload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserFeed {
    /// Resolved account.
    pub user: TwitterUser,
    /// Recent tweets; empty when the list is absent.
    #[serde(default)]
    pub tweets: Vec<Tweet>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn tweet_decodes_upstream_shape() {
        let tweet: Tweet = serde_json::from_value(json!({
            "id": "t1",
            "text": "hi",
            "created_at": "2024-05-01T12:00:00.000Z",
            "edit_history_tweet_ids": ["t1"],
            "public_metrics": {
                "retweet_count": 0,
                "reply_count": 1,
                "like_count": 3,
                "quote_count": 0,
                "impression_count": 99
            }
        }))
        .expect("tweet decodes");

        assert_eq!(tweet.public_metrics.like_count, 3);
        assert_eq!(tweet.public_metrics.reply_count, 1);
        assert_eq!(tweet.created_at.to_rfc3339(), "2024-05-01T12:00:00+00:00");
    }

    #[rstest]
    fn missing_metrics_default_to_zero() {
        let tweet: Tweet = serde_json::from_value(json!({
            "id": "t2",
            "text": "quiet",
            "created_at": "2024-05-01T12:00:00Z"
        }))
        .expect("tweet decodes");

        assert_eq!(tweet.public_metrics, PublicMetrics::default());
    }

    #[rstest]
    fn user_feed_defaults_to_empty_list() {
        let feed: UserFeed = serde_json::from_value(json!({
            "user": { "id": "1", "name": "Sam", "username": "sama" }
        }))
        .expect("payload decodes");

        assert!(feed.tweets.is_empty());
        assert_eq!(feed.user.username, "sama");
    }

    #[rstest]
    fn user_without_name_still_decodes() {
        let user: TwitterUser =
            serde_json::from_value(json!({ "id": "1", "username": "sama" })).expect("user decodes");
        assert!(user.name.is_empty());
    }

    #[rstest]
    #[case::missing(json!({ "username": "sama" }))]
    #[case::numeric(json!({ "id": 1, "username": "sama" }))]
    #[case::not_an_object(json!("sama"))]
    fn user_record_requires_string_id(#[case] payload: Value) {
        assert!(UserRecord::new(payload).is_none());
    }

    #[rstest]
    fn user_record_keeps_unmodelled_fields() {
        let payload = json!({ "id": "1", "username": "sama", "verified": true });
        let record = UserRecord::new(payload.clone()).expect("has id");
        assert_eq!(record.id(), "1");
        assert_eq!(record.into_payload(), payload);
    }

    #[rstest]
    fn user_tweets_serialise_upstream_objects_verbatim() {
        let payload = UserTweets {
            user: json!({ "username": "sama", "id": "1" }),
            tweets: vec![json!({ "text": "hi", "edit_history_tweet_ids": ["t1"], "id": "t1" })],
        };
        let body = serde_json::to_string(&payload).expect("serialises");
        assert_eq!(
            body,
            r#"{"user":{"username":"sama","id":"1"},"tweets":[{"text":"hi","edit_history_tweet_ids":["t1"],"id":"t1"}]}"#
        );
    }
}
