//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror their structure and live in the inbound adapter
//! layer where framework concerns belong.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// No usable bearer token is configured.
    #[schema(rename = "misconfigured")]
    Misconfigured,
    /// The handle resolved to no account.
    #[schema(rename = "not_found")]
    NotFound,
    /// The X API rejected a call; the HTTP status is forwarded.
    #[schema(rename = "upstream")]
    Upstream,
    /// Transport or decode failure.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::inbound::http::error::ApiError`].
#[derive(ToSchema)]
#[schema(as = crate::inbound::http::error::ApiError)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ApiErrorSchema {
    /// Human-readable message.
    #[schema(example = "User @nobody not found")]
    error: String,
    /// Stable machine-readable error code.
    code: ErrorCodeSchema,
    /// Upstream response body or failure description.
    details: Option<serde_json::Value>,
    /// Remediation hint.
    #[schema(example = "Get a new Bearer Token from https://developer.x.com/en/portal/dashboard")]
    help: Option<String>,
    /// Correlation identifier, also sent as the `trace-id` header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
}

/// OpenAPI schema for [`crate::domain::TwitterUser`].
#[derive(ToSchema)]
#[schema(as = crate::domain::TwitterUser)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct TwitterUserSchema {
    #[schema(example = "1605")]
    id: String,
    #[schema(example = "Sam Altman")]
    name: String,
    #[schema(example = "sama")]
    username: String,
}

/// OpenAPI schema for [`crate::domain::PublicMetrics`].
#[derive(ToSchema)]
#[schema(as = crate::domain::PublicMetrics)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct PublicMetricsSchema {
    retweet_count: u64,
    reply_count: u64,
    like_count: u64,
    quote_count: u64,
}

/// OpenAPI schema for [`crate::domain::Tweet`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Tweet)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct TweetSchema {
    id: String,
    text: String,
    #[schema(value_type = String, format = DateTime, example = "2024-05-01T11:55:00Z")]
    created_at: String,
    public_metrics: PublicMetricsSchema,
}

/// OpenAPI schema for [`crate::domain::UserTweets`].
///
/// Both objects are the X API's `data` payloads, returned unchanged; fields
/// beyond those listed here pass through.
#[derive(ToSchema)]
#[schema(as = crate::domain::UserTweets)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserTweetsSchema {
    user: TwitterUserSchema,
    /// Most recent first, at most ten.
    tweets: Vec<TweetSchema>,
}
