//! Proxy endpoint.
//!
//! ```text
//! GET /api/tweets?username=sama
//! ```

use actix_web::{HttpRequest, get, web};
use tracing::info;

use crate::domain::{Handle, UserTweets};
use crate::inbound::http::ApiResult;
use crate::inbound::http::query::first_value;
use crate::inbound::http::schemas::{ApiErrorSchema, UserTweetsSchema};
use crate::inbound::http::state::HttpState;

/// Query string for `GET /api/tweets`.
#[derive(Debug, Default, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TweetsQuery {
    /// Handle to look up; blank or missing means `twitter`. When repeated,
    /// the first value is used.
    pub username: Option<String>,
}

impl TweetsQuery {
    /// Read the query leniently; repeated keys never fail the request.
    #[must_use]
    pub fn from_query_string(query_string: &str) -> Self {
        Self {
            username: first_value(query_string, "username"),
        }
    }
}

/// Resolve a handle and return the account with its ten most recent tweets.
///
/// Error statuses: `500` when no credential is configured or transport
/// fails, `404` when the handle resolves to nobody, and the upstream status
/// when the X API rejects either call.
#[utoipa::path(
    get,
    path = "/api/tweets",
    params(TweetsQuery),
    responses(
        (status = 200, description = "User and recent tweets", body = UserTweetsSchema),
        (status = 404, description = "Handle not found", body = ApiErrorSchema),
        (status = 500, description = "Not configured or transport failure", body = ApiErrorSchema),
        (status = "default", description = "Upstream rejection, status forwarded", body = ApiErrorSchema)
    ),
    tags = ["tweets"],
    operation_id = "getUserTweets"
)]
#[get("/api/tweets")]
pub async fn get_tweets(
    state: web::Data<HttpState>,
    req: HttpRequest,
) -> ApiResult<web::Json<UserTweets>> {
    let query = TweetsQuery::from_query_string(req.query_string());
    let handle = Handle::or_default(query.username.as_deref());
    let feed = state.tweets.user_tweets(&handle).await?;
    info!(handle = %handle, tweets = feed.tweets.len(), "feed served");
    Ok(web::Json(feed))
}
