//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the JSON endpoints (the proxy and the health probes)
//! together with the schema wrappers from
//! [`crate::inbound::http::schemas`], which keep domain types free of
//! utoipa. The HTML page is not part of the document.
//!
//! The generated document backs Swagger UI in debug builds and is
//! exported via `cargo run --bin openapi-dump`.

use crate::inbound::http::schemas::{
    ApiErrorSchema, ErrorCodeSchema, PublicMetricsSchema, TweetSchema, TwitterUserSchema,
    UserTweetsSchema,
};
use utoipa::OpenApi;

/// OpenAPI document for the JSON API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "HackerTweet API",
        description = "Proxy that resolves an X handle and returns its recent tweets."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::tweets::get_tweets,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        UserTweetsSchema,
        TwitterUserSchema,
        TweetSchema,
        PublicMetricsSchema,
        ApiErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "tweets", description = "Recent tweets for an X handle"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
