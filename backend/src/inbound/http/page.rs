//! Server-rendered HackerTweet page.
//!
//! ```text
//! GET /
//! GET /?username=sama
//! GET /?quick=trending
//! ```

use actix_web::http::header::{self, ContentType};
use actix_web::{HttpRequest, HttpResponse, get, web};
use tracing::debug;

use crate::inbound::http::query::first_value;
use crate::inbound::http::state::HttpState;
use crate::view::{FeedPage, FeedView, QuickLink};

/// Query string for `GET /`. Repeated keys use their first value.
#[derive(Debug, Default)]
pub struct PageQuery {
    /// Handle typed into the form.
    pub username: Option<String>,
    /// Label of a navigation-bar preset; wins over `username`.
    pub quick: Option<String>,
}

impl PageQuery {
    /// Read the page's query leniently.
    #[must_use]
    pub fn from_query_string(query_string: &str) -> Self {
        Self {
            username: first_value(query_string, "username"),
            quick: first_value(query_string, "quick"),
        }
    }
}

/// Render the page, running a query first when one was submitted.
///
/// Failures never surface as HTTP errors: the page always answers `200` and
/// shows the failure message inline.
#[get("/")]
pub async fn index(state: web::Data<HttpState>, req: HttpRequest) -> HttpResponse {
    let PageQuery { username, quick } = PageQuery::from_query_string(req.query_string());
    let mut view = FeedView::new(state.feed_client.clone());

    match quick.as_deref().and_then(QuickLink::by_label) {
        Some(link) => view.quick_load(link).await,
        None => {
            if let Some(label) = quick.as_deref() {
                debug!(label, "ignoring unknown quick link");
            }
            if let Some(username) = username {
                view.set_query(username);
                view.submit_query(None).await;
            }
        }
    }

    let html = FeedPage::new(view.state(), state.clock.utc()).to_string();
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .body(html)
}
