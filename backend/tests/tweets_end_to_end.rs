//! End-to-end coverage: a fake X API, the real reqwest adapters, the proxy
//! endpoint and the rendered page, all over loopback HTTP.

use std::net::TcpListener;
use std::sync::Arc;

use actix_web::dev::{Server, ServerHandle};
use actix_web::http::StatusCode;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use chrono::{Duration, Utc};
use rstest::rstest;
use serde_json::{Value, json};
use url::Url;

use hackertweet::Trace;
use hackertweet::domain::{BearerToken, TweetFeedService};
use hackertweet::inbound::http::page::index;
use hackertweet::inbound::http::state::HttpState;
use hackertweet::inbound::http::tweets::get_tweets;
use hackertweet::outbound::feed_proxy::HttpFeedClient;
use hackertweet::outbound::twitter::TwitterHttpSource;

const TOKEN: &str = "test-token";

/// Lookup `data` in the shape X actually returns, including fields the
/// crate does not model.
const PAULG_USER: &str =
    r#"{"id":"2","name":"Paul Graham","username":"paulg","verified":false,"protected":false}"#;
const PAULG_TWEETS: &str = r#"[{"edit_history_tweet_ids":["t9"],"created_at":"2024-05-01T11:55:00.000Z","text":"Hi & <bye>","id":"t9","public_metrics":{"retweet_count":4,"reply_count":5,"like_count":6,"quote_count":7,"bookmark_count":8,"impression_count":9000}}]"#;
/// A user object without `name`.
const NAMELESS_USER: &str = r#"{"id":"3","username":"nameless"}"#;

fn raw_json(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("application/json")
        .body(body)
}

fn authorised(req: &HttpRequest) -> bool {
    let expected = format!("Bearer {TOKEN}");
    req.headers()
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        == Some(expected.as_str())
}

async fn fake_user_lookup(req: HttpRequest, handle: web::Path<String>) -> HttpResponse {
    if !authorised(&req) {
        return HttpResponse::Unauthorized().json(json!({ "title": "Unauthorized", "status": 401 }));
    }
    match handle.as_str() {
        "sama" => HttpResponse::Ok().json(json!({
            "data": { "id": "1", "name": "Sam", "username": "sama" }
        })),
        "paulg" => raw_json(format!(r#"{{"data":{PAULG_USER}}}"#)),
        "nameless" => raw_json(format!(r#"{{"data":{NAMELESS_USER}}}"#)),
        _ => HttpResponse::Ok().json(json!({
            "errors": [{ "title": "Not Found Error", "detail": "Could not find user" }]
        })),
    }
}

async fn fake_tweet_listing(req: HttpRequest, user_id: web::Path<String>) -> HttpResponse {
    if !authorised(&req) {
        return HttpResponse::Forbidden().finish();
    }
    match user_id.as_str() {
        "1" => {}
        "2" => {
            return raw_json(format!(
                r#"{{"data":{PAULG_TWEETS},"meta":{{"result_count":1,"newest_id":"t9"}}}}"#
            ));
        }
        "3" => return raw_json(r#"{"meta":{"result_count":0}}"#.to_owned()),
        _ => return HttpResponse::Forbidden().finish(),
    }
    let created_at = (Utc::now() - Duration::minutes(5)).to_rfc3339();
    HttpResponse::Ok().json(json!({
        "data": [{
            "id": "t1",
            "text": "hi",
            "created_at": created_at,
            "public_metrics": {
                "retweet_count": 0,
                "reply_count": 1,
                "like_count": 3,
                "quote_count": 0
            }
        }],
        "meta": { "result_count": 1 }
    }))
}

fn ephemeral_listener() -> (TcpListener, Url) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let addr = listener.local_addr().expect("listener address");
    let url = Url::parse(&format!("http://{addr}")).expect("valid loopback url");
    (listener, url)
}

fn spawn(server: Server) -> ServerHandle {
    let handle = server.handle();
    actix_rt::spawn(server);
    handle
}

struct Stack {
    api: ServerHandle,
    proxy: ServerHandle,
    proxy_url: Url,
}

impl Stack {
    fn start(token: Option<&str>) -> Self {
        let (api_listener, api_url) = ephemeral_listener();
        let api = HttpServer::new(|| {
            App::new()
                .route("/2/users/by/username/{handle}", web::get().to(fake_user_lookup))
                .route("/2/users/{id}/tweets", web::get().to(fake_tweet_listing))
        })
        .workers(1)
        .listen(api_listener)
        .expect("fake api listens")
        .run();

        let (proxy_listener, proxy_url) = ephemeral_listener();
        let api_base = api_url.join("/2").expect("api base url");
        let source = TwitterHttpSource::new(api_base).expect("x api client builds");
        let feed_client = HttpFeedClient::new(proxy_url.clone()).expect("proxy client builds");
        let state = web::Data::new(HttpState::new(
            Arc::new(TweetFeedService::new(
                Arc::new(source),
                token.and_then(BearerToken::configured),
            )),
            Arc::new(feed_client),
            Arc::new(mockable::DefaultClock),
        ));
        let proxy = HttpServer::new(move || {
            App::new()
                .app_data(state.clone())
                .wrap(Trace)
                .service(get_tweets)
                .service(index)
        })
        .workers(1)
        .listen(proxy_listener)
        .expect("proxy listens")
        .run();

        Self {
            api: spawn(api),
            proxy: spawn(proxy),
            proxy_url,
        }
    }

    async fn get(&self, path_and_query: &str) -> reqwest::Response {
        let url = self.proxy_url.join(path_and_query).expect("request url");
        reqwest::get(url).await.expect("request completes")
    }

    async fn stop(self) {
        self.proxy.stop(true).await;
        self.api.stop(true).await;
    }
}

#[rstest]
#[actix_rt::test]
async fn proxy_returns_user_and_tweets() {
    let stack = Stack::start(Some(TOKEN));

    let response = stack.get("/api/tweets?username=sama").await;
    assert_eq!(response.status().as_u16(), StatusCode::OK.as_u16());
    assert!(response.headers().contains_key("trace-id"));
    let body: Value = response.json().await.expect("JSON body");

    assert_eq!(body["user"], json!({ "id": "1", "name": "Sam", "username": "sama" }));
    assert_eq!(body["tweets"][0]["public_metrics"]["like_count"], json!(3));

    stack.stop().await;
}

#[rstest]
#[actix_rt::test]
async fn proxy_returns_upstream_objects_byte_for_byte() {
    let stack = Stack::start(Some(TOKEN));

    let response = stack.get("/api/tweets?username=paulg").await;
    assert_eq!(response.status().as_u16(), StatusCode::OK.as_u16());
    let body = response.text().await.expect("text body");

    assert_eq!(body, format!(r#"{{"user":{PAULG_USER},"tweets":{PAULG_TWEETS}}}"#));

    stack.stop().await;
}

#[rstest]
#[actix_rt::test]
async fn user_without_name_is_still_served() {
    let stack = Stack::start(Some(TOKEN));

    let response = stack.get("/api/tweets?username=nameless").await;
    assert_eq!(response.status().as_u16(), StatusCode::OK.as_u16());
    let body: Value = response.json().await.expect("JSON body");
    assert_eq!(body, json!({ "user": { "id": "3", "username": "nameless" }, "tweets": [] }));

    let html = stack
        .get("/?username=nameless&username=sama")
        .await
        .text()
        .await
        .expect("HTML body");
    assert!(html.contains("<span class=\"handle\"> (@nameless)</span>"));

    stack.stop().await;
}

#[rstest]
#[actix_rt::test]
async fn page_renders_extended_upstream_shape() {
    let stack = Stack::start(Some(TOKEN));

    let html = stack.get("/?quick=paulg").await.text().await.expect("HTML body");

    assert!(html.contains("Hi &amp; &lt;bye&gt;"));
    assert!(html.contains("6 points | "));
    assert!(html.contains(" | 5 comments | 4 retweets"));

    stack.stop().await;
}

#[rstest]
#[actix_rt::test]
async fn page_renders_the_sama_feed() {
    let stack = Stack::start(Some(TOKEN));

    let response = stack.get("/?username=sama").await;
    assert_eq!(response.status().as_u16(), StatusCode::OK.as_u16());
    let html = response.text().await.expect("HTML body");

    assert!(html.contains("<b>Sam</b><span class=\"handle\"> (@sama)</span>"));
    assert!(html.contains("3 points | 5 minutes ago | 1 comments | 0 retweets"));

    stack.stop().await;
}

#[rstest]
#[actix_rt::test]
async fn unknown_handle_is_not_found_end_to_end() {
    let stack = Stack::start(Some(TOKEN));

    let response = stack.get("/api/tweets?username=ghost").await;
    assert_eq!(response.status().as_u16(), StatusCode::NOT_FOUND.as_u16());
    let body: Value = response.json().await.expect("JSON body");
    assert_eq!(body["error"], json!("User @ghost not found"));

    let html = stack.get("/?quick=naval").await.text().await.expect("HTML body");
    assert!(html.contains("User @naval not found"));

    stack.stop().await;
}

#[rstest]
#[actix_rt::test]
async fn rejected_token_forwards_upstream_status() {
    let stack = Stack::start(Some("stale-token"));

    let response = stack.get("/api/tweets?username=sama").await;
    assert_eq!(response.status().as_u16(), StatusCode::UNAUTHORIZED.as_u16());
    let body: Value = response.json().await.expect("JSON body");
    assert_eq!(body["details"], json!({ "title": "Unauthorized", "status": 401 }));
    assert!(body["help"].as_str().is_some_and(|help| help.contains("developer.x.com")));

    stack.stop().await;
}

#[rstest]
#[case::unset(None)]
#[case::placeholder(Some("your_bearer_token_here"))]
#[actix_rt::test]
async fn missing_token_answers_500(#[case] token: Option<&str>) {
    let stack = Stack::start(token);

    let response = stack.get("/api/tweets?username=sama").await;
    assert_eq!(
        response.status().as_u16(),
        StatusCode::INTERNAL_SERVER_ERROR.as_u16()
    );
    let body: Value = response.json().await.expect("JSON body");
    assert_eq!(
        body["error"],
        json!("Twitter Bearer Token not configured in environment variables")
    );

    let html = stack.get("/?username=sama").await.text().await.expect("HTML body");
    assert!(html.contains("Twitter Bearer Token not configured in environment variables"));

    stack.stop().await;
}
