//! HackerTweet entry-point: loads configuration, wires the proxy and the
//! page, and serves them with actix-web.

mod server;

use actix_web::web;
use mockable::DefaultEnv;
use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use hackertweet::config::{ServerSettings, bearer_token_from_env};
use hackertweet::inbound::http::health::HealthState;
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load configuration: {e}")))?;
    let bearer_token = bearer_token_from_env(&DefaultEnv::new());
    let config = ServerConfig::from_settings(&settings, bearer_token)
        .map_err(|e| std::io::Error::other(e.to_string()))?;

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    let result = server.await;
    health_state.mark_unhealthy();
    result
}
