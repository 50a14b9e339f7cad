//! Server configuration loaded via OrthoConfig, plus the bearer credential
//! read through the `mockable::Env` abstraction.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use mockable::Env;
use ortho_config::OrthoConfig;
use serde::Deserialize;
use tracing::warn;
use url::Url;

use crate::domain::BearerToken;
use crate::outbound::twitter::DEFAULT_API_BASE_URL;

/// Environment variable holding the X API bearer token.
pub const BEARER_TOKEN_ENV: &str = "TWITTER_BEARER_TOKEN";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Errors raised while interpreting [`ServerSettings`].
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// The bind address is not a `host:port` socket address.
    #[error("invalid bind address '{value}': {source}")]
    BindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
    /// A configured URL could not be parsed.
    #[error("invalid {name} '{value}': {source}")]
    Url {
        name: &'static str,
        value: String,
        #[source]
        source: url::ParseError,
    },
}

/// Network settings for the HackerTweet server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "HACKERTWEET")]
pub struct ServerSettings {
    /// Socket address the HTTP server listens on.
    #[ortho_config(default = String::from(DEFAULT_BIND_ADDR))]
    pub bind_addr: String,
    /// Root of the X API v2.
    #[ortho_config(default = String::from(DEFAULT_API_BASE_URL))]
    pub api_base_url: String,
    /// Base URL the page uses to reach `/api/tweets`.
    pub proxy_url: Option<String>,
}

impl ServerSettings {
    /// Parse the listen address.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::BindAddr`] when the configured value does not
    /// parse.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.bind_addr
            .parse()
            .map_err(|source| ConfigError::BindAddr {
                value: self.bind_addr.clone(),
                source,
            })
    }

    /// Parse the X API root.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Url`] when the configured value does not parse.
    pub fn api_base_url(&self) -> Result<Url, ConfigError> {
        parse_url("api base url", &self.api_base_url)
    }

    /// Return the proxy base URL.
    ///
    /// Defaults to this server's own listen address; an unspecified host is
    /// replaced by loopback so the URL is dialable.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the configured URL or the bind address
    /// does not parse.
    pub fn proxy_url(&self) -> Result<Url, ConfigError> {
        if let Some(value) = self.proxy_url.as_deref() {
            return parse_url("proxy url", value);
        }
        let mut addr = self.bind_addr()?;
        if addr.ip().is_unspecified() {
            let loopback = match addr.ip() {
                IpAddr::V4(_) => IpAddr::V4(Ipv4Addr::LOCALHOST),
                IpAddr::V6(_) => IpAddr::V6(std::net::Ipv6Addr::LOCALHOST),
            };
            addr.set_ip(loopback);
        }
        parse_url("proxy url", &format!("http://{addr}"))
    }
}

fn parse_url(name: &'static str, value: &str) -> Result<Url, ConfigError> {
    Url::parse(value).map_err(|source| ConfigError::Url {
        name,
        value: value.to_owned(),
        source,
    })
}

/// Read the bearer token from [`BEARER_TOKEN_ENV`].
///
/// Returns `None` when the variable is unset, blank, or still holds the
/// documented placeholder. The server starts anyway and every proxy request
/// fails with a configuration error.
///
/// # Examples
///
/// ```rust
/// use hackertweet::config::bearer_token_from_env;
/// use mockable::MockEnv;
///
/// let mut env = MockEnv::new();
/// env.expect_string()
///     .returning(|_| Some("your_bearer_token_here".to_owned()));
/// assert!(bearer_token_from_env(&env).is_none());
/// ```
pub fn bearer_token_from_env<E: Env>(env: &E) -> Option<BearerToken> {
    let token = env
        .string(BEARER_TOKEN_ENV)
        .and_then(BearerToken::configured);
    if token.is_none() {
        warn!(
            variable = BEARER_TOKEN_ENV,
            "bearer token not configured; /api/tweets will answer 500"
        );
    }
    token
}
