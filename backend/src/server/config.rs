//! HTTP server configuration object.

use std::net::SocketAddr;

use hackertweet::config::{ConfigError, ServerSettings};
use hackertweet::domain::BearerToken;
use url::Url;

/// Resolved configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) api_base_url: Url,
    pub(crate) proxy_url: Url,
    pub(crate) bearer_token: Option<BearerToken>,
}

impl ServerConfig {
    /// Resolve loaded settings into concrete addresses.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when an address or URL does not parse.
    pub fn from_settings(
        settings: &ServerSettings,
        bearer_token: Option<BearerToken>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            bind_addr: settings.bind_addr()?,
            api_base_url: settings.api_base_url()?,
            proxy_url: settings.proxy_url()?,
            bearer_token,
        })
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
