//! Port the view uses to reach the proxy endpoint.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::Handle;
use crate::domain::ports::define_port_error;

/// Raw answer from the proxy: status and JSON body, success or not.
///
/// The view interprets the body itself, so adapters do not judge statuses.
#[derive(Debug, Clone, PartialEq)]
pub struct ProxyReply {
    /// HTTP status code.
    pub status: u16,
    /// Decoded JSON body.
    pub body: Value,
}

impl ProxyReply {
    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

define_port_error! {
    /// Failures where no usable reply arrived.
    pub enum FeedClientError {
        /// The request never completed.
        Transport { message: String } =>
            "proxy request failed: {message}",
        /// The proxy answered with a body that is not JSON.
        Decode { message: String } =>
            "proxy response decode failed: {message}",
    }
}

/// Port for fetching a handle's feed from the proxy endpoint.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FeedClient: Send + Sync {
    /// Issue `GET /api/tweets?username=<handle>`.
    async fn fetch_feed(&self, handle: &Handle) -> Result<ProxyReply, FeedClientError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(200, true)]
    #[case(204, true)]
    #[case(301, false)]
    #[case(404, false)]
    #[case(500, false)]
    fn success_is_the_2xx_range(#[case] status: u16, #[case] expected: bool) {
        let reply = ProxyReply {
            status,
            body: Value::Null,
        };
        assert_eq!(reply.is_success(), expected);
    }
}
