//! Server-held bearer credential for the X API.

use std::fmt;

use zeroize::Zeroize;

/// Value shipped in sample `.env` files; treated as "not configured".
pub const PLACEHOLDER_BEARER_TOKEN: &str = "your_bearer_token_here";

/// Bearer token presented in the `Authorization` header of outbound calls.
///
/// The secret is wiped on drop and never appears in `Debug` output, so it
/// is safe to hold in structs that get logged.
///
/// # Examples
/// ```
/// use hackertweet::domain::{BearerToken, PLACEHOLDER_BEARER_TOKEN};
///
/// assert!(BearerToken::configured("AAAA%2Fsecret").is_some());
/// assert!(BearerToken::configured(PLACEHOLDER_BEARER_TOKEN).is_none());
/// assert!(BearerToken::configured("  ").is_none());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    /// Accept a raw token only when it is usable: non-blank and not the
    /// placeholder value.
    pub fn configured(raw: impl Into<String>) -> Option<Self> {
        let mut raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed == PLACEHOLDER_BEARER_TOKEN {
            raw.zeroize();
            return None;
        }
        let token = trimmed.to_owned();
        raw.zeroize();
        Some(Self(token))
    }

    /// Expose the secret for building an `Authorization` header.
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken(<redacted>)")
    }
}

impl Drop for BearerToken {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}
