//! Account handles as typed by users.

use std::fmt;

/// Handle used when a proxy request names no account.
pub const DEFAULT_HANDLE: &str = "twitter";

/// Validation errors returned by [`Handle::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum HandleValidationError {
    /// The handle was empty once trimmed.
    #[error("handle must not be empty")]
    Empty,
}

/// Public username identifying an account, trimmed and non-empty.
///
/// No further validation happens here; the upstream API decides whether the
/// account exists.
///
/// # Examples
/// ```
/// use hackertweet::domain::Handle;
///
/// let handle = Handle::new("  sama ").expect("non-empty handle");
/// assert_eq!(handle.as_str(), "sama");
/// assert!(Handle::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Handle(String);

impl Handle {
    /// Trim and validate a handle.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, HandleValidationError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(HandleValidationError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Resolve an optional query value, falling back to [`DEFAULT_HANDLE`]
    /// when it is missing or blank.
    pub fn or_default(raw: Option<&str>) -> Self {
        raw.and_then(|value| Self::new(value).ok())
            .unwrap_or_else(|| Self(DEFAULT_HANDLE.to_owned()))
    }

    /// Borrow the handle text.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Handle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, DEFAULT_HANDLE)]
    #[case(Some(""), DEFAULT_HANDLE)]
    #[case(Some("  "), DEFAULT_HANDLE)]
    #[case(Some("naval"), "naval")]
    #[case(Some(" paulg\t"), "paulg")]
    fn or_default_falls_back_for_blank_values(#[case] raw: Option<&str>, #[case] expected: &str) {
        assert_eq!(Handle::or_default(raw).as_str(), expected);
    }

    #[rstest]
    fn new_rejects_whitespace() {
        assert_eq!(Handle::new(" \n "), Err(HandleValidationError::Empty));
    }
}
