//! Lenient query-string reading.
//!
//! Repeated keys are not an error: the first occurrence wins, matching how
//! browsers' `URLSearchParams::get` reads a query.

use url::form_urlencoded;

/// Return the first value for `key` in a raw query string, form-decoded.
///
/// # Examples
///
/// ```rust
/// use hackertweet::inbound::http::query::first_value;
///
/// assert_eq!(first_value("username=a&username=b", "username").as_deref(), Some("a"));
/// assert_eq!(first_value("username=a+b%26c", "username").as_deref(), Some("a b&c"));
/// assert_eq!(first_value("quick=paulg", "username"), None);
/// ```
#[must_use]
pub fn first_value(query_string: &str, key: &str) -> Option<String> {
    form_urlencoded::parse(query_string.as_bytes())
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::single("username=sama", Some("sama"))]
    #[case::repeated("username=paulg&username=sama", Some("paulg"))]
    #[case::empty_first("username=&username=sama", Some(""))]
    #[case::absent("quick=trending", None)]
    #[case::empty_query("", None)]
    #[case::bare_key("username", Some(""))]
    fn first_occurrence_wins(#[case] query: &str, #[case] expected: Option<&str>) {
        assert_eq!(first_value(query, "username").as_deref(), expected);
    }
}
