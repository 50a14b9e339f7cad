//! Server-side HTML rendering of the feed page.

use std::fmt;

use chrono::{DateTime, Utc};

use super::state::{QUICK_LINKS, ViewState};
use super::time_ago::time_ago;

/// Shown when there is nothing else to display.
pub const EMPTY_PROMPT: &str = "Enter a username or click a quick link above";

const STYLE: &str = "body{margin:0;background:#f6f6ef;font-family:Verdana,Geneva,sans-serif}\
.topbar{background:#ff6600;padding:2px 8px;display:flex;align-items:center;gap:8px;font-size:13px}\
.logo{border:1px solid #fff;color:#fff;font-weight:bold;padding:0 4px}\
.brand{font-weight:bold}.brand .hi{color:#fff}\
.links{flex:1;display:flex;gap:16px}.links a{color:#000;text-decoration:none}\
.links a:hover{text-decoration:underline}\
form{display:flex;gap:4px;margin:0}\
input{font-size:11px;border:1px solid #828282;padding:1px 6px}\
button{background:none;border:0;cursor:pointer;font-size:13px}\
main{max-width:64rem;margin:0 auto;padding:8px}\
.error,.empty,.meta,.rank,.handle{color:#828282}\
.error{padding:16px 8px;font-size:13px}\
.user{padding:8px;font-size:13px;border-bottom:1px solid #ff6600;margin-bottom:8px}\
table{width:100%;border-collapse:collapse}td{vertical-align:top}\
.rank{font-size:10px;width:30px;text-align:right;padding-right:8px}\
.text{font-size:13px}.meta{font-size:9px;padding-bottom:6px}\
.empty{text-align:center;font-size:13px;padding:32px 0}";

/// HTML-escaping wrapper for text content and attribute values.
struct Escaped<'a>(&'a str);

fn entity(c: char) -> Option<&'static str> {
    match c {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#39;"),
        _ => None,
    }
}

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Each chunk ends with at most one character needing an entity.
        for chunk in self.0.split_inclusive(|c| entity(c).is_some()) {
            let mut chars = chunk.chars();
            match chars.next_back().and_then(entity) {
                Some(replacement) => {
                    f.write_str(chars.as_str())?;
                    f.write_str(replacement)?;
                }
                None => f.write_str(chunk)?,
            }
        }
        Ok(())
    }
}

/// A full HTML document for one [`ViewState`], rendered relative to `now`.
///
/// ```
/// use chrono::Utc;
/// use hackertweet::view::{FeedPage, ViewState};
///
/// let state = ViewState::default();
/// let html = FeedPage::new(&state, Utc::now()).to_string();
/// assert!(html.contains("Enter a username or click a quick link above"));
/// ```
pub struct FeedPage<'a> {
    state: &'a ViewState,
    now: DateTime<Utc>,
}

impl<'a> FeedPage<'a> {
    /// Prepare `state` for rendering; time-ago strings are measured from `now`.
    pub fn new(state: &'a ViewState, now: DateTime<Utc>) -> Self {
        Self { state, now }
    }

    fn write_topbar(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let disabled = if self.state.loading { " disabled" } else { "" };
        let label = if self.state.loading { "loading..." } else { "go" };

        f.write_str("<div class=\"topbar\"><span class=\"logo\">X</span>")?;
        f.write_str("<span class=\"brand\">Hacker<span class=\"hi\">Tweet</span></span>")?;
        f.write_str("<nav class=\"links\">")?;
        for link in &QUICK_LINKS {
            write!(
                f,
                "<a href=\"/?quick={label}\">{label}</a>",
                label = Escaped(link.label)
            )?;
        }
        f.write_str("</nav>")?;
        write!(
            f,
            "<form method=\"get\" action=\"/\">\
             <input type=\"text\" name=\"username\" placeholder=\"username\" value=\"{query}\"{disabled}>\
             <button type=\"submit\"{disabled}>{label}</button></form></div>",
            query = Escaped(&self.state.query),
        )
    }

    fn write_results(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state;
        if let Some(error) = &state.error {
            write!(f, "<div class=\"error\">{}</div>", Escaped(error))?;
        }
        if let Some(user) = &state.user {
            write!(
                f,
                "<div class=\"user\"><b>{}</b><span class=\"handle\"> (@{})</span></div>",
                Escaped(&user.name),
                Escaped(&user.username)
            )?;
        }

        f.write_str("<table><tbody>")?;
        for (index, tweet) in state.tweets.iter().enumerate() {
            let metrics = &tweet.public_metrics;
            write!(
                f,
                "<tr><td class=\"rank\">{rank}.</td><td>\
                 <div class=\"text\">{text}</div>\
                 <div class=\"meta\">{likes} points | {ago} | {replies} comments | {retweets} retweets</div>\
                 </td></tr>",
                rank = index + 1,
                text = Escaped(&tweet.text),
                likes = metrics.like_count,
                ago = time_ago(tweet.created_at, self.now),
                replies = metrics.reply_count,
                retweets = metrics.retweet_count,
            )?;
        }
        f.write_str("</tbody></table>")?;

        if state.tweets.is_empty() && !state.loading && state.error.is_none() {
            write!(f, "<div class=\"empty\">{EMPTY_PROMPT}</div>")?;
        }
        Ok(())
    }
}

impl fmt::Display for FeedPage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">\
             <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
             <title>HackerTweet</title><style>{STYLE}</style></head><body>"
        )?;
        self.write_topbar(f)?;
        f.write_str("<main>")?;
        self.write_results(f)?;
        f.write_str("</main></body></html>")
    }
}
