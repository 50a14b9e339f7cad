//! Relative timestamps for tweet rows.

use chrono::{DateTime, Utc};

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;

/// Describe how long ago `then` was, relative to `now`.
///
/// Elapsed time is floored to whole seconds and the first matching bucket
/// wins: seconds below a minute, minutes below an hour, hours below a day,
/// days otherwise. Timestamps in the future count as zero seconds.
///
/// # Examples
/// ```
/// use chrono::{Duration, Utc};
/// use hackertweet::view::time_ago;
///
/// let now = Utc::now();
/// assert_eq!(time_ago(now - Duration::seconds(90), now), "1 minutes ago");
/// ```
pub fn time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now
        .signed_duration_since(then)
        .num_milliseconds()
        .div_euclid(1000)
        .max(0);

    if elapsed < MINUTE {
        format!("{elapsed} seconds ago")
    } else if elapsed < HOUR {
        format!("{} minutes ago", elapsed / MINUTE)
    } else if elapsed < DAY {
        format!("{} hours ago", elapsed / HOUR)
    } else {
        format!("{} days ago", elapsed / DAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use rstest::{fixture, rstest};

    #[fixture]
    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0)
            .single()
            .expect("valid date")
    }

    #[rstest]
    #[case::just_now(Duration::zero(), "0 seconds ago")]
    #[case::fractional_second(Duration::milliseconds(999), "0 seconds ago")]
    #[case::under_a_minute(Duration::seconds(59), "59 seconds ago")]
    #[case::exactly_a_minute(Duration::seconds(60), "1 minutes ago")]
    #[case::ninety_seconds(Duration::seconds(90), "1 minutes ago")]
    #[case::five_minutes(Duration::minutes(5), "5 minutes ago")]
    #[case::under_an_hour(Duration::seconds(3599), "59 minutes ago")]
    #[case::exactly_an_hour(Duration::hours(1), "1 hours ago")]
    #[case::under_a_day(Duration::seconds(86_399), "23 hours ago")]
    #[case::exactly_a_day(Duration::days(1), "1 days ago")]
    #[case::months(Duration::days(400), "400 days ago")]
    fn buckets_by_first_matching_unit(
        now: DateTime<Utc>,
        #[case] elapsed: Duration,
        #[case] expected: &str,
    ) {
        assert_eq!(time_ago(now - elapsed, now), expected);
    }

    #[rstest]
    fn future_timestamps_clamp_to_zero(now: DateTime<Utc>) {
        assert_eq!(time_ago(now + Duration::seconds(30), now), "0 seconds ago");
    }
}
