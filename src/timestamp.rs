//! Message timestamp formatting in Indian Standard Time.

use chrono::{DateTime, FixedOffset, TimeZone, Timelike, Utc};

/// IST is UTC+05:30 all year round.
const IST_OFFSET_SECS: i32 = 5 * 3600 + 30 * 60;

/// Messages younger than this always show the time only.
const RECENT_WINDOW_HOURS: i64 = 24;

fn ist() -> FixedOffset {
    FixedOffset::east_opt(IST_OFFSET_SECS).expect("IST offset is within bounds")
}

/// Format a message timestamp relative to `now`.
///
/// Returns `H:MM AM/PM` when the message falls on the same IST calendar day as
/// `now` or is less than 24 hours old, otherwise `DD Mon YYYY | H:MM AM/PM`.
pub fn format_timestamp(instant: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let tz = ist();
    let local = tz.from_utc_datetime(&instant.naive_utc());
    let local_now = tz.from_utc_datetime(&now.naive_utc());

    let time_str = clock_time(&local);

    let same_day = local.date_naive() == local_now.date_naive();
    let recent = (now - instant).num_milliseconds() < RECENT_WINDOW_HOURS * 3600 * 1000;

    if same_day || recent {
        return time_str;
    }

    format!("{} | {}", local.format("%d %b %Y"), time_str)
}

/// 12-hour clock without a leading zero on the hour.
fn clock_time(local: &DateTime<FixedOffset>) -> String {
    let (is_pm, hour) = local.hour12();
    format!(
        "{}:{:02} {}",
        hour,
        local.minute(),
        if is_pm { "PM" } else { "AM" }
    )
}
