/// Time utilities for chat history retention
///
/// History is kept until a fixed time of day, evaluated in the viewer's time zone.

use chrono::{DateTime, Duration, NaiveTime, TimeZone, Utc};

/// Local time of day at which the day's history is discarded.
pub const RETENTION_CUTOFF: NaiveTime = match NaiveTime::from_hms_opt(23, 59, 0) {
    Some(time) => time,
    None => panic!("invalid retention cutoff"),
};

/// The moment an entry created at `created` expires, in `created`'s zone.
///
/// Entries created at or after the cutoff roll over to the next day's cutoff.
pub fn retention_deadline<Tz: TimeZone>(created: &DateTime<Tz>) -> DateTime<Tz> {
    let tz = created.timezone();
    let mut date = created.date_naive();
    if created.time() >= RETENTION_CUTOFF {
        date = date.succ_opt().unwrap_or(date);
    }

    let naive = date.and_time(RETENTION_CUTOFF);
    // A cutoff inside a DST gap resolves to the first local minute after it.
    (0..=MAX_GAP_MINUTES)
        .find_map(|minutes| {
            tz.from_local_datetime(&(naive + Duration::minutes(minutes)))
                .earliest()
        })
        .unwrap_or_else(|| tz.from_utc_datetime(&naive))
}

/// Longest clock jump forward searched past the cutoff.
const MAX_GAP_MINUTES: i64 = 3 * 60;

/// Whether an entry created at `created` has expired as of `now`.
pub fn is_expired<Tz: TimeZone>(created: DateTime<Utc>, now: &DateTime<Tz>) -> bool {
    let created = created.with_timezone(&now.timezone());
    *now >= retention_deadline(&created)
}

/// Time remaining until the next cutoff after `now`.
pub fn until_next_cutoff<Tz: TimeZone>(now: &DateTime<Tz>) -> Duration {
    retention_deadline(now).signed_duration_since(now.clone())
}

/// The cutoff as shown to users, e.g. "11:59 PM".
pub fn format_cutoff() -> String {
    RETENTION_CUTOFF.format("%-I:%M %p").to_string()
}

/// Caption shown above the history list.
pub fn retention_caption() -> String {
    format!("History saves until {}", format_cutoff())
}
