use chrono::{DateTime, Datelike, Duration, LocalResult, NaiveDate, TimeZone, Utc};
pub use chrono_tz::Tz;

use crate::errors::{Error, Result, ValidationError};

/// Default timezone for household dates.
/// This is the canonical timezone used to convert UTC instants to calendar
/// days. Day boundaries for streaks, badges, and reminders all follow it,
/// regardless of where the server runs.
pub const DEFAULT_HOUSEHOLD_TZ: Tz = chrono_tz::America::Los_Angeles;

/// Converts a UTC instant to a calendar day in the given timezone.
///
/// This is the single source of truth for converting instants to domain
/// dates. Use this whenever you need to derive "what day is it" from a
/// timestamp.
pub fn local_date_from_utc(instant: DateTime<Utc>, tz: Tz) -> NaiveDate {
    instant.with_timezone(&tz).date_naive()
}

/// Today's calendar day in the given timezone.
pub fn today_in_tz(tz: Tz) -> NaiveDate {
    local_date_from_utc(Utc::now(), tz)
}

/// Monday that starts the week containing `date`.
///
/// Weeks run Monday..Sunday, so a Sunday belongs to the week that started
/// six days earlier.
pub fn week_start_monday(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

pub fn get_days_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    if start > end {
        return Vec::new();
    }
    let mut days = Vec::new();
    let mut current = start;
    while current <= end {
        days.push(current);
        if let Some(next) = current.succ_opt() {
            current = next;
        } else {
            // Should not happen for typical date ranges
            break;
        }
    }
    days
}

/// Parses an IANA timezone name (e.g. "America/Los_Angeles").
pub fn parse_timezone(name: &str) -> Result<Tz> {
    name.parse::<Tz>().map_err(|_| {
        Error::Validation(ValidationError::InvalidInput(format!(
            "unknown timezone '{}'",
            name
        )))
    })
}

/// Next wall-clock occurrence of `hour:00` in `tz`, strictly after `after`.
///
/// A local time skipped by a DST transition resolves to the first valid
/// instant of the following hour; an ambiguous one resolves to its earlier
/// offset.
pub fn next_occurrence_of_hour(after: DateTime<Utc>, tz: Tz, hour: u32) -> DateTime<Utc> {
    let hour = hour.min(23);
    let mut day = after.with_timezone(&tz).date_naive();
    loop {
        if let Some(naive) = day.and_hms_opt(hour, 0, 0) {
            let candidate = match tz.from_local_datetime(&naive) {
                LocalResult::Single(dt) => Some(dt),
                LocalResult::Ambiguous(earliest, _) => Some(earliest),
                LocalResult::None => naive
                    .checked_add_signed(Duration::hours(1))
                    .and_then(|shifted| tz.from_local_datetime(&shifted).earliest()),
            };
            if let Some(dt) = candidate {
                let utc = dt.with_timezone(&Utc);
                if utc > after {
                    return utc;
                }
            }
        }
        day = match day.succ_opt() {
            Some(next) => next,
            // Unreachable for real clocks
            None => return after + Duration::days(1),
        };
    }
}
