//! Parse day-qualified time strings into absolute timestamps.
//!
//! Two forms are accepted after the `YYYY-MM-DD.` day prefix:
//!
//! - 12-hour: `H:MM[am|pm]`, case-insensitive, with at most one space before
//!   the suffix. Only the prefix has to match; trailing text is ignored.
//! - 24-hour: `H:MM`, matched against the whole string. `24:00` is midnight
//!   of the following day.
//!
//! The 12-hour form is tried first so `9:30am` is never read as a truncated
//! 24-hour time, and the 24-hour form must match completely so `18:30am`
//! cannot sneak through on its prefix.

use std::sync::LazyLock;

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use regex::{Captures, Regex};

use crate::error::{ClashError, Result};

/// `chrono` format used to render the time of day in reports.
pub const HOUR_MINUTE: &str = "%H:%M";

static H12: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(\d+)-(\d+)-(\d+)\.(\d+):(\d+)\s?(am|pm)")
        .expect("12-hour pattern is valid")
});

static H24: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+)-(\d+)-(\d+)\.(\d+):(\d+)$").expect("24-hour pattern is valid")
});

/// Parse a `"<day>.<time>"` string into a timestamp.
///
/// # Errors
/// Returns `ClashError::InvalidTimeFormat` when the string matches neither
/// accepted form, or when a matched component is out of range (e.g. `13:00pm`,
/// `9:75`, month 14).
pub fn parse_time(input: &str) -> Result<NaiveDateTime> {
    let invalid = || ClashError::InvalidTimeFormat(input.to_string());

    if let Some(caps) = H12.captures(input) {
        let date = date_from(&caps).ok_or_else(invalid)?;
        let hour: u32 = number(&caps, 4).ok_or_else(invalid)?;
        let minute: u32 = number(&caps, 5).ok_or_else(invalid)?;
        if !(1..=12).contains(&hour) {
            return Err(invalid());
        }
        let pm = caps[6].eq_ignore_ascii_case("pm");
        let hour = match (hour, pm) {
            (12, false) => 0,
            (12, true) => 12,
            (h, false) => h,
            (h, true) => h + 12,
        };
        let time = NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(invalid)?;
        return Ok(date.and_time(time));
    }

    if let Some(caps) = H24.captures(input) {
        let date = date_from(&caps).ok_or_else(invalid)?;
        if &caps[4] == "24" && &caps[5] == "00" {
            return Ok(date.and_time(NaiveTime::MIN) + Duration::days(1));
        }
        let hour: u32 = number(&caps, 4).ok_or_else(invalid)?;
        let minute: u32 = number(&caps, 5).ok_or_else(invalid)?;
        let time = NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(invalid)?;
        return Ok(date.and_time(time));
    }

    Err(invalid())
}

/// Parse `time` anchored to `day` (`YYYY-MM-DD`).
pub fn parse_on_day(day: &str, time: &str) -> Result<NaiveDateTime> {
    parse_time(&format!("{day}.{time}"))
}

/// Format a timestamp's time of day as `HH:MM`.
pub fn hour_minute(ts: &NaiveDateTime) -> String {
    ts.format(HOUR_MINUTE).to_string()
}

fn date_from(caps: &Captures<'_>) -> Option<NaiveDate> {
    let year: i32 = number(caps, 1)?;
    let month: u32 = number(caps, 2)?;
    let day: u32 = number(caps, 3)?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn number<T: std::str::FromStr>(caps: &Captures<'_>, group: usize) -> Option<T> {
    caps.get(group)?.as_str().parse().ok()
}
