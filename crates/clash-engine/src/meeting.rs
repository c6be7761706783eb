//! The meeting entity and the working-hours window it is validated against.

use std::cmp::Ordering;
use std::fmt;

use chrono::{Local, NaiveDateTime};

use crate::error::Result;
use crate::time::{hour_minute, parse_on_day};

/// Format of the day strings meetings are anchored to.
pub const DAY_FORMAT: &str = "%Y-%m-%d";

/// The current local date as `YYYY-MM-DD`.
pub fn today() -> String {
    Local::now().date_naive().format(DAY_FORMAT).to_string()
}

/// Working-hours bounds as written in the input (e.g. `"9:30am"`, `"18:00"`).
///
/// One value per dataset. It is resolved against a concrete day only when
/// meetings are checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkingHours {
    pub start: String,
    pub end: String,
}

impl Default for WorkingHours {
    fn default() -> Self {
        Self {
            start: "00:00".to_string(),
            end: "24:00".to_string(),
        }
    }
}

impl WorkingHours {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Parse both bounds anchored to `day`.
    pub fn resolve(&self, day: &str) -> Result<(NaiveDateTime, NaiveDateTime)> {
        Ok((parse_on_day(day, &self.start)?, parse_on_day(day, &self.end)?))
    }
}

impl fmt::Display for WorkingHours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

/// A single scheduled meeting.
///
/// Meetings are totally ordered by `(start, end, name)`: earlier start first,
/// then the shorter meeting, then by name. Equality uses the same three
/// fields.
#[derive(Debug, Clone)]
pub struct Meeting {
    pub name: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    /// The `YYYY-MM-DD` day both times were anchored to.
    pub day: String,
    /// `true` until [`Meeting::check_validity`] says otherwise.
    pub is_valid: bool,
}

impl Meeting {
    /// Build a meeting from raw time strings. `day` defaults to today.
    ///
    /// # Errors
    /// Returns `ClashError::InvalidTimeFormat` if either time fails to parse.
    pub fn new(name: impl Into<String>, start: &str, end: &str, day: Option<&str>) -> Result<Self> {
        let day = day.map_or_else(today, str::to_string);
        Ok(Self {
            name: name.into(),
            start: parse_on_day(&day, start)?,
            end: parse_on_day(&day, end)?,
            day,
            is_valid: true,
        })
    }

    /// Check the meeting against `hours` resolved on the meeting's own day.
    ///
    /// Valid iff `day_start <= start` and `end <= day_end`. Stores and
    /// returns the result.
    pub fn check_validity(&mut self, hours: &WorkingHours) -> Result<bool> {
        let (day_start, day_end) = hours.resolve(&self.day)?;
        self.is_valid = day_start <= self.start && self.end <= day_end;
        Ok(self.is_valid)
    }

    fn sort_key(&self) -> (NaiveDateTime, NaiveDateTime, &str) {
        (self.start, self.end, &self.name)
    }
}

impl PartialEq for Meeting {
    fn eq(&self, other: &Self) -> bool {
        self.sort_key() == other.sort_key()
    }
}

impl Eq for Meeting {}

impl PartialOrd for Meeting {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Meeting {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl fmt::Display for Meeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} @ {}_{}",
            self.name,
            hour_minute(&self.start),
            hour_minute(&self.end)
        )
    }
}
