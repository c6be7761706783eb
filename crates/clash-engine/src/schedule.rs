//! Build a sorted, validity-partitioned meeting list from raw input rows.
//!
//! The first line is a header. Every following line is a `start,end` pair:
//!
//! - `start,` (end empty) overrides the working-day start.
//! - `,end` (start empty) overrides the working-day end.
//! - `start,end` becomes `Meeting <k>`, where `k` counts data rows from 1,
//!   sentinel rows included.
//!
//! Blank lines are ignored and do not consume a row number.

use tracing::debug;

use crate::error::{ClashError, Result};
use crate::meeting::{Meeting, WorkingHours};

/// Meetings for one day, split by whether they fit the working hours.
#[derive(Debug, Clone, PartialEq)]
pub struct Schedule {
    /// The `YYYY-MM-DD` day every meeting is anchored to.
    pub day: String,
    /// The working-hours window after applying sentinel rows.
    pub hours: WorkingHours,
    /// Meetings inside the window, sorted.
    pub valid: Vec<Meeting>,
    /// Meetings outside the window, sorted.
    pub invalid: Vec<Meeting>,
}

/// One classified data row.
enum Row<'a> {
    DayStart(&'a str),
    DayEnd(&'a str),
    Meeting(&'a str, &'a str),
    Empty,
}

fn classify(line: usize, raw: &str) -> Result<Row<'_>> {
    let mut fields = raw.split(',');
    let (Some(start), Some(end), None) = (fields.next(), fields.next(), fields.next()) else {
        return Err(ClashError::MalformedRow {
            line,
            content: raw.to_string(),
        });
    };
    Ok(match (start.trim(), end.trim()) {
        ("", "") => Row::Empty,
        (start, "") => Row::DayStart(start),
        ("", end) => Row::DayEnd(end),
        (start, end) => Row::Meeting(start, end),
    })
}

/// Build the meeting list from `lines` (header first) anchored to `day`.
///
/// Meetings are sorted by their natural order, then each one is checked
/// against the working hours in effect after reading the whole input.
///
/// # Errors
/// Returns `ClashError::MalformedRow` for a row that is not a `start,end`
/// pair, and `ClashError::InvalidTimeFormat` for any unparseable time,
/// including sentinel bounds.
pub fn build_schedule<S: AsRef<str>>(lines: &[S], day: &str) -> Result<Schedule> {
    let mut hours = WorkingHours::default();
    let mut meetings = Vec::new();
    let mut index = 0usize;

    for (offset, raw) in lines.iter().enumerate().skip(1) {
        let raw = raw.as_ref().trim();
        if raw.is_empty() {
            continue;
        }
        index += 1;
        match classify(offset + 1, raw)? {
            Row::DayStart(start) => {
                debug!(row = index, start, "working day start overridden");
                hours.start = start.to_string();
            }
            Row::DayEnd(end) => {
                debug!(row = index, end, "working day end overridden");
                hours.end = end.to_string();
            }
            Row::Meeting(start, end) => {
                let meeting = Meeting::new(format!("Meeting {index}"), start, end, Some(day))?;
                debug!(row = index, %meeting, "meeting parsed");
                meetings.push(meeting);
            }
            Row::Empty => debug!(row = index, "empty row skipped"),
        }
    }

    meetings.sort();

    let mut valid = Vec::new();
    let mut invalid = Vec::new();
    for mut meeting in meetings {
        if meeting.check_validity(&hours)? {
            valid.push(meeting);
        } else {
            debug!(%meeting, %hours, "meeting outside working hours");
            invalid.push(meeting);
        }
    }

    Ok(Schedule {
        day: day.to_string(),
        hours,
        valid,
        invalid,
    })
}
