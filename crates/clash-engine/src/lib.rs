//! # clash-engine
//!
//! Find overlapping meetings in a day's schedule and flag meetings that fall
//! outside working hours.
//!
//! Input is a header line followed by `start,end` rows, with times in 12-hour
//! (`9:30am`, `9:30 PM`) or 24-hour (`18:30`, `24:00`) form. A row with only a
//! start or only an end sets the working-day bound instead of adding a
//! meeting.
//!
//! ```rust
//! use clash_engine::analyze;
//!
//! let lines = ["start,end", "9:00am,10:00am", "9:30am,10:30am"];
//! let report = analyze(&lines, "2022-01-26").unwrap();
//! assert_eq!(report.clashes.len(), 1);
//! assert_eq!(report.clashes[0].overlap_minutes, 30);
//! ```
//!
//! ## Modules
//!
//! - [`time`] — `"<day>.<time>"` string → timestamp
//! - [`meeting`] — `Meeting` with its total order, and `WorkingHours`
//! - [`schedule`] — raw rows → sorted valid/invalid meeting lists
//! - [`conflict`] — pairwise overlap detection
//! - [`report`] — console report rendering
//! - [`error`] — Error types

pub mod conflict;
pub mod error;
pub mod meeting;
pub mod report;
pub mod schedule;
pub mod time;

pub use conflict::{find_clashes, Clash};
pub use error::ClashError;
pub use meeting::{Meeting, WorkingHours};
pub use report::Report;
pub use schedule::{build_schedule, Schedule};
pub use time::parse_time;

/// Build the schedule for `day` from `lines` and detect clashes among its
/// valid meetings.
///
/// # Errors
/// Propagates any parse failure from [`build_schedule`]; no partial report
/// is produced.
pub fn analyze<S: AsRef<str>>(lines: &[S], day: &str) -> error::Result<Report> {
    build_schedule(lines, day).map(Report::from_schedule)
}
