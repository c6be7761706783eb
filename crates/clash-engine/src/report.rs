//! Console report for one analysis pass.

use std::fmt;

use crate::conflict::{find_clashes, Clash};
use crate::meeting::{Meeting, WorkingHours};
use crate::schedule::Schedule;

/// Everything printed for one day: clashes among valid meetings and the
/// meetings that fall outside working hours.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub day: String,
    pub hours: WorkingHours,
    pub clashes: Vec<Clash>,
    pub invalid: Vec<Meeting>,
}

impl Report {
    /// Run clash detection over the schedule's valid meetings.
    pub fn from_schedule(schedule: Schedule) -> Self {
        let clashes = find_clashes(&schedule.valid);
        Self {
            day: schedule.day,
            hours: schedule.hours,
            clashes,
            invalid: schedule.invalid,
        }
    }

    /// `true` when there is nothing to report.
    pub fn is_clean(&self) -> bool {
        self.clashes.is_empty() && self.invalid.is_empty()
    }
}

/// Renders both sections; a section with no entries is omitted entirely.
impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.clashes.is_empty() {
            writeln!(f, "Meetings conflict for {}", self.day)?;
            for clash in &self.clashes {
                writeln!(f, "{clash}")?;
            }
        }
        if !self.invalid.is_empty() {
            writeln!(
                f,
                "Invalid Meetings, outside working hours for {}: {}",
                self.day, self.hours
            )?;
            for meeting in &self.invalid {
                writeln!(f, "{meeting}")?;
            }
        }
        Ok(())
    }
}
