//! Detect overlapping meetings in a sorted list.
//!
//! Every unordered pair is compared once. Meetings that touch at a single
//! instant (one ends exactly when the other starts) are NOT clashes.

use std::fmt;

use chrono::NaiveDateTime;
use tracing::trace;

use crate::meeting::Meeting;
use crate::time::hour_minute;

const SECONDS_PER_DAY: i64 = 86_400;

/// Two meetings whose time ranges intersect.
#[derive(Debug, Clone, PartialEq)]
pub struct Clash {
    /// The earlier meeting in list order.
    pub first: Meeting,
    pub second: Meeting,
    pub overlap_minutes: i64,
    /// Start of the shared window (the later of the two starts).
    pub window_start: NaiveDateTime,
    /// End of the shared window (the earlier of the two ends).
    pub window_end: NaiveDateTime,
}

impl Clash {
    /// The shared window as `(HH:MM, HH:MM)`.
    pub fn window(&self) -> (String, String) {
        (hour_minute(&self.window_start), hour_minute(&self.window_end))
    }
}

impl fmt::Display for Clash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (from, to) = self.window();
        write!(
            f,
            "Meetings: <{}> and <{}> overlaps for {} min ({} to {})",
            self.first, self.second, self.overlap_minutes, from, to
        )
    }
}

/// Find every pair of overlapping meetings.
///
/// For each pair `(i, j)` with `i < j`, the shared window runs from the later
/// start to the earlier end and is a clash only if it has positive length.
/// `overlap_minutes` counts whole minutes of the window's time-of-day part,
/// so whole days are not included.
pub fn find_clashes(meetings: &[Meeting]) -> Vec<Clash> {
    let mut clashes = Vec::new();

    for (i, a) in meetings.iter().enumerate() {
        for b in &meetings[i + 1..] {
            let latest_start = a.start.max(b.start);
            let earliest_end = a.end.min(b.end);
            if earliest_end <= latest_start {
                continue;
            }

            let seconds = (earliest_end - latest_start)
                .num_seconds()
                .rem_euclid(SECONDS_PER_DAY);
            let clash = Clash {
                first: a.clone(),
                second: b.clone(),
                overlap_minutes: seconds / 60,
                window_start: latest_start,
                window_end: earliest_end,
            };
            trace!(%clash, "clash detected");
            clashes.push(clash);
        }
    }

    clashes
}
