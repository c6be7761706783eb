//! Property-based tests for meeting order, parsing and clash detection.

use chrono::Duration;
use clash_engine::time::{hour_minute, parse_on_day};
use clash_engine::{find_clashes, Meeting};
use proptest::prelude::*;

const DAY: &str = "2022-01-26";

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// A 24-hour `H:MM` string.
fn arb_clock() -> impl Strategy<Value = String> {
    (0u32..=23, 0u32..=59).prop_map(|(h, m)| format!("{}:{:02}", h, m))
}

/// A 12-hour `H:MM[ ]am|pm` string in any case.
fn arb_clock_12() -> impl Strategy<Value = String> {
    (
        1u32..=12,
        0u32..=59,
        prop_oneof![Just(""), Just(" ")],
        prop_oneof![Just("am"), Just("pm"), Just("AM"), Just("Pm")],
    )
        .prop_map(|(h, m, space, suffix)| format!("{}:{:02}{}{}", h, m, space, suffix))
}

/// A meeting starting between 06:00 and 18:00, lasting 15 to 180 minutes.
fn arb_meeting() -> impl Strategy<Value = Meeting> {
    (6u32..=17, 0u32..=59, 15i64..=180, prop_oneof![Just("a"), Just("b"), Just("c")])
        .prop_map(|(h, m, dur, name)| {
            let mut meeting = Meeting::new(name, &format!("{}:{:02}", h, m), "0:00", Some(DAY))
                .expect("generated times are valid");
            meeting.end = meeting.start + Duration::minutes(dur);
            meeting
        })
}

/// Meetings with distinct names, so no two compare equal.
fn arb_distinct_meetings(max: usize) -> impl Strategy<Value = Vec<Meeting>> {
    prop::collection::vec(arb_meeting(), 0..max).prop_map(|meetings| {
        meetings
            .into_iter()
            .enumerate()
            .map(|(i, mut m)| {
                m.name = format!("Meeting {}", i + 1);
                m
            })
            .collect()
    })
}

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    }
}

// ---------------------------------------------------------------------------
// Ordering
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn ordering_is_transitive(a in arb_meeting(), b in arb_meeting(), c in arb_meeting()) {
        if a < b && b < c {
            prop_assert!(a < c);
        }
        if a <= b && b <= c {
            prop_assert!(a <= c);
        }
    }

    #[test]
    fn ordering_is_antisymmetric(a in arb_meeting(), b in arb_meeting()) {
        prop_assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
        prop_assert_eq!(a == b, (a.start, a.end, &a.name) == (b.start, b.end, &b.name));
    }

    #[test]
    fn sorted_list_follows_start_end_name(mut meetings in prop::collection::vec(arb_meeting(), 0..20)) {
        meetings.sort();
        for pair in meetings.windows(2) {
            let (x, y) = (&pair[0], &pair[1]);
            prop_assert!((x.start, x.end, &x.name) <= (y.start, y.end, &y.name));
        }
    }
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn formatted_time_reparses_to_same_timestamp(clock in arb_clock()) {
        let parsed = parse_on_day(DAY, &clock).unwrap();
        let reparsed = parse_on_day(DAY, &hour_minute(&parsed)).unwrap();
        prop_assert_eq!(parsed, reparsed);
    }

    #[test]
    fn twelve_hour_times_reparse_as_twenty_four_hour(clock in arb_clock_12()) {
        let parsed = parse_on_day(DAY, &clock).unwrap();
        let reparsed = parse_on_day(DAY, &hour_minute(&parsed)).unwrap();
        prop_assert_eq!(parsed, reparsed);
    }
}

// ---------------------------------------------------------------------------
// Clash detection
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn no_pair_reported_twice(mut meetings in arb_distinct_meetings(15)) {
        meetings.sort();
        let clashes = find_clashes(&meetings);
        for (i, x) in clashes.iter().enumerate() {
            for y in &clashes[i + 1..] {
                let same = x.first == y.first && x.second == y.second;
                let mirrored = x.first == y.second && x.second == y.first;
                prop_assert!(!(same || mirrored), "pair reported twice: {}", x);
            }
        }
    }

    #[test]
    fn clashes_follow_list_order(mut meetings in arb_distinct_meetings(15)) {
        meetings.sort();
        for clash in find_clashes(&meetings) {
            prop_assert!(clash.first <= clash.second);
            prop_assert!(clash.window_start < clash.window_end);
            prop_assert!(clash.overlap_minutes > 0);
        }
    }

    #[test]
    fn clash_iff_intervals_intersect(a in arb_meeting(), b in arb_meeting()) {
        let mut meetings = vec![a.clone(), b.clone()];
        meetings.sort();
        let intersects = a.start < b.end && b.start < a.end;
        prop_assert_eq!(find_clashes(&meetings).len(), usize::from(intersects));
    }
}
