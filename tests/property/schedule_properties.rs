// Property-based tests for time conversion and conflict detection
// Random cases and clock values checked against the board's invariants

use chrono::NaiveDate;
use or_board::models::surgery::Surgery;
use or_board::services::conflict::{compute_conflicts, conflicting_pairs, ConflictScan};
use or_board::utils::time::{minutes_to_time, round_to_nearest, time_to_minutes, ClockTime};
use proptest::prelude::*;

fn board_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
}

/// A case with a positive duration, possibly unassigned
fn arb_case() -> impl Strategy<Value = Surgery> {
    (
        prop::option::of(1u32..=3),
        0i32..(20 * 12),
        1i32..=48,
    )
        .prop_map(|(room, start_slot, length_slots)| {
            let start = ClockTime::from_minutes(start_slot * 5);
            let mut surgery = Surgery::new("Bệnh nhân", "Phẫu thuật", board_day()).unwrap();
            surgery.start_time = start;
            surgery.end_time = start.offset(length_slots * 5);
            surgery.room_id = room;
            surgery
        })
}

fn arb_scan() -> impl Strategy<Value = ConflictScan> {
    prop_oneof![Just(ConflictScan::AdjacentPairs), Just(ConflictScan::OverlapSweep)]
}

proptest! {
    /// Property: every on-grid clock string survives a parse/format round trip
    #[test]
    fn prop_time_roundtrip_on_grid(hour in 0i32..24, slot in 0i32..12) {
        let text = format!("{:02}:{:02}", hour, slot * 5);
        prop_assert_eq!(minutes_to_time(f64::from(time_to_minutes(&text))), text);
    }

    /// Property: rounding to the grid is idempotent
    #[test]
    fn prop_round_to_nearest_idempotent(x in -2000.0f64..3000.0) {
        let once = round_to_nearest(x, 5);
        prop_assert_eq!(round_to_nearest(f64::from(once), 5), once);
        prop_assert_eq!(once % 5, 0);
    }

    /// Property: unassigned cases are never flagged
    #[test]
    fn prop_unassigned_never_conflicting(
        items in prop::collection::vec(arb_case(), 0..30),
        scan in arb_scan(),
    ) {
        for surgery in compute_conflicts(&items, scan) {
            if surgery.room_id.is_none() {
                prop_assert!(!surgery.is_conflicting);
            }
        }
    }

    /// Property: both members of every overlapping pair are flagged by the sweep,
    /// and the sweep flags nothing else
    #[test]
    fn prop_sweep_flags_exactly_overlapping_cases(
        items in prop::collection::vec(arb_case(), 0..30),
    ) {
        let flagged = compute_conflicts(&items, ConflictScan::OverlapSweep);
        for (index, surgery) in flagged.iter().enumerate() {
            let overlaps_any = items.iter().enumerate().any(|(other_index, other)| {
                other_index != index
                    && other.room_id.is_some()
                    && other.room_id == items[index].room_id
                    && other.interval().overlaps(&items[index].interval())
            });
            prop_assert_eq!(surgery.is_conflicting, overlaps_any);
        }
        prop_assert_eq!(
            conflicting_pairs(&items).is_empty(),
            flagged.iter().all(|s| !s.is_conflicting)
        );
    }

    /// Property: conflicts are mutual. Every flagged case belongs to an
    /// overlapping pair; the sweep flags both members of every pair, and the
    /// adjacent scan always flags the earlier member
    #[test]
    fn prop_conflicts_are_symmetric(
        items in prop::collection::vec(arb_case(), 0..30),
        scan in arb_scan(),
    ) {
        let flagged = compute_conflicts(&items, scan);
        let index_of = |target: &Surgery| {
            items.iter().position(|item| std::ptr::eq(item, target)).unwrap()
        };

        let mut in_pair = vec![false; items.len()];
        for (earlier, later) in conflicting_pairs(&items) {
            let (first, second) = (index_of(earlier), index_of(later));
            in_pair[first] = true;
            in_pair[second] = true;
            prop_assert!(flagged[first].is_conflicting);
            if scan == ConflictScan::OverlapSweep {
                prop_assert!(flagged[second].is_conflicting);
            }
        }
        for (index, surgery) in flagged.iter().enumerate() {
            prop_assert!(!surgery.is_conflicting || in_pair[index]);
        }
    }

    /// Property: the adjacent scan flags both cases of an overlapping neighbour pair
    #[test]
    fn prop_adjacent_scan_flags_neighbour_pairs(
        first in arb_case(),
        gap in 0i32..12,
        length in 1i32..=24,
    ) {
        let mut first = first;
        first.room_id = Some(1);
        let mut second = first.clone();
        second.start_time = first.start_time.offset(gap * 5);
        second.end_time = second.start_time.offset(length * 5);

        let overlapping = first.interval().overlaps(&second.interval());
        let flagged = compute_conflicts(&[second, first], ConflictScan::AdjacentPairs);
        prop_assert_eq!(flagged[0].is_conflicting, overlapping);
        prop_assert_eq!(flagged[1].is_conflicting, overlapping);
    }

    /// Property: the adjacent scan never flags a case the sweep leaves clear
    #[test]
    fn prop_adjacent_is_subset_of_sweep(
        items in prop::collection::vec(arb_case(), 0..30),
    ) {
        let adjacent = compute_conflicts(&items, ConflictScan::AdjacentPairs);
        let swept = compute_conflicts(&items, ConflictScan::OverlapSweep);
        for (a, s) in adjacent.iter().zip(&swept) {
            prop_assert!(!a.is_conflicting || s.is_conflicting);
        }
    }

    /// Property: detection leaves everything but the flag untouched and keeps order
    #[test]
    fn prop_compute_conflicts_preserves_items(
        items in prop::collection::vec(arb_case(), 0..30),
        scan in arb_scan(),
    ) {
        let flagged = compute_conflicts(&items, scan);
        prop_assert_eq!(flagged.len(), items.len());
        for (before, after) in items.iter().zip(&flagged) {
            let mut after = after.clone();
            after.is_conflicting = before.is_conflicting;
            prop_assert_eq!(&after, before);
        }
    }
}
