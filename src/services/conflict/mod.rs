//! Room conflict detection.
//!
//! Cases are partitioned into lanes by `(date, room)`; unassigned cases sit in
//! no lane and never conflict. Each lane is stably sorted by start time and
//! scanned once, so a full recompute is `O(n log n)` and cheap enough to run
//! after every store mutation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::room::RoomId;
use crate::models::surgery::Surgery;
use crate::utils::time::ClockTime;

/// How a lane is scanned for overlaps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictScan {
    /// Compare only neighbours in start order. A long case that overlaps a
    /// later, non-adjacent case is missed when a short case sits in between.
    AdjacentPairs,
    /// Track the running maximum end time, so every case that overlaps any
    /// other case in its lane is flagged.
    #[default]
    OverlapSweep,
}

/// Return a copy of `items` with `is_conflicting` recomputed.
///
/// The input is left untouched and the output keeps the input order.
pub fn compute_conflicts(items: &[Surgery], scan: ConflictScan) -> Vec<Surgery> {
    let flags = conflict_flags(items, scan);
    items
        .iter()
        .zip(flags)
        .map(|(item, is_conflicting)| Surgery {
            is_conflicting,
            ..item.clone()
        })
        .collect()
}

/// Conflict flag for each item, by position.
pub fn conflict_flags(items: &[Surgery], scan: ConflictScan) -> Vec<bool> {
    let mut flags = vec![false; items.len()];

    for lane in lanes(items).into_values() {
        match scan {
            ConflictScan::AdjacentPairs => mark_adjacent(items, &lane, &mut flags),
            ConflictScan::OverlapSweep => mark_sweep(items, &lane, &mut flags),
        }
    }

    let flagged = flags.iter().filter(|flag| **flag).count();
    if flagged > 0 {
        log::debug!("{} of {} cases are in conflict ({:?})", flagged, items.len(), scan);
    }
    flags
}

/// Every pair of cases sharing a room, a date, and at least one minute.
pub fn conflicting_pairs(items: &[Surgery]) -> Vec<(&Surgery, &Surgery)> {
    let mut pairs = Vec::new();
    for lane in lanes(items).into_values() {
        for (pos, &first) in lane.iter().enumerate() {
            let current = &items[first];
            for &second in &lane[pos + 1..] {
                let next = &items[second];
                if next.start_time >= current.end_time {
                    break;
                }
                if current.interval().overlaps(&next.interval()) {
                    pairs.push((current, next));
                }
            }
        }
    }
    pairs
}

/// Indices of assigned items grouped by `(date, room)`, each lane stably
/// sorted by start time so equal starts keep their input order.
///
/// Lanes are keyed by date as well as room, unlike a room-only partition, so
/// a multi-day list never flags cases on different days against each other.
fn lanes(items: &[Surgery]) -> BTreeMap<(NaiveDate, RoomId), Vec<usize>> {
    let mut lanes: BTreeMap<(NaiveDate, RoomId), Vec<usize>> = BTreeMap::new();
    for (index, item) in items.iter().enumerate() {
        if let Some(room_id) = item.room_id {
            lanes.entry((item.date, room_id)).or_default().push(index);
        }
    }
    for lane in lanes.values_mut() {
        lane.sort_by_key(|&index| items[index].start_time);
    }
    lanes
}

fn mark_adjacent(items: &[Surgery], lane: &[usize], flags: &mut [bool]) {
    for pair in lane.windows(2) {
        let (earlier, next) = (pair[0], pair[1]);
        if items[earlier].end_time > items[next].start_time {
            flags[earlier] = true;
            flags[next] = true;
        }
    }
}

fn mark_sweep(items: &[Surgery], lane: &[usize], flags: &mut [bool]) {
    let mut run: Vec<usize> = Vec::new();
    let mut run_end: Option<ClockTime> = None;

    for &index in lane {
        let item = &items[index];
        match run_end {
            Some(end) if item.start_time < end => {
                run.push(index);
                run_end = Some(end.max(item.end_time));
            }
            _ => {
                flag_run(&run, flags);
                run.clear();
                run.push(index);
                run_end = Some(item.end_time);
            }
        }
    }
    flag_run(&run, flags);
}

// A run of two or more chained intervals: each member overlaps at least one other.
fn flag_run(run: &[usize], flags: &mut [bool]) {
    if run.len() > 1 {
        for &index in run {
            flags[index] = true;
        }
    }
}
