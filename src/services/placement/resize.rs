// Edge resize placement
//
// Dragging the start or end edge of a case moves only that edge. The moved
// edge snaps to the 5-minute grid and is clamped so the case keeps at least
// MIN_DURATION_MINUTES. The start edge never moves before midnight; a case
// ending before 00:15 cannot keep the minimum, so its start edge stays put and
// the commit is rejected. The room never changes.

use serde::{Deserialize, Serialize};

use super::geometry::BoardGeometry;
use super::{Placement, Rejection};
use crate::models::surgery::Surgery;
use crate::utils::time::{round_to_slot, ClockTime, Interval};

pub const MIN_DURATION_MINUTES: i32 = 15;

/// Which edge of the case block is being dragged
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizeEdge {
    /// Left edge - adjusts start time
    Start,
    /// Right edge - adjusts end time
    End,
}

/// Interval after moving `edge` by `pixel_delta`.
pub fn preview_resize(
    item: &Surgery,
    edge: ResizeEdge,
    pixel_delta: f64,
    geometry: &BoardGeometry,
) -> Interval {
    let delta = geometry.minutes_for_pixels(pixel_delta);
    let start = item.start_time.minutes();
    let end = item.end_time.minutes();

    match edge {
        ResizeEdge::Start => {
            let latest_start = end.saturating_sub(MIN_DURATION_MINUTES);
            if latest_start < 0 {
                return item.interval();
            }
            let new_start = round_to_slot(f64::from(start) + delta)
                .min(latest_start)
                .max(0);
            Interval::new(ClockTime::from_minutes(new_start), item.end_time)
        }
        ResizeEdge::End => {
            let new_end = round_to_slot(f64::from(end) + delta)
                .max(start.saturating_add(MIN_DURATION_MINUTES));
            Interval::new(item.start_time, ClockTime::from_minutes(new_end))
        }
    }
}

pub fn commit_resize(
    item: &Surgery,
    edge: ResizeEdge,
    pixel_delta: f64,
    geometry: &BoardGeometry,
) -> Result<Placement, Rejection> {
    let surgery_id = item.id.ok_or(Rejection::Unsaved)?;
    let interval = preview_resize(item, edge, pixel_delta, geometry);
    if interval.duration() < MIN_DURATION_MINUTES {
        return Err(Rejection::BelowMinimumDuration(interval));
    }
    Ok(Placement {
        surgery_id,
        room_id: item.room_id,
        interval,
    })
}
