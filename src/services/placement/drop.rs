// Drop placement
//
// A case dragged in from the unassigned list lands on a room row at the
// pointer's horizontal position. Placeholder cases without a real duration
// get DEFAULT_DROP_DURATION_MINUTES so the result is always a valid interval.

use super::geometry::BoardGeometry;
use super::{Placement, Rejection};
use crate::models::room::RoomCatalog;
use crate::models::surgery::Surgery;
use crate::utils::time::{round_to_slot, ClockTime, Interval};

pub const DEFAULT_DROP_DURATION_MINUTES: i32 = 60;

/// Snapped start time for a drop `x_within_row` pixels right of the time
/// axis origin.
pub fn drop_start(x_within_row: f64, geometry: &BoardGeometry) -> ClockTime {
    let window_start = geometry.window_start();
    let minutes = f64::from(window_start) + geometry.minutes_for_pixels(x_within_row);
    ClockTime::from_minutes(round_to_slot(minutes).max(window_start))
}

pub fn commit_drop(
    item: &Surgery,
    row: i64,
    x_within_row: f64,
    geometry: &BoardGeometry,
    rooms: &RoomCatalog,
) -> Result<Placement, Rejection> {
    let surgery_id = item.id.ok_or(Rejection::Unsaved)?;
    let room = rooms.by_index(row).ok_or(Rejection::RowOutOfBounds(row))?;

    let duration = match item.duration_minutes() {
        minutes if minutes > 0 => minutes,
        _ => DEFAULT_DROP_DURATION_MINUTES,
    };
    let start = drop_start(x_within_row, geometry);

    Ok(Placement {
        surgery_id,
        room_id: Some(room.id),
        interval: Interval::new(start, start.offset(duration)),
    })
}

/// Same as [`commit_drop`] for a pointer position relative to the board's
/// top-left corner, room label column included.
pub fn commit_drop_at(
    item: &Surgery,
    pointer_x: f64,
    pointer_y: f64,
    geometry: &BoardGeometry,
    rooms: &RoomCatalog,
) -> Result<Placement, Rejection> {
    commit_drop(
        item,
        geometry.row_at(pointer_y),
        pointer_x - geometry.label_width,
        geometry,
        rooms,
    )
}
