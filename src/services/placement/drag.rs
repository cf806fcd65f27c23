// Drag placement
//
// Moving a case keeps its duration; the start snaps to the 5-minute grid and
// never lands before the visible window. The target room comes from the row
// under the pointer.

use super::geometry::BoardGeometry;
use super::{Placement, Rejection};
use crate::models::room::RoomCatalog;
use crate::models::surgery::Surgery;
use crate::utils::time::{round_to_slot, ClockTime, Interval};

/// Interval the case would occupy after a horizontal move of `pixel_delta`.
pub fn preview_drag(item: &Surgery, pixel_delta: f64, geometry: &BoardGeometry) -> Interval {
    let delta = geometry.minutes_for_pixels(pixel_delta);
    let start = round_to_slot(f64::from(item.start_time.minutes()) + delta)
        .max(geometry.window_start());
    let start = ClockTime::from_minutes(start);
    Interval::new(start, start.offset(item.duration_minutes()))
}

/// Resolve a finished drag into a placement, or reject it when the pointer
/// ended outside every room row.
pub fn commit_drag(
    item: &Surgery,
    pixel_delta: f64,
    pointer_y: f64,
    geometry: &BoardGeometry,
    rooms: &RoomCatalog,
) -> Result<Placement, Rejection> {
    let surgery_id = item.id.ok_or(Rejection::Unsaved)?;
    let row = geometry.row_at(pointer_y);
    let room = rooms.by_index(row).ok_or(Rejection::RowOutOfBounds(row))?;

    Ok(Placement {
        surgery_id,
        room_id: Some(room.id),
        interval: preview_drag(item, pixel_delta, geometry),
    })
}
