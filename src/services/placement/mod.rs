// Placement module
// Turns pointer gestures on the Gantt board into proposed case placements

pub mod drag;
pub mod drop;
pub mod geometry;
pub mod resize;
pub mod session;

pub use drag::{commit_drag, preview_drag};
pub use drop::{commit_drop, commit_drop_at, DEFAULT_DROP_DURATION_MINUTES};
pub use geometry::BoardGeometry;
pub use resize::{commit_resize, preview_resize, ResizeEdge, MIN_DURATION_MINUTES};
pub use session::{GestureKind, GestureOutcome, GestureSession};

use crate::models::room::RoomId;
use crate::models::surgery::SurgeryId;
use crate::services::schedule::ScheduleError;
use crate::utils::time::Interval;

/// Where a gesture wants a case to go. Applied through
/// [`ScheduleStore::apply`](crate::services::schedule::ScheduleStore::apply).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub surgery_id: SurgeryId,
    pub room_id: Option<RoomId>,
    pub interval: Interval,
}

/// Why a gesture left the schedule untouched.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Rejection {
    #[error("pointer left the board at row {0}")]
    RowOutOfBounds(i64),
    #[error("case has not been saved yet")]
    Unsaved,
    #[error("resize to {0} would be shorter than the minimum case length")]
    BelowMinimumDuration(Interval),
    #[error(transparent)]
    Store(#[from] ScheduleError),
}
