// Gesture session
//
// Tracks the one drag or resize in progress between pointer-down and
// pointer-up. Pointer moves call `preview`, which never touches the store;
// `finish` is the single point where a gesture mutates the schedule.

use super::drag::{commit_drag, preview_drag};
use super::geometry::BoardGeometry;
use super::resize::{commit_resize, preview_resize, ResizeEdge};
use super::Rejection;
use crate::models::surgery::{Surgery, SurgeryId};
use crate::services::schedule::ScheduleStore;
use crate::utils::time::Interval;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureKind {
    Drag,
    Resize(ResizeEdge),
}

/// Context for an active gesture
#[derive(Clone, Debug)]
pub struct ActiveGesture {
    /// Snapshot of the case as it was when the gesture began
    pub surgery: Surgery,
    pub kind: GestureKind,
    /// Pointer x at pointer-down; previews use the offset from here
    pub origin_x: f64,
}

impl ActiveGesture {
    pub fn surgery_id(&self) -> Option<SurgeryId> {
        self.surgery.id
    }
}

/// Result of ending a gesture
#[derive(Debug, Clone, PartialEq)]
pub enum GestureOutcome {
    /// No gesture was in progress
    Idle,
    /// The store accepted the new placement
    Committed(Surgery),
    /// Nothing changed in the store
    Rejected(Rejection),
}

#[derive(Debug, Clone, Default)]
pub struct GestureSession {
    geometry: BoardGeometry,
    active: Option<ActiveGesture>,
}

impl GestureSession {
    pub fn new(geometry: BoardGeometry) -> Self {
        Self {
            geometry,
            active: None,
        }
    }

    pub fn geometry(&self) -> &BoardGeometry {
        &self.geometry
    }

    /// Switch the board scale. A gesture measured against the old scale is
    /// dropped.
    pub fn set_geometry(&mut self, geometry: BoardGeometry) {
        if self.cancel().is_some() {
            log::debug!("Board geometry changed mid-gesture; gesture cancelled");
        }
        self.geometry = geometry;
    }

    /// Begin moving a case. Returns false for cases that are not in the store yet.
    pub fn begin_drag(&mut self, item: &Surgery, pointer_x: f64) -> bool {
        self.begin(item, GestureKind::Drag, pointer_x)
    }

    pub fn begin_resize(&mut self, item: &Surgery, edge: ResizeEdge, pointer_x: f64) -> bool {
        self.begin(item, GestureKind::Resize(edge), pointer_x)
    }

    fn begin(&mut self, item: &Surgery, kind: GestureKind, pointer_x: f64) -> bool {
        let Some(id) = item.id else {
            return false;
        };
        if let Some(previous) = self.active.take() {
            log::debug!(
                "Gesture on case {:?} replaced before it finished",
                previous.surgery_id()
            );
        }
        log::debug!("Begin {:?} on case {}", kind, id);
        self.active = Some(ActiveGesture {
            surgery: item.clone(),
            kind,
            origin_x: pointer_x,
        });
        true
    }

    pub fn active(&self) -> Option<&ActiveGesture> {
        self.active.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Check if a gesture is in progress on a specific case
    pub fn is_moving(&self, id: SurgeryId) -> bool {
        self.active
            .as_ref()
            .map_or(false, |gesture| gesture.surgery_id() == Some(id))
    }

    /// Candidate interval for the current pointer position, for live feedback.
    pub fn preview(&self, pointer_x: f64) -> Option<Interval> {
        let gesture = self.active.as_ref()?;
        let delta = pointer_x - gesture.origin_x;
        Some(match gesture.kind {
            GestureKind::Drag => preview_drag(&gesture.surgery, delta, &self.geometry),
            GestureKind::Resize(edge) => {
                preview_resize(&gesture.surgery, edge, delta, &self.geometry)
            }
        })
    }

    /// End the gesture at the given pointer position and commit it.
    ///
    /// The session is idle afterwards whatever the outcome.
    pub fn finish(
        &mut self,
        pointer_x: f64,
        pointer_y: f64,
        store: &mut ScheduleStore,
    ) -> GestureOutcome {
        let Some(gesture) = self.active.take() else {
            return GestureOutcome::Idle;
        };
        let delta = pointer_x - gesture.origin_x;

        let placement = match gesture.kind {
            GestureKind::Drag => commit_drag(
                &gesture.surgery,
                delta,
                pointer_y,
                &self.geometry,
                store.rooms(),
            ),
            GestureKind::Resize(edge) => {
                commit_resize(&gesture.surgery, edge, delta, &self.geometry)
            }
        };

        let result =
            placement.and_then(|placement| store.apply(&placement).map_err(Rejection::from));
        match result {
            Ok(updated) => GestureOutcome::Committed(updated),
            Err(rejection) => {
                log::warn!(
                    "Discarded {:?} on case {:?}: {}",
                    gesture.kind,
                    gesture.surgery_id(),
                    rejection
                );
                GestureOutcome::Rejected(rejection)
            }
        }
    }

    /// Abandon the gesture without touching the store.
    pub fn cancel(&mut self) -> Option<ActiveGesture> {
        self.active.take()
    }
}
