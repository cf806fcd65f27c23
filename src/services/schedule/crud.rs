use super::{ScheduleError, ScheduleStore};
use crate::models::surgery::{Surgery, SurgeryId, ValidationError};
use crate::services::placement::{commit_drop, BoardGeometry, Placement, Rejection};

impl ScheduleStore {
    /// Insert a new case and return its assigned id.
    ///
    /// Any id on the draft is ignored; ids come from a counter and are never reused.
    pub fn create(&mut self, mut draft: Surgery) -> Result<SurgeryId, ScheduleError> {
        self.check(&draft)?;

        let id = self.next_id;
        self.next_id += 1;
        draft.id = Some(id);
        draft.is_conflicting = false;
        self.surgeries.push(draft);
        self.refresh_conflicts();

        log::debug!("Created case {}", id);
        Ok(id)
    }

    /// Replace a stored case with an edited copy.
    pub fn update(&mut self, surgery: &Surgery) -> Result<(), ScheduleError> {
        let id = surgery.id.ok_or(ScheduleError::MissingId)?;
        let index = self.position(id)?;
        self.check(surgery)?;

        self.surgeries[index] = Surgery {
            is_conflicting: false,
            ..surgery.clone()
        };
        self.refresh_conflicts();

        log::debug!("Updated case {}", id);
        Ok(())
    }

    /// Remove a case for good and hand it back.
    pub fn delete(&mut self, id: SurgeryId) -> Result<Surgery, ScheduleError> {
        let index = self.position(id)?;
        let mut removed = self.surgeries.remove(index);
        removed.is_conflicting = false;
        self.refresh_conflicts();

        log::debug!("Deleted case {}", id);
        Ok(removed)
    }

    /// Move a stored case to a placement's room and interval.
    pub fn apply(&mut self, placement: &Placement) -> Result<Surgery, ScheduleError> {
        let index = self.position(placement.surgery_id)?;
        let moved = Surgery {
            room_id: placement.room_id,
            start_time: placement.interval.start,
            end_time: placement.interval.end,
            ..self.surgeries[index].clone()
        };
        self.check(&moved)?;

        self.surgeries[index] = moved;
        self.refresh_conflicts();

        log::debug!(
            "Placed case {} in room {:?} at {}",
            placement.surgery_id,
            placement.room_id,
            placement.interval
        );
        Ok(self.surgeries[index].clone())
    }

    /// Drop a stored case onto a board row, typically from the unassigned list.
    pub fn drop_on_row(
        &mut self,
        id: SurgeryId,
        row: i64,
        x_within_row: f64,
        geometry: &BoardGeometry,
    ) -> Result<Surgery, Rejection> {
        let item = self.get(id).ok_or(ScheduleError::NotFound(id))?;
        let placement = commit_drop(item, row, x_within_row, geometry, &self.rooms)?;
        Ok(self.apply(&placement)?)
    }

    /// Move a case back to the unassigned list, keeping its times.
    pub fn unassign(&mut self, id: SurgeryId) -> Result<Surgery, ScheduleError> {
        let index = self.position(id)?;
        let interval = self.surgeries[index].interval();
        self.apply(&Placement {
            surgery_id: id,
            room_id: None,
            interval,
        })
    }

    fn position(&self, id: SurgeryId) -> Result<usize, ScheduleError> {
        self.surgeries
            .iter()
            .position(|surgery| surgery.id == Some(id))
            .ok_or(ScheduleError::NotFound(id))
    }

    fn check(&self, surgery: &Surgery) -> Result<(), ScheduleError> {
        surgery.validate()?;
        if let Some(room_id) = surgery.room_id {
            if !self.rooms.contains(room_id) {
                return Err(ValidationError::UnknownRoom(room_id).into());
            }
        }
        Ok(())
    }
}
