use chrono::NaiveDate;

use super::ScheduleStore;
use crate::models::department::Department;
use crate::models::room::RoomId;
use crate::models::surgery::{Surgery, SurgeryId};

/// Which room assignment a listing should include.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RoomFilter {
    #[default]
    Any,
    Room(RoomId),
    Unassigned,
}

/// Criteria for [`ScheduleStore::list`]. The default matches every case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SurgeryFilter {
    pub date: Option<NaiveDate>,
    pub room: RoomFilter,
    pub department: Option<Department>,
}

impl SurgeryFilter {
    pub fn on(date: NaiveDate) -> Self {
        Self {
            date: Some(date),
            ..Self::default()
        }
    }

    pub fn in_room(mut self, room_id: RoomId) -> Self {
        self.room = RoomFilter::Room(room_id);
        self
    }

    pub fn unassigned(mut self) -> Self {
        self.room = RoomFilter::Unassigned;
        self
    }

    pub fn department(mut self, department: Department) -> Self {
        self.department = Some(department);
        self
    }

    pub fn matches(&self, surgery: &Surgery) -> bool {
        let date_ok = self.date.map_or(true, |date| surgery.date == date);
        let room_ok = match self.room {
            RoomFilter::Any => true,
            RoomFilter::Room(room_id) => surgery.room_id == Some(room_id),
            RoomFilter::Unassigned => surgery.room_id.is_none(),
        };
        let department_ok = self
            .department
            .map_or(true, |department| surgery.department == department);
        date_ok && room_ok && department_ok
    }
}

impl ScheduleStore {
    /// Retrieve a case by ID.
    pub fn get(&self, id: SurgeryId) -> Option<&Surgery> {
        self.surgeries.iter().find(|surgery| surgery.id == Some(id))
    }

    /// Every stored case in insertion order.
    pub fn all(&self) -> &[Surgery] {
        &self.surgeries
    }

    pub fn len(&self) -> usize {
        self.surgeries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surgeries.is_empty()
    }

    /// Matching cases ordered by date, then start time, then id.
    pub fn list(&self, filter: &SurgeryFilter) -> Vec<Surgery> {
        let mut matching: Vec<Surgery> = self
            .surgeries
            .iter()
            .filter(|surgery| filter.matches(surgery))
            .cloned()
            .collect();
        matching.sort_by_key(|surgery| (surgery.date, surgery.start_time, surgery.id));
        matching
    }

    /// Cases currently flagged as overlapping another case in their room.
    pub fn conflicting(&self) -> Vec<Surgery> {
        let mut flagged: Vec<Surgery> = self
            .surgeries
            .iter()
            .filter(|surgery| surgery.is_conflicting)
            .cloned()
            .collect();
        flagged.sort_by_key(|surgery| (surgery.date, surgery.room_id, surgery.start_time));
        flagged
    }
}
