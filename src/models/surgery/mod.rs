// Surgery module
// A surgical case: who is operated on, what is done, and where/when it is scheduled

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::department::Department;
use crate::models::drape::DrapeSelection;
use crate::models::room::RoomId;
use crate::utils::time::{ClockTime, Interval, MINUTES_PER_DAY};

pub type SurgeryId = u64;

/// A surgical case on the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Surgery {
    /// Assigned by the schedule store on insert; `None` for drafts
    #[serde(default)]
    pub id: Option<SurgeryId>,
    pub patient_name: String,
    #[serde(default)]
    pub patient_age: u32,
    #[serde(default)]
    pub diagnosis: String,
    pub procedure: String,
    #[serde(default)]
    pub surgeon: String,
    #[serde(default)]
    pub department: Department,
    pub date: NaiveDate,
    pub start_time: ClockTime,
    pub end_time: ClockTime,
    /// `None` while the case waits in the unassigned list
    #[serde(default)]
    pub room_id: Option<RoomId>,
    #[serde(default)]
    pub special_requirements: Vec<String>,
    #[serde(default)]
    pub drape: Option<DrapeSelection>,
    /// Derived by conflict detection; never trusted from input
    #[serde(default, skip_deserializing)]
    pub is_conflicting: bool,
}

impl Surgery {
    /// Create a draft case with the required subject fields
    ///
    /// Scheduling fields take the new-case form defaults: 08:00-09:00,
    /// unassigned, general surgery.
    ///
    /// # Examples
    /// ```
    /// use or_board::models::surgery::Surgery;
    /// use chrono::NaiveDate;
    ///
    /// let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
    /// let case = Surgery::new("Trần Thị B", "Cắt ruột thừa nội soi", date).unwrap();
    /// assert!(case.room_id.is_none());
    /// ```
    pub fn new(
        patient_name: impl Into<String>,
        procedure: impl Into<String>,
        date: NaiveDate,
    ) -> Result<Self, ValidationError> {
        Self::builder()
            .patient_name(patient_name)
            .procedure(procedure)
            .date(date)
            .build()
    }

    /// Create a builder for constructing cases with optional fields
    pub fn builder() -> SurgeryBuilder {
        SurgeryBuilder::new()
    }

    /// Check the fields a case needs before it may enter the store.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.patient_name.trim().is_empty() {
            return Err(ValidationError::MissingPatientName);
        }
        if self.procedure.trim().is_empty() {
            return Err(ValidationError::MissingProcedure);
        }

        let start = self.start_time.minutes();
        if !(0..MINUTES_PER_DAY).contains(&start) {
            return Err(ValidationError::StartOutOfDay(self.start_time));
        }
        if self.end_time <= self.start_time && !self.is_placeholder() {
            return Err(ValidationError::EndNotAfterStart {
                start: self.start_time,
                end: self.end_time,
            });
        }

        Ok(())
    }

    /// Unassigned request without a real slot yet (00:00-00:00 style).
    pub fn is_placeholder(&self) -> bool {
        self.room_id.is_none() && self.end_time == self.start_time
    }

    pub fn interval(&self) -> Interval {
        Interval::new(self.start_time, self.end_time)
    }

    /// Duration in minutes (zero for placeholders)
    pub fn duration_minutes(&self) -> i32 {
        self.interval().duration()
    }

    pub fn is_assigned(&self) -> bool {
        self.room_id.is_some()
    }
}

/// Split a comma-separated requirements field into trimmed tags.
pub fn parse_requirements(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Reasons a case is refused before reaching the store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("patient name is required")]
    MissingPatientName,
    #[error("procedure is required")]
    MissingProcedure,
    #[error("case date is required")]
    MissingDate,
    #[error("start time {0} is outside the day")]
    StartOutOfDay(ClockTime),
    #[error("end time {end} must be after start time {start}")]
    EndNotAfterStart { start: ClockTime, end: ClockTime },
    #[error("room {0} is not in the room catalog")]
    UnknownRoom(RoomId),
}

/// Builder for creating cases with optional fields
pub struct SurgeryBuilder {
    patient_name: Option<String>,
    patient_age: u32,
    diagnosis: String,
    procedure: Option<String>,
    surgeon: String,
    department: Department,
    date: Option<NaiveDate>,
    start_time: ClockTime,
    end_time: ClockTime,
    room_id: Option<RoomId>,
    special_requirements: Vec<String>,
    drape: Option<DrapeSelection>,
}

impl SurgeryBuilder {
    pub fn new() -> Self {
        Self {
            patient_name: None,
            patient_age: 0,
            diagnosis: String::new(),
            procedure: None,
            surgeon: String::new(),
            department: Department::default(),
            date: None,
            start_time: ClockTime::from_hm(8, 0),
            end_time: ClockTime::from_hm(9, 0),
            room_id: None,
            special_requirements: Vec::new(),
            drape: None,
        }
    }

    pub fn patient_name(mut self, name: impl Into<String>) -> Self {
        self.patient_name = Some(name.into());
        self
    }

    pub fn patient_age(mut self, age: u32) -> Self {
        self.patient_age = age;
        self
    }

    pub fn diagnosis(mut self, diagnosis: impl Into<String>) -> Self {
        self.diagnosis = diagnosis.into();
        self
    }

    pub fn procedure(mut self, procedure: impl Into<String>) -> Self {
        self.procedure = Some(procedure.into());
        self
    }

    pub fn surgeon(mut self, surgeon: impl Into<String>) -> Self {
        self.surgeon = surgeon.into();
        self
    }

    pub fn department(mut self, department: Department) -> Self {
        self.department = department;
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn times(mut self, start: ClockTime, end: ClockTime) -> Self {
        self.start_time = start;
        self.end_time = end;
        self
    }

    pub fn room(mut self, room_id: RoomId) -> Self {
        self.room_id = Some(room_id);
        self
    }

    pub fn requirement(mut self, tag: impl Into<String>) -> Self {
        self.special_requirements.push(tag.into());
        self
    }

    pub fn drape(mut self, drape: impl Into<DrapeSelection>) -> Self {
        self.drape = Some(drape.into());
        self
    }

    /// Build and validate the case
    pub fn build(self) -> Result<Surgery, ValidationError> {
        let patient_name = self.patient_name.ok_or(ValidationError::MissingPatientName)?;
        let procedure = self.procedure.ok_or(ValidationError::MissingProcedure)?;
        let date = self.date.ok_or(ValidationError::MissingDate)?;

        let surgery = Surgery {
            id: None,
            patient_name,
            patient_age: self.patient_age,
            diagnosis: self.diagnosis,
            procedure,
            surgeon: self.surgeon,
            department: self.department,
            date,
            start_time: self.start_time,
            end_time: self.end_time,
            room_id: self.room_id,
            special_requirements: self.special_requirements,
            drape: self.drape,
            is_conflicting: false,
        };

        surgery.validate()?;
        Ok(surgery)
    }
}

impl Default for SurgeryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
