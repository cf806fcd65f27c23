//! Schedule store entry point.
//! Owns the in-memory case list and keeps the derived conflict flags current;
//! mutations live in `crud`, read paths in `queries`.

use crate::models::room::RoomCatalog;
use crate::models::settings::BoardSettings;
use crate::models::surgery::{Surgery, SurgeryId, ValidationError};
use crate::services::conflict::{conflict_flags, ConflictScan};

pub mod crud;
pub mod queries;

pub use queries::{RoomFilter, SurgeryFilter};

/// Errors raised by store operations. The store is unchanged when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    #[error("invalid case: {0}")]
    Validation(#[from] ValidationError),
    #[error("case {0} not found")]
    NotFound(SurgeryId),
    #[error("case ID is required for update")]
    MissingId,
}

/// In-memory collection of scheduled cases.
#[derive(Debug, Clone)]
pub struct ScheduleStore {
    pub(crate) surgeries: Vec<Surgery>,
    pub(crate) next_id: SurgeryId,
    pub(crate) rooms: RoomCatalog,
    pub(crate) scan: ConflictScan,
}

impl ScheduleStore {
    /// Create an empty store over a room catalog
    pub fn new(rooms: RoomCatalog, scan: ConflictScan) -> Self {
        Self {
            surgeries: Vec::new(),
            next_id: 1,
            rooms,
            scan,
        }
    }

    pub fn from_settings(settings: &BoardSettings) -> Self {
        Self::new(settings.rooms.clone(), settings.conflict_scan)
    }

    pub fn rooms(&self) -> &RoomCatalog {
        &self.rooms
    }

    pub fn conflict_scan(&self) -> ConflictScan {
        self.scan
    }

    /// Switch scan mode; flags are recomputed immediately.
    pub fn set_conflict_scan(&mut self, scan: ConflictScan) {
        if self.scan != scan {
            log::debug!("Conflict scan changed from {:?} to {:?}", self.scan, scan);
            self.scan = scan;
            self.refresh_conflicts();
        }
    }

    pub(crate) fn refresh_conflicts(&mut self) {
        let flags = conflict_flags(&self.surgeries, self.scan);
        for (surgery, flag) in self.surgeries.iter_mut().zip(flags) {
            surgery.is_conflicting = flag;
        }
    }
}

impl Default for ScheduleStore {
    fn default() -> Self {
        Self::new(RoomCatalog::default(), ConflictScan::default())
    }
}
