// Settings module
// Board-wide configuration read once at startup

use serde::{Deserialize, Serialize};

use crate::models::room::RoomCatalog;
use crate::services::conflict::ConflictScan;

/// Portion of the day shown on the Gantt board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeScale {
    #[default]
    All,
    Morning,
    Afternoon,
}

impl TimeScale {
    pub const ALL: [TimeScale; 3] = [TimeScale::Morning, TimeScale::Afternoon, TimeScale::All];

    pub fn label(&self) -> &'static str {
        match self {
            TimeScale::Morning => "Sáng",
            TimeScale::Afternoon => "Chiều",
            TimeScale::All => "Cả ngày",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardSettings {
    pub time_scale: TimeScale,
    pub conflict_scan: ConflictScan,
    pub rooms: RoomCatalog,
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            time_scale: TimeScale::All,
            conflict_scan: ConflictScan::default(),
            rooms: RoomCatalog::default(),
        }
    }
}
