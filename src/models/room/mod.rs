//! Operating room catalog.
//!
//! Rooms are the resources cases are scheduled into. The catalog is ordered:
//! row `n` of the Gantt board shows the room at index `n`.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub type RoomId = u32;

/// A single operating room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatingRoom {
    pub id: RoomId,
    /// Display name shown in the room label column
    pub name: String,
    /// Hex background color for the room badge (e.g. "#0284C7")
    pub color: String,
    /// Hex text color drawn on top of `color`
    pub text_color: String,
}

impl OperatingRoom {
    pub fn new(id: RoomId, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            color: color.into(),
            text_color: "#FFFFFF".to_string(),
        }
    }
}

/// Validation errors for a room catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("room catalog is empty")]
    Empty,
    #[error("room id {0} appears more than once")]
    DuplicateId(RoomId),
    #[error("room {0} has an empty name")]
    EmptyName(RoomId),
    #[error("room {0} has an invalid color (use hex like #0284C7)")]
    InvalidColor(RoomId),
}

/// Ordered, read-only list of operating rooms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomCatalog {
    rooms: Vec<OperatingRoom>,
}

impl RoomCatalog {
    pub fn new(rooms: Vec<OperatingRoom>) -> Result<Self, CatalogError> {
        let catalog = Self { rooms };
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.rooms.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen = HashSet::new();
        for room in &self.rooms {
            if !seen.insert(room.id) {
                return Err(CatalogError::DuplicateId(room.id));
            }
            if room.name.trim().is_empty() {
                return Err(CatalogError::EmptyName(room.id));
            }
            if !is_valid_hex_color(&room.color) || !is_valid_hex_color(&room.text_color) {
                return Err(CatalogError::InvalidColor(room.id));
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &OperatingRoom> {
        self.rooms.iter()
    }

    pub fn get(&self, id: RoomId) -> Option<&OperatingRoom> {
        self.rooms.iter().find(|room| room.id == id)
    }

    pub fn contains(&self, id: RoomId) -> bool {
        self.get(id).is_some()
    }

    /// Room shown on the given board row. Negative or too-large rows have none.
    pub fn by_index(&self, row: i64) -> Option<&OperatingRoom> {
        usize::try_from(row).ok().and_then(|index| self.rooms.get(index))
    }

    pub fn index_of(&self, id: RoomId) -> Option<usize> {
        self.rooms.iter().position(|room| room.id == id)
    }
}

impl Default for RoomCatalog {
    fn default() -> Self {
        Self {
            rooms: default_rooms(),
        }
    }
}

impl<'a> IntoIterator for &'a RoomCatalog {
    type Item = &'a OperatingRoom;
    type IntoIter = std::slice::Iter<'a, OperatingRoom>;

    fn into_iter(self) -> Self::IntoIter {
        self.rooms.iter()
    }
}

/// The ten rooms of the default theatre suite.
pub fn default_rooms() -> Vec<OperatingRoom> {
    const COLORS: [&str; 10] = [
        "#0284C7", "#4F46E5", "#7C3AED", "#C026D3", "#E11D48", "#D97706", "#65A30D", "#059669",
        "#0D9488", "#0891B2",
    ];
    COLORS
        .iter()
        .zip(1..)
        .map(|(color, id)| OperatingRoom::new(id, format!("Phòng Mổ {}", id), *color))
        .collect()
}

fn is_valid_hex_color(color: &str) -> bool {
    let color = color.trim();
    let Some(hex) = color.strip_prefix('#') else {
        return false;
    };
    matches!(hex.len(), 3 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit())
}
