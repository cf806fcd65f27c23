//! Drape (surgical supply) types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Standard drape kinds stocked per room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrapeType {
    Medium,
    Major,
    Fenestrated,
}

impl DrapeType {
    /// Column order of the drape usage table.
    pub const ALL: [DrapeType; 3] = [DrapeType::Medium, DrapeType::Major, DrapeType::Fenestrated];

    pub fn label(&self) -> &'static str {
        match self {
            DrapeType::Medium => "Trung phẫu",
            DrapeType::Major => "Đại phẫu",
            DrapeType::Fenestrated => "Săng lổ",
        }
    }
}

impl fmt::Display for DrapeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The drape chosen for a case: a stocked type, or free text for anything else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrapeSelection {
    Standard(DrapeType),
    /// "Other" sentinel; the string is the user's qualifier and may be empty
    Other(String),
}

impl DrapeSelection {
    pub const OTHER_LABEL: &'static str = "Khác";

    pub fn other(qualifier: impl Into<String>) -> Self {
        DrapeSelection::Other(qualifier.into())
    }

    /// Qualifier of an "other" drape, if one was written down.
    pub fn other_qualifier(&self) -> Option<&str> {
        match self {
            DrapeSelection::Other(text) if !text.trim().is_empty() => Some(text.trim()),
            _ => None,
        }
    }
}

impl From<DrapeType> for DrapeSelection {
    fn from(kind: DrapeType) -> Self {
        DrapeSelection::Standard(kind)
    }
}

impl fmt::Display for DrapeSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrapeSelection::Standard(kind) => write!(f, "{}", kind),
            DrapeSelection::Other(text) if text.trim().is_empty() => f.write_str(Self::OTHER_LABEL),
            DrapeSelection::Other(text) => write!(f, "{} ({})", Self::OTHER_LABEL, text.trim()),
        }
    }
}
