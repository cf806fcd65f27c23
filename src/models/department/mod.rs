//! Surgical departments.
//!
//! Every case belongs to exactly one department. The set is fixed; the
//! display name and colors are presentation metadata for list headers.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Department {
    Orthopedics,
    #[default]
    General,
    Neuro,
    Cardio,
    Urology,
}

impl Department {
    /// Catalog order used by the by-department view.
    pub const ALL: [Department; 5] = [
        Department::Orthopedics,
        Department::General,
        Department::Neuro,
        Department::Cardio,
        Department::Urology,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Department::Orthopedics => "Chấn Thương Chỉnh Hình",
            Department::General => "Tổng Quát",
            Department::Neuro => "Ngoại Thần Kinh",
            Department::Cardio => "Tim Mạch",
            Department::Urology => "Tiết Niệu",
        }
    }

    /// Hex background color for badges and group headers
    pub fn color(&self) -> &'static str {
        match self {
            Department::Orthopedics => "#3B82F6",
            Department::General => "#EAB308",
            Department::Neuro => "#A855F7",
            Department::Cardio => "#EF4444",
            Department::Urology => "#22C55E",
        }
    }

    pub fn text_color(&self) -> &'static str {
        "#FFFFFF"
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
