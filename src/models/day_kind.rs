use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Recurrence class of a special day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayKind {
    Birthday,
    Anniversary,
    #[default]
    Other,
}

impl DayKind {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            DayKind::Birthday => "birthday",
            DayKind::Anniversary => "anniversary",
            DayKind::Other => "other",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "birthday" => Some(DayKind::Birthday),
            "anniversary" => Some(DayKind::Anniversary),
            "other" => Some(DayKind::Other),
            _ => None,
        }
    }

    /// Helper: parse user input (any case, surrounding spaces ignored)
    pub fn from_input(s: &str) -> AppResult<Self> {
        Self::from_db_str(s.trim().to_lowercase().as_str())
            .ok_or_else(|| AppError::InvalidKind(s.to_string()))
    }

    /// Birthdays and anniversaries come back every year on the same month/day.
    pub fn is_yearly(&self) -> bool {
        matches!(self, DayKind::Birthday | DayKind::Anniversary)
    }

    pub fn label(&self) -> &'static str {
        match self {
            DayKind::Birthday => "Birthday",
            DayKind::Anniversary => "Anniversary",
            DayKind::Other => "Special day",
        }
    }
}
