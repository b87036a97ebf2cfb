use super::day_kind::DayKind;
use chrono::Local;
use serde::{Deserialize, Serialize};

/// A row of the `special_days` table.
///
/// `date` stays a raw `YYYY-MM-DD` string: it is a wall-clock calendar date,
/// never an instant, and malformed values coming from the store must survive
/// loading so the calendar can skip them instead of failing the whole month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialDay {
    pub id: i64,
    pub date: String,          // ⇔ special_days.date (TEXT "YYYY-MM-DD")
    pub title: Option<String>, // ⇔ special_days.title
    pub note: Option<String>,  // ⇔ special_days.note
    pub kind: DayKind,         // ⇔ special_days.kind ('birthday' | 'anniversary' | 'other')
    pub author: Option<String>,
    pub created_at: String, // ⇔ special_days.created_at (TEXT, ISO8601)
}

impl SpecialDay {
    /// Build a not-yet-persisted special day (id = 0).
    /// Title and note are trimmed; blank values become `None`.
    pub fn new(
        date: impl Into<String>,
        title: Option<&str>,
        note: Option<&str>,
        kind: DayKind,
        author: Option<&str>,
    ) -> Self {
        Self {
            id: 0,
            date: date.into(),
            title: clean_text(title),
            note: clean_text(note),
            kind,
            author: clean_text(author),
            created_at: Local::now().to_rfc3339(),
        }
    }

    pub fn title_or_default(&self) -> &str {
        self.title.as_deref().unwrap_or("(untitled)")
    }

    pub fn author_or_default(&self) -> &str {
        self.author.as_deref().unwrap_or("")
    }
}

fn clean_text(s: Option<&str>) -> Option<String> {
    s.map(str::trim).filter(|t| !t.is_empty()).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_title_and_note_become_none() {
        let d = SpecialDay::new("2025-03-15", Some("   "), Some(" hi "), DayKind::Other, None);
        assert_eq!(d.title, None);
        assert_eq!(d.note.as_deref(), Some("hi"));
        assert_eq!(d.title_or_default(), "(untitled)");
    }
}
