//! Fetch window for the calendar view.
//!
//! Yearly events are stored with their original year, so showing a month
//! needs the same month across many past years. The window is a plain
//! configurable bound, not a guarantee: events older than `years_back` are
//! not seen.

use crate::utils::date::last_day_of_month;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecurrenceWindow {
    pub years_back: u32,
    pub years_forward: u32,
}

impl Default for RecurrenceWindow {
    fn default() -> Self {
        Self {
            years_back: 20,
            years_forward: 1,
        }
    }
}

impl RecurrenceWindow {
    pub fn new(years_back: u32, years_forward: u32) -> Self {
        Self {
            years_back,
            years_forward,
        }
    }

    /// Inclusive `(from, to)` date strings to fetch for the displayed month.
    pub fn bounds(&self, year: i32, month: u32) -> (String, String) {
        let back = i32::try_from(self.years_back).unwrap_or(i32::MAX);
        let forward = i32::try_from(self.years_forward).unwrap_or(i32::MAX);
        let first_year = year.saturating_sub(back);
        let last_year = year.saturating_add(forward);
        let last_day = last_day_of_month(last_year, month);
        (
            format!("{first_year:04}-{month:02}-01"),
            format!("{last_year:04}-{month:02}-{last_day:02}"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_window_spans_twenty_years_back_one_forward() {
        let w = RecurrenceWindow::default();
        assert_eq!(
            w.bounds(2025, 3),
            ("2005-03-01".to_string(), "2026-03-31".to_string())
        );
    }

    #[test]
    fn february_end_follows_the_last_year() {
        let w = RecurrenceWindow::new(5, 3);
        // 2028 is a leap year
        assert_eq!(w.bounds(2025, 2).1, "2028-02-29");
        assert_eq!(RecurrenceWindow::new(0, 0).bounds(2025, 2).1, "2025-02-28");
    }

    #[test]
    fn huge_window_saturates_instead_of_overflowing() {
        let w = RecurrenceWindow::new(u32::MAX, u32::MAX);
        let (from, to) = w.bounds(2025, 3);
        assert_eq!(from, format!("{}-03-01", 2025 - i32::MAX));
        assert_eq!(to, format!("{}-03-31", i32::MAX));
    }
}
