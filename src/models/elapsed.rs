use chrono::{DateTime, Duration, Months, TimeZone};
use serde::Serialize;

/// Calendar-aware split of the time elapsed between two instants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ElapsedBreakdown {
    pub years: u32,
    pub months: u32,
    pub weeks: u32,
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl ElapsedBreakdown {
    /// Label/value pairs in display order.
    pub fn labeled(&self) -> [(&'static str, u32); 7] {
        [
            ("years", self.years),
            ("months", self.months),
            ("weeks", self.weeks),
            ("days", self.days),
            ("hours", self.hours),
            ("minutes", self.minutes),
            ("seconds", self.seconds),
        ]
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// Advance `start` by this breakdown: one calendar jump of
    /// `12 * years + months` (clamped to the end of shorter months), then the
    /// fixed-size remainder. Returns `None` only when the result leaves
    /// chrono's range.
    pub fn apply_to<Tz: TimeZone>(&self, start: &DateTime<Tz>) -> Option<DateTime<Tz>> {
        let total_months = self.years.checked_mul(12)?.checked_add(self.months)?;
        let after_months = start
            .clone()
            .checked_add_months(Months::new(total_months))?;
        let rest = Duration::try_weeks(self.weeks as i64)?
            + Duration::days(self.days as i64)
            + Duration::hours(self.hours as i64)
            + Duration::minutes(self.minutes as i64)
            + Duration::seconds(self.seconds as i64);
        after_months.checked_add_signed(rest)
    }
}
