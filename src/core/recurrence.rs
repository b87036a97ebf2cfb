//! Yearly recurrence matching for special days.
//!
//! Dates here are wall-clock calendar dates stored as `YYYY-MM-DD` strings.
//! They are only ever split on `-`, never turned into instants, so no
//! timezone can shift a birthday onto the neighbouring day.

use crate::models::SpecialDay;
use chrono::{Datelike, NaiveDate};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Month number 1..=12 used to query recurring events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey(u32);

impl MonthKey {
    pub fn new(month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self(month))
    }

    /// Accepts "3" as well as "03".
    pub fn parse(s: &str) -> Option<Self> {
        s.trim().parse::<u32>().ok().and_then(Self::new)
    }

    pub fn number(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

/// `MM-DD` key correlating a yearly event with any year's calendar cell.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayKey(String);

impl DayKey {
    pub fn new(month: u32, day: u32) -> Self {
        Self(format!("{month:02}-{day:02}"))
    }

    pub fn of_date(date: &NaiveDate) -> Self {
        Self::new(date.month(), date.day())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Split a stored calendar date into `(year, month, day)` by plain string
/// splitting. `None` unless there are exactly three numeric parts.
/// Day-of-month is not range-checked.
pub fn split_calendar_date(date: &str) -> Option<(i32, u32, u32)> {
    let mut parts = date.trim().split('-');
    let year = parts.next()?.parse::<i32>().ok()?;
    let month = parts.next()?.parse::<u32>().ok()?;
    let day = parts.next()?.parse::<u32>().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((year, month, day))
}

/// Birthdays and anniversaries whose month matches `target` in any year,
/// grouped by `MM-DD`. Within a key, events keep their input order.
///
/// One-time (`other`) events never appear here; events with an unparseable
/// date are skipped.
pub fn recurring_events_for_month(
    events: &[SpecialDay],
    target: MonthKey,
) -> BTreeMap<DayKey, Vec<&SpecialDay>> {
    let mut out: BTreeMap<DayKey, Vec<&SpecialDay>> = BTreeMap::new();

    for ev in events.iter().filter(|e| e.kind.is_yearly()) {
        let Some((_year, month, day)) = split_calendar_date(&ev.date) else {
            continue;
        };
        if month == target.number() {
            out.entry(DayKey::new(month, day)).or_default().push(ev);
        }
    }

    out
}

/// Exact-date index keyed `(year, month, day)`, the counterpart the calendar
/// consults before showing a yearly badge. Dates go through
/// `split_calendar_date` like the yearly path, so `1999-3-5` and
/// `1999-03-05` land on the same key; malformed dates are skipped.
pub fn events_by_exact_date(events: &[SpecialDay]) -> HashMap<(i32, u32, u32), Vec<&SpecialDay>> {
    let mut out: HashMap<(i32, u32, u32), Vec<&SpecialDay>> = HashMap::new();
    for ev in events {
        if let Some(key) = split_calendar_date(&ev.date) {
            out.entry(key).or_default().push(ev);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DayKind;

    fn ev(id: i64, date: &str, kind: DayKind) -> SpecialDay {
        let mut d = SpecialDay::new(date, Some("t"), None, kind, None);
        d.id = id;
        d
    }

    fn march() -> MonthKey {
        MonthKey::new(3).expect("march")
    }

    #[test]
    fn birthday_matches_regardless_of_year() {
        let events = vec![ev(1, "1995-03-15", DayKind::Birthday)];
        let got = recurring_events_for_month(&events, march());
        let ids: Vec<i64> = got[&DayKey::new(3, 15)].iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn one_time_events_are_never_recurring() {
        let events = vec![ev(1, "2024-03-15", DayKind::Other)];
        assert!(recurring_events_for_month(&events, march()).is_empty());
    }

    #[test]
    fn other_months_are_excluded() {
        let events = vec![ev(1, "1995-04-15", DayKind::Birthday)];
        assert!(recurring_events_for_month(&events, march()).is_empty());
    }

    #[test]
    fn malformed_dates_are_skipped_without_hiding_valid_ones() {
        let events = vec![
            ev(1, "not-a-date", DayKind::Birthday),
            ev(2, "", DayKind::Anniversary),
            ev(3, "2020-03", DayKind::Birthday),
            ev(4, "2020-03-01-09", DayKind::Birthday),
            ev(5, "2019-03-08", DayKind::Anniversary),
        ];
        let got = recurring_events_for_month(&events, march());
        assert_eq!(got.len(), 1);
        assert_eq!(got[&DayKey::new(3, 8)][0].id, 5);
    }

    #[test]
    fn same_day_events_keep_insertion_order() {
        let events = vec![
            ev(7, "1990-03-15", DayKind::Birthday),
            ev(2, "2001-03-15", DayKind::Anniversary),
            ev(9, "1985-03-15", DayKind::Birthday),
        ];
        let got = recurring_events_for_month(&events, march());
        let ids: Vec<i64> = got[&DayKey::new(3, 15)].iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![7, 2, 9]);
    }

    #[test]
    fn leap_day_surfaces_under_02_29() {
        let events = vec![ev(1, "2000-02-29", DayKind::Birthday)];
        let feb = MonthKey::parse("02").expect("feb");
        let got = recurring_events_for_month(&events, feb);
        assert!(got.contains_key(&DayKey::new(2, 29)));
        assert_eq!(DayKey::new(2, 29).as_str(), "02-29");
    }

    #[test]
    fn day_key_is_zero_padded() {
        let events = vec![ev(1, "1999-3-5", DayKind::Birthday)];
        let got = recurring_events_for_month(&events, march());
        assert!(got.contains_key(&DayKey::new(3, 5)));
        assert_eq!(DayKey::new(3, 5).to_string(), "03-05");
    }

    #[test]
    fn month_key_bounds() {
        assert!(MonthKey::new(0).is_none());
        assert!(MonthKey::new(13).is_none());
        assert_eq!(MonthKey::parse("3").map(|m| m.to_string()), Some("03".into()));
    }

    #[test]
    fn exact_index_groups_by_calendar_date() {
        let events = vec![
            ev(1, "2024-03-15", DayKind::Other),
            ev(2, "2024-03-15", DayKind::Birthday),
            ev(3, "2023-03-15", DayKind::Other),
            ev(4, "bogus", DayKind::Other),
        ];
        let idx = events_by_exact_date(&events);
        assert_eq!(idx[&(2024, 3, 15)].len(), 2);
        assert_eq!(idx[&(2023, 3, 15)][0].id, 3);
        assert_eq!(idx.len(), 2);
    }

    #[test]
    fn exact_index_ignores_zero_padding() {
        let events = vec![
            ev(1, "1999-3-5", DayKind::Other),
            ev(2, "1999-03-05", DayKind::Other),
        ];
        let idx = events_by_exact_date(&events);
        let ids: Vec<i64> = idx[&(1999, 3, 5)].iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }
}
