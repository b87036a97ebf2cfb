//! Month grid model for the special-days calendar.
//!
//! Each day cell carries the events stored on that literal date and the
//! yearly events whose `MM-DD` matches. The badge shown for the cell follows
//! one rule: an exact event always wins over a yearly one.

use crate::core::recurrence::{
    DayKey, MonthKey, events_by_exact_date, recurring_events_for_month,
};
use crate::models::{DayKind, SpecialDay};
use crate::utils::date::all_days_of_month;
use chrono::{Datelike, NaiveDate};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    /// Column headers in display order.
    pub fn headers(&self) -> [&'static str; 7] {
        match self {
            WeekStart::Sunday => ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"],
            WeekStart::Monday => ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"],
        }
    }

    /// Column index (0..7) of `date` in a week starting on this day.
    pub fn column_of(&self, date: &NaiveDate) -> usize {
        let wd = date.weekday();
        match self {
            WeekStart::Sunday => wd.num_days_from_sunday() as usize,
            WeekStart::Monday => wd.num_days_from_monday() as usize,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    None,
    Exact(DayKind),
    Yearly(DayKind),
}

#[derive(Debug, Clone)]
pub struct DayCell<'a> {
    pub date: NaiveDate,
    pub exact: Vec<&'a SpecialDay>,
    pub yearly: Vec<&'a SpecialDay>,
    pub badge: Badge,
}

impl DayCell<'_> {
    /// Events worth listing for this cell: the exact ones if any, otherwise
    /// the yearly ones.
    pub fn shown(&self) -> &[&SpecialDay] {
        if self.exact.is_empty() {
            &self.yearly
        } else {
            &self.exact
        }
    }
}

#[derive(Debug, Clone)]
pub struct MonthGrid<'a> {
    pub year: i32,
    pub month: u32,
    pub week_start: WeekStart,
    pub leading_blanks: usize,
    pub cells: Vec<DayCell<'a>>,
}

impl<'a> MonthGrid<'a> {
    /// Build the grid for `year`/`month` from an already fetched collection.
    /// `None` when `month` is not 1..=12.
    pub fn build(
        year: i32,
        month: u32,
        week_start: WeekStart,
        events: &'a [SpecialDay],
    ) -> Option<Self> {
        let month_key = MonthKey::new(month)?;
        let days = all_days_of_month(year, month);
        let first = days.first()?;
        let leading_blanks = week_start.column_of(first);

        let exact_index = events_by_exact_date(events);
        let mut recurring = recurring_events_for_month(events, month_key);

        let cells = days
            .iter()
            .map(|d| {
                let exact = exact_index
                    .get(&(d.year(), d.month(), d.day()))
                    .cloned()
                    .unwrap_or_default();
                let yearly = recurring.remove(&DayKey::of_date(d)).unwrap_or_default();
                let badge = match (exact.first(), yearly.first()) {
                    (Some(e), _) => Badge::Exact(e.kind),
                    (None, Some(y)) => Badge::Yearly(y.kind),
                    (None, None) => Badge::None,
                };
                DayCell {
                    date: *d,
                    exact,
                    yearly,
                    badge,
                }
            })
            .collect();

        Some(Self {
            year,
            month,
            week_start,
            leading_blanks,
            cells,
        })
    }

    /// Rows of seven slots; `None` is a blank slot before the 1st or after
    /// the last day.
    pub fn weeks(&self) -> Vec<Vec<Option<&DayCell<'a>>>> {
        let mut slots: Vec<Option<&DayCell<'a>>> = vec![None; self.leading_blanks];
        slots.extend(self.cells.iter().map(Some));
        while slots.len() % 7 != 0 {
            slots.push(None);
        }
        slots.chunks(7).map(|w| w.to_vec()).collect()
    }

    pub fn cell(&self, day: u32) -> Option<&DayCell<'a>> {
        self.cells.get(day.checked_sub(1)? as usize)
    }
}
