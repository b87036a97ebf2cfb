//! Client-side search / filter / sort / pagination over a fetched set of
//! special days.

use crate::models::{DayKind, SpecialDay};
use clap::ValueEnum;
use serde::Serialize;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SortBy {
    #[default]
    Date,
    Title,
    Author,
    Kind,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    pub search: Option<String>,
    pub kind: Option<DayKind>,
    pub author: Option<String>,
    /// Inclusive `YYYY-MM-DD` lower bound.
    pub from: Option<String>,
    /// Inclusive `YYYY-MM-DD` upper bound.
    pub to: Option<String>,
    pub sort_by: SortBy,
    pub order: SortOrder,
    /// 1-based; clamped into `1..=total_pages`.
    pub page: usize,
    pub page_size: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct Page<'a> {
    pub items: Vec<&'a SpecialDay>,
    pub page: usize,
    pub total_pages: usize,
    pub total: usize,
}

impl ListQuery {
    pub fn matches(&self, d: &SpecialDay) -> bool {
        if let Some(q) = self.search.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
            let q = q.to_lowercase();
            let hit = [&d.title, &d.note, &d.author]
                .iter()
                .any(|f| f.as_deref().is_some_and(|v| v.to_lowercase().contains(&q)));
            if !hit {
                return false;
            }
        }
        if self.kind.is_some_and(|k| k != d.kind) {
            return false;
        }
        if let Some(a) = &self.author
            && d.author.as_deref() != Some(a.as_str())
        {
            return false;
        }
        if let Some(from) = &self.from
            && d.date.as_str() < from.as_str()
        {
            return false;
        }
        if let Some(to) = &self.to
            && d.date.as_str() > to.as_str()
        {
            return false;
        }
        true
    }

    fn compare(&self, a: &SpecialDay, b: &SpecialDay) -> Ordering {
        let ord = match self.sort_by {
            SortBy::Date => a.date.cmp(&b.date),
            SortBy::Title => lower(&a.title).cmp(&lower(&b.title)),
            SortBy::Author => lower(&a.author).cmp(&lower(&b.author)),
            SortBy::Kind => a.kind.to_db_str().cmp(b.kind.to_db_str()),
        };
        match self.order {
            SortOrder::Asc => ord,
            SortOrder::Desc => ord.reverse(),
        }
    }

    /// Filter, stable-sort and cut out the requested page.
    pub fn apply<'a>(&self, items: &'a [SpecialDay]) -> Page<'a> {
        let mut filtered: Vec<&SpecialDay> = items.iter().filter(|d| self.matches(d)).collect();
        filtered.sort_by(|a, b| self.compare(a, b));

        let page_size = self.page_size.max(1);
        let total = filtered.len();
        let total_pages = total.div_ceil(page_size).max(1);
        let page = self.page.clamp(1, total_pages);

        let items = filtered
            .into_iter()
            .skip((page - 1) * page_size)
            .take(page_size)
            .collect();

        Page {
            items,
            page,
            total_pages,
            total,
        }
    }
}

fn lower(s: &Option<String>) -> String {
    s.as_deref().unwrap_or("").to_lowercase()
}
