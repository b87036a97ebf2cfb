//! Formatting utilities used for CLI and export outputs.

use crate::core::calendar::Badge;
use crate::models::{DayKind, ElapsedBreakdown};
use crate::utils::colors::{GREY, kind_color, paint};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Terminal columns taken by `s` (wide emoji count 2, combining marks 0).
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{}{}", s, " ".repeat(width.saturating_sub(display_width(s))))
}

/// Cut `s` to at most `max` display columns, marking the cut with "…".
pub fn truncate(s: &str, max: usize) -> String {
    if display_width(s) <= max {
        return s.to_string();
    }
    let budget = max.saturating_sub(1);
    let mut used = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

/// "1 year" / "3 years"
pub fn plural(n: u32, unit: &str) -> String {
    let unit = unit.strip_suffix('s').unwrap_or(unit);
    if n == 1 {
        format!("{n} {unit}")
    } else {
        format!("{n} {unit}s")
    }
}

/// Seven lines, one per field, as the together timer shows them.
pub fn elapsed_lines(b: &ElapsedBreakdown) -> Vec<String> {
    b.labeled()
        .iter()
        .map(|(label, value)| format!("{value} {label}"))
        .collect()
}

/// One-line compact form: "1y 2mo 0w 3d 04:05:06".
pub fn elapsed_compact(b: &ElapsedBreakdown) -> String {
    format!(
        "{}y {}mo {}w {}d {:02}:{:02}:{:02}",
        b.years, b.months, b.weeks, b.days, b.hours, b.minutes, b.seconds
    )
}

/// Human label and ANSI color for a kind.
pub fn describe_kind(kind: DayKind) -> (&'static str, &'static str) {
    (kind.label(), kind_color(kind))
}

/// Marker printed after the day number in the calendar grid.
pub fn badge_marker(badge: Badge) -> String {
    match badge {
        Badge::None => " ".to_string(),
        Badge::Exact(kind) => paint(kind_color(kind), "*"),
        Badge::Yearly(kind) => paint(kind_color(kind), "♥"),
    }
}

pub fn dim(s: &str) -> String {
    paint(GREY, s)
}
