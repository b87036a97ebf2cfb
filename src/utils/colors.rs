//! ANSI escapes shared by the table, calendar and info views.

use crate::models::DayKind;

pub const RESET: &str = "\x1b[0m";
pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const MAGENTA: &str = "\x1b[35m";
pub const CYAN: &str = "\x1b[36m";

/// Birthdays magenta, anniversaries yellow, one-off days blue.
pub fn kind_color(kind: DayKind) -> &'static str {
    match kind {
        DayKind::Birthday => MAGENTA,
        DayKind::Anniversary => YELLOW,
        DayKind::Other => BLUE,
    }
}

pub fn paint(color: &str, s: &str) -> String {
    format!("{color}{s}{RESET}")
}
