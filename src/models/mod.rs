pub mod day_kind;
pub mod elapsed;
pub mod special_day;

pub use day_kind::DayKind;
pub use elapsed::ElapsedBreakdown;
pub use special_day::SpecialDay;
