pub mod add;
pub mod calculator;
pub mod calendar;
pub mod del;
pub mod listing;
pub mod log;
pub mod recurrence;
pub mod window;
