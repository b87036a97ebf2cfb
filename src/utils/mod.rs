pub mod colors;
pub mod date;
pub mod formatting;
pub mod table;

pub use formatting::describe_kind;
