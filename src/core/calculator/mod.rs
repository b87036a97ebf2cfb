pub mod elapsed;

pub use elapsed::compute_elapsed;
