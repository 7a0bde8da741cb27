pub mod hours;
pub mod stats;

pub use hours::compute_hours;
