pub mod date;
pub mod formatting;
pub mod table;
pub mod time;

pub use formatting::money;
pub use formatting::round2;
