//! Terminal output formatting

pub mod month;

pub use month::format_month;
