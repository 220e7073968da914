//! Storage layer for the Maîtriz client
//!
//! JSON file storage with atomic writes. The month cache is the only
//! repository; credentials live in `session`.

pub mod cache;
pub mod file_io;

pub use cache::MonthCache;
pub use file_io::{read_json, write_json_atomic};
