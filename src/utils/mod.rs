//! Shared utility functions.
//!
//! - `date`: entry key parsing and long-form date formatting

mod date;

pub use date::{format_long_date, parse_entry_date};
