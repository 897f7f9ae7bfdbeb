//! Humanity's Diary: a collective diary of dated entries.
//!
//! Entries come from a static JSON file loaded once into an immutable
//! [`repository::EntryStore`]. The web server renders a paginated listing and
//! one page per entry; the same renderers drive the static export.

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod server;
pub mod utils;

pub use error::{DiaryError, Result};
