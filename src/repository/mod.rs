//! Read-only data access.
//!
//! The diary has no database: entries come from a static JSON file loaded
//! once into an [`EntryStore`].

mod entry_store;

pub use entry_store::EntryStore;
