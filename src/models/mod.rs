//! Data models for the diary.

mod entry;

pub use entry::DiaryEntry;
