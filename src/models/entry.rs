//! Diary entry model.

use serde::{Deserialize, Serialize};

/// A single dated diary record.
///
/// `date` is the ISO `yyyy-mm-dd` key; it is unique within a store and sorts
/// lexicographically in chronological order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiaryEntry {
    pub date: String,
    pub title: String,
    #[serde(default)]
    pub body: Vec<String>,
}

impl DiaryEntry {
    pub fn new(date: impl Into<String>, title: impl Into<String>, body: Vec<String>) -> Self {
        Self {
            date: date.into(),
            title: title.into(),
            body,
        }
    }

    /// First paragraph, used as a preview in terminal listings.
    pub fn lede(&self) -> Option<&str> {
        self.body.first().map(|s| s.as_str())
    }
}
