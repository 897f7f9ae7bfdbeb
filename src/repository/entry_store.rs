//! Read-only store over the diary data file.

use std::collections::HashMap;
use std::path::Path;

use crate::error::{DiaryError, Result};
use crate::models::DiaryEntry;
use crate::pagination::Pagination;
use crate::utils::parse_entry_date;

/// Immutable snapshot of all diary entries.
///
/// Entries keep the order of the source file; nothing is re-sorted. A
/// `date -> position` index is built once at load time.
#[derive(Debug, Default)]
pub struct EntryStore {
    entries: Vec<DiaryEntry>,
    by_date: HashMap<String, usize>,
}

impl EntryStore {
    /// Build a store, validating that every date is a unique ISO date.
    pub fn from_entries(entries: Vec<DiaryEntry>) -> Result<Self> {
        let mut by_date = HashMap::with_capacity(entries.len());

        for (index, entry) in entries.iter().enumerate() {
            if parse_entry_date(&entry.date).is_none() {
                return Err(DiaryError::InvalidDate {
                    date: entry.date.clone(),
                });
            }
            if by_date.insert(entry.date.clone(), index).is_some() {
                return Err(DiaryError::DuplicateDate(entry.date.clone()));
            }
        }

        Ok(Self { entries, by_date })
    }

    /// Parse a JSON array of entries.
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: Vec<DiaryEntry> = serde_json::from_str(json)?;
        Self::from_entries(entries)
    }

    /// Load the data file once at startup.
    pub async fn load(path: &Path) -> Result<Self> {
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| DiaryError::io(path, e))?;
        let store = Self::from_json(&contents)?;
        tracing::info!(
            "Loaded {} diary entries from {}",
            store.len(),
            path.display()
        );
        Ok(store)
    }

    /// All entries in stored order.
    pub fn list_all(&self) -> &[DiaryEntry] {
        &self.entries
    }

    /// Exact-match lookup by date key.
    pub fn find_by_key(&self, date: &str) -> Option<&DiaryEntry> {
        self.by_date.get(date).map(|&i| &self.entries[i])
    }

    /// Entries on the page described by `pagination`.
    pub fn page(&self, pagination: &Pagination) -> &[DiaryEntry] {
        let range = pagination.item_range();
        let end = range.end.min(self.entries.len());
        let start = range.start.min(end);
        &self.entries[start..end]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Earliest and latest date keys, regardless of stored order.
    pub fn date_span(&self) -> Option<(&str, &str)> {
        let first = self.entries.iter().map(|e| e.date.as_str()).min()?;
        let last = self.entries.iter().map(|e| e.date.as_str()).max()?;
        Some((first, last))
    }

    /// Whether stored order is chronological, either newest-first or oldest-first.
    pub fn is_chronological(&self) -> bool {
        let dates: Vec<&str> = self.entries.iter().map(|e| e.date.as_str()).collect();
        dates.windows(2).all(|w| w[0] > w[1]) || dates.windows(2).all(|w| w[0] < w[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(date: &str, title: &str) -> DiaryEntry {
        DiaryEntry::new(date, title, vec![format!("{} body", title)])
    }

    fn sample_store(count: usize) -> EntryStore {
        let entries = (0..count)
            .map(|i| entry(&format!("2025-07-{:02}", 28 - i), &format!("Entry {}", i)))
            .collect();
        EntryStore::from_entries(entries).unwrap()
    }

    #[test]
    fn test_find_by_key() {
        let store = EntryStore::from_entries(vec![
            entry("2025-07-23", "Connection"),
            entry("2025-07-22", "Stillness"),
        ])
        .unwrap();

        let found = store.find_by_key("2025-07-23").unwrap();
        assert_eq!(found.title, "Connection");
        assert!(store.find_by_key("2025-07-24").is_none());
        assert!(store.find_by_key("2025-07-23 ").is_none());
    }

    #[test]
    fn test_list_all_keeps_source_order() {
        let store = EntryStore::from_entries(vec![
            entry("2025-07-20", "a"),
            entry("2025-07-23", "b"),
            entry("2025-07-21", "c"),
        ])
        .unwrap();

        let dates: Vec<_> = store.list_all().iter().map(|e| e.date.as_str()).collect();
        assert_eq!(dates, vec!["2025-07-20", "2025-07-23", "2025-07-21"]);
        assert!(!store.is_chronological());
        assert_eq!(store.date_span(), Some(("2025-07-20", "2025-07-23")));
    }

    #[test]
    fn test_rejects_duplicate_dates() {
        let result = EntryStore::from_entries(vec![
            entry("2025-07-23", "a"),
            entry("2025-07-23", "b"),
        ]);
        assert!(matches!(result, Err(DiaryError::DuplicateDate(d)) if d == "2025-07-23"));
    }

    #[test]
    fn test_rejects_invalid_dates() {
        let result = EntryStore::from_entries(vec![entry("July 23, 2025", "a")]);
        assert!(matches!(result, Err(DiaryError::InvalidDate { .. })));
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            {"date": "2025-07-23", "title": "One", "body": ["p1", "p2"]},
            {"date": "2025-07-22", "title": "Two", "body": []}
        ]"#;
        let store = EntryStore::from_json(json).unwrap();
        assert_eq!(store.len(), 2);
        assert!(store.is_chronological());
        assert_eq!(store.find_by_key("2025-07-23").unwrap().body.len(), 2);

        assert!(matches!(
            EntryStore::from_json("{\"date\": 1}"),
            Err(DiaryError::Json(_))
        ));
    }

    #[test]
    fn test_page_slices() {
        let store = sample_store(12);

        let first = store.page(&Pagination::resolve(None, store.len()));
        assert_eq!(first.len(), 5);
        assert_eq!(first[0].title, "Entry 0");

        let last = store.page(&Pagination::resolve(Some("999"), store.len()));
        assert_eq!(last.len(), 2);
        assert_eq!(last[0].title, "Entry 10");
    }

    #[test]
    fn test_empty_store() {
        let store = EntryStore::default();
        assert!(store.is_empty());
        assert!(store.page(&Pagination::resolve(None, 0)).is_empty());
        assert_eq!(store.date_span(), None);
        assert!(store.is_chronological());
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = EntryStore::load(&dir.path().join("missing.json")).await;
        assert!(matches!(result, Err(DiaryError::Io { .. })));
    }

    #[tokio::test]
    async fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("entries.json");
        std::fs::write(
            &path,
            r#"[{"date": "2025-07-23", "title": "One", "body": ["p"]}]"#,
        )
        .unwrap();

        let store = EntryStore::load(&path).await.unwrap();
        assert_eq!(store.len(), 1);
    }
}
