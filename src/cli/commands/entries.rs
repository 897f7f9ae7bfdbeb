//! Terminal commands for reading the diary: list, show, check.

use console::style;

use crate::config::Settings;
use crate::models::DiaryEntry;
use crate::pagination::{PageItem, Pagination};
use crate::repository::EntryStore;
use crate::utils::format_long_date;

const PREVIEW_WIDTH: usize = 72;

/// Print one listing page.
pub async fn cmd_list(settings: &Settings, page: Option<&str>) -> anyhow::Result<()> {
    let store = EntryStore::load(&settings.data_file).await?;
    let pagination = Pagination::resolve(page, store.len());

    if store.is_empty() {
        println!("{} No entries yet.", style("!").yellow());
        return Ok(());
    }

    for entry in store.page(&pagination) {
        println!(
            "{}  {}",
            style(&entry.date).dim(),
            style(&entry.title).bold()
        );
        println!("            {}", style(format_long_date(&entry.date)).dim());
        if let Some(preview) = preview(entry, PREVIEW_WIDTH) {
            println!("            {}", style(preview).italic());
        }
    }

    if pagination.has_pages() {
        println!();
        println!("  {}", format_page_range(&pagination));
    }

    Ok(())
}

/// Print a single entry.
pub async fn cmd_show(settings: &Settings, date: &str) -> anyhow::Result<()> {
    let store = EntryStore::load(&settings.data_file).await?;

    let entry = store
        .find_by_key(date)
        .ok_or_else(|| anyhow::anyhow!("No diary entry for {}", date))?;

    println!("{}", style(&entry.title).bold());
    println!("{}", style(format_long_date(&entry.date)).dim());
    for paragraph in &entry.body {
        println!();
        println!("{}", paragraph);
    }

    Ok(())
}

/// Validate the data file and summarize it.
pub async fn cmd_check(settings: &Settings) -> anyhow::Result<()> {
    let store = match EntryStore::load(&settings.data_file).await {
        Ok(store) => store,
        Err(e) => {
            eprintln!("  {} {}", style("✗").red(), e);
            return Err(e.into());
        }
    };

    println!(
        "  {} {} entries in {}",
        style("✓").green(),
        store.len(),
        settings.data_file.display()
    );

    if let Some((first, last)) = store.date_span() {
        println!("  {} Spanning {} to {}", style("✓").green(), first, last);
    }

    let pagination = Pagination::resolve(None, store.len());
    println!(
        "  {} {} listing page(s)",
        style("✓").green(),
        pagination.total_pages
    );

    if !store.is_chronological() {
        println!(
            "  {} Entries are not in chronological order; the listing shows them as stored",
            style("!").yellow()
        );
    }

    let empty: Vec<_> = store
        .list_all()
        .iter()
        .filter(|e| e.body.is_empty())
        .map(|e| e.date.as_str())
        .collect();
    if !empty.is_empty() {
        println!(
            "  {} Entries with no paragraphs: {}",
            style("!").yellow(),
            empty.join(", ")
        );
    }

    Ok(())
}

/// Opening paragraph cut to `width` characters, with `…` when shortened.
fn preview(entry: &DiaryEntry, width: usize) -> Option<String> {
    let lede = entry.lede()?.trim();
    if lede.chars().count() <= width {
        return Some(lede.to_string());
    }
    let cut: String = lede.chars().take(width.saturating_sub(1)).collect();
    Some(format!("{}…", cut.trim_end()))
}

/// Compact page range for a terminal, e.g. `1 … 4 [5] 6 … 10`.
fn format_page_range(pagination: &Pagination) -> String {
    pagination
        .range()
        .into_iter()
        .map(|item| match item {
            PageItem::Page(n) if n == pagination.current_page => format!("[{}]", n),
            PageItem::Page(n) => n.to_string(),
            PageItem::Gap => "…".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_page_range() {
        let pagination = Pagination::resolve(Some("5"), 50);
        assert_eq!(format_page_range(&pagination), "1 … 4 [5] 6 … 10");

        let pagination = Pagination::resolve(Some("2"), 12);
        assert_eq!(format_page_range(&pagination), "1 [2] 3");
    }

    #[test]
    fn test_preview() {
        let entry = DiaryEntry::new(
            "2025-07-23",
            "Quiet",
            vec!["A long first paragraph.".to_string(), "Second.".to_string()],
        );
        assert_eq!(preview(&entry, 72).as_deref(), Some("A long first paragraph."));
        assert_eq!(preview(&entry, 8).as_deref(), Some("A long…"));

        let empty = DiaryEntry::new("2025-07-22", "Blank", vec![]);
        assert_eq!(preview(&empty, 72), None);
    }

    #[tokio::test]
    async fn test_show_missing_entry_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("entries.json");
        std::fs::write(&path, r#"[{"date": "2025-07-23", "title": "One", "body": []}]"#).unwrap();
        let settings = Settings::with_data_file(path);

        assert!(cmd_show(&settings, "2025-07-23").await.is_ok());
        assert!(cmd_show(&settings, "2025-07-24").await.is_err());
        assert!(cmd_check(&settings).await.is_ok());
    }
}
