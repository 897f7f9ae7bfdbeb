//! Static export command.

use std::path::Path;

use console::style;

use crate::config::Settings;
use crate::export::export_site;
use crate::repository::EntryStore;

/// Render the whole site into `out_dir`.
pub async fn cmd_export(settings: &Settings, out_dir: &Path) -> anyhow::Result<()> {
    let store = EntryStore::load(&settings.data_file).await?;

    println!(
        "{} Exporting {} entries to {}",
        style("→").cyan(),
        store.len(),
        out_dir.display()
    );

    let summary = export_site(&store, &settings.site, out_dir).await?;

    println!(
        "  {} {} listing page(s), {} entry page(s), {} files",
        style("✓").green(),
        summary.listing_pages,
        summary.entry_pages,
        summary.files_written
    );

    Ok(())
}
