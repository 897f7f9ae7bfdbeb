//! Static export: pre-render every page of the site into a directory.
//!
//! Output layout:
//!
//! ```text
//! index.html               listing page 1
//! page/<n>/index.html      listing pages 2..=total
//! <date>/index.html        one per entry
//! what/index.html          about page
//! 404.html                 not-found page
//! static/style.css
//! ```
//!
//! Listing pages link with `/page/<n>/` since static hosts ignore query strings.

use std::path::{Path, PathBuf};

use crate::config::SiteConfig;
use crate::error::{DiaryError, Result};
use crate::pagination::{total_pages, Pagination};
use crate::repository::EntryStore;
use crate::server::pages::{self, LinkStyle};
use crate::server::CSS;

/// Counts of what an export wrote.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportSummary {
    pub listing_pages: usize,
    pub entry_pages: usize,
    pub files_written: usize,
}

/// Render the whole site into `out_dir`, creating it if needed.
pub async fn export_site(
    store: &EntryStore,
    site: &SiteConfig,
    out_dir: &Path,
) -> Result<ExportSummary> {
    let mut summary = ExportSummary::default();

    let pages_total = total_pages(store.len());
    for page in 1..=pages_total {
        let pagination = Pagination::for_page(page, store.len());
        let html = pages::render_home(site, store, &pagination, LinkStyle::Path)?;
        let path = if page == 1 {
            out_dir.join("index.html")
        } else {
            out_dir.join("page").join(page.to_string()).join("index.html")
        };
        write_file(&path, &html).await?;
        summary.listing_pages += 1;
        summary.files_written += 1;
    }

    for entry in store.list_all() {
        let html = pages::render_entry(site, entry)?;
        write_file(&out_dir.join(&entry.date).join("index.html"), &html).await?;
        summary.entry_pages += 1;
        summary.files_written += 1;
    }

    let about = pages::render_about(site)?;
    write_file(&out_dir.join("what").join("index.html"), &about).await?;

    let not_found = pages::render_not_found(
        site,
        pages::PAGE_NOT_FOUND_TITLE,
        pages::PAGE_NOT_FOUND_MESSAGE,
    )?;
    write_file(&out_dir.join("404.html"), &not_found).await?;

    write_file(&out_dir.join("static").join("style.css"), CSS).await?;
    summary.files_written += 3;

    tracing::info!(
        "Exported {} listing pages and {} entries to {}",
        summary.listing_pages,
        summary.entry_pages,
        out_dir.display()
    );
    Ok(summary)
}

async fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| DiaryError::io(parent, e))?;
    }
    tokio::fs::write(path, contents)
        .await
        .map_err(|e| DiaryError::io(PathBuf::from(path), e))
}
