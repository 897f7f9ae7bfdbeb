//! Page renderers shared by the HTTP handlers and the static export.
//!
//! Every renderer is a pure function of the site config, the entry store and
//! the resolved request parameters.

use askama::Template;

use super::template_structs::{
    AboutTemplate, EntryRow, EntryTemplate, HomeTemplate, NotFoundTemplate, PageLink, Reference,
};
use crate::config::SiteConfig;
use crate::models::DiaryEntry;
use crate::pagination::{PageItem, Pagination};
use crate::repository::EntryStore;
use crate::utils::format_long_date;

/// Title of the 404 page for an unknown entry date.
pub const ENTRY_NOT_FOUND_TITLE: &str = "Entry not found";

/// Title and message of the 404 page for any other unknown path.
pub const PAGE_NOT_FOUND_TITLE: &str = "Page not found";
pub const PAGE_NOT_FOUND_MESSAGE: &str = "The page you were looking for does not exist.";

/// How listing pages link to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkStyle {
    /// `/?page=N`, served dynamically.
    Query,
    /// `/page/N/`, one file per page in a static export.
    Path,
}

impl LinkStyle {
    pub fn page_href(&self, page: usize) -> String {
        match self {
            Self::Query => format!("/?page={}", page),
            Self::Path if page <= 1 => "/".to_string(),
            Self::Path => format!("/page/{}/", page),
        }
    }
}

const REFERENCES: &[Reference] = &[
    Reference {
        label: "Lu et al., “The AI Scientist,” arXiv:2408.06292 (2024)",
        url: "https://arxiv.org/abs/2408.06292",
    },
    Reference {
        label: "Yamada et al., “AI Scientist-v2,” arXiv:2504.08066 (2025)",
        url: "https://arxiv.org/abs/2504.08066",
    },
    Reference {
        label: "Villaescusa-Navarro et al., “Denario Project,” arXiv:2510.26887 (2025)",
        url: "https://arxiv.org/abs/2510.26887",
    },
    Reference {
        label: "Jiang et al., “BadScientist,” arXiv:2510.18003 (2025)",
        url: "https://arxiv.org/abs/2510.18003",
    },
    Reference {
        label: "Silva et al., “AI-Assisted Tools for Scientific Review Writing,” ACS Appl. Mater. Interfaces 17 (34) (2025)",
        url: "https://doi.org/10.1021/acsami.5c08837",
    },
];

/// Detail path for an entry.
pub fn entry_href(date: &str) -> String {
    format!("/{}", urlencoding::encode(date))
}

/// `"<title> — <long date>"`, used for tooltips and page titles.
pub fn entry_label(entry: &DiaryEntry) -> String {
    format!("{} — {}", entry.title, format_long_date(&entry.date))
}

fn entry_row(entry: &DiaryEntry) -> EntryRow {
    EntryRow {
        date: entry.date.clone(),
        href: entry_href(&entry.date),
        title: entry.title.clone(),
        long_date: format_long_date(&entry.date),
        tooltip: entry_label(entry),
    }
}

fn page_links(pagination: &Pagination, style: LinkStyle) -> Vec<PageLink> {
    pagination
        .range()
        .into_iter()
        .map(|item| match item {
            PageItem::Page(number) => PageLink {
                number,
                href: style.page_href(number),
                current: number == pagination.current_page,
                gap: false,
            },
            PageItem::Gap => PageLink {
                number: 0,
                href: String::new(),
                current: false,
                gap: true,
            },
        })
        .collect()
}

/// Render one listing page.
pub fn render_home(
    site: &SiteConfig,
    store: &EntryStore,
    pagination: &Pagination,
    style: LinkStyle,
) -> askama::Result<String> {
    let entries = store.page(pagination).iter().map(entry_row).collect();
    let prev = pagination.prev_page();
    let next = pagination.next_page();

    let page_title = if pagination.current_page > 1 {
        format!("{} (page {})", site.title, pagination.current_page)
    } else {
        site.title.clone()
    };

    HomeTemplate {
        site_title: &site.title,
        site_description: &site.description,
        page_title,
        entries,
        page_links: page_links(pagination, style),
        has_pagination: pagination.has_pages(),
        has_prev: prev.is_some(),
        prev_href: prev.map(|p| style.page_href(p)).unwrap_or_default(),
        has_next: next.is_some(),
        next_href: next.map(|p| style.page_href(p)).unwrap_or_default(),
    }
    .render()
}

/// Render a single entry.
pub fn render_entry(site: &SiteConfig, entry: &DiaryEntry) -> askama::Result<String> {
    EntryTemplate {
        site_title: &site.title,
        site_description: &site.description,
        page_title: entry_label(entry),
        date: &entry.date,
        title: &entry.title,
        long_date: format_long_date(&entry.date),
        paragraphs: &entry.body,
    }
    .render()
}

/// Render a not-found page.
pub fn render_not_found(
    site: &SiteConfig,
    title: &str,
    message: &str,
) -> askama::Result<String> {
    NotFoundTemplate {
        site_title: &site.title,
        site_description: &site.description,
        page_title: title,
        message,
    }
    .render()
}

/// Render the about page.
pub fn render_about(site: &SiteConfig) -> askama::Result<String> {
    AboutTemplate {
        site_title: &site.title,
        site_description: &site.description,
        page_title: format!("What is {}?", site.title),
        has_source_url: site.source_url.is_some(),
        source_url: site.source_url.as_deref().unwrap_or_default(),
        references: REFERENCES,
    }
    .render()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(count: usize) -> EntryStore {
        let entries = (0..count)
            .map(|i| {
                DiaryEntry::new(
                    format!("2025-06-{:02}", 30 - i),
                    format!("Title {}", i),
                    vec![format!("Paragraph {}", i)],
                )
            })
            .collect();
        EntryStore::from_entries(entries).unwrap()
    }

    #[test]
    fn test_link_styles() {
        assert_eq!(LinkStyle::Query.page_href(1), "/?page=1");
        assert_eq!(LinkStyle::Query.page_href(4), "/?page=4");
        assert_eq!(LinkStyle::Path.page_href(1), "/");
        assert_eq!(LinkStyle::Path.page_href(4), "/page/4/");
    }

    #[test]
    fn test_home_single_page_has_no_pagination() {
        let store = store(3);
        let pagination = Pagination::resolve(None, store.len());
        let html =
            render_home(&SiteConfig::default(), &store, &pagination, LinkStyle::Query).unwrap();

        assert!(html.contains("Dear Diary,"));
        assert!(html.contains("Title 0"));
        assert!(html.contains("Title 2"));
        assert!(html.contains("href=\"/2025-06-30\""));
        assert!(html.contains("Monday, June 30, 2025"));
        assert!(!html.contains("page-list"));
    }

    #[test]
    fn test_home_with_gaps() {
        let store = store(30);
        let pagination = Pagination::resolve(Some("3"), store.len());
        let html =
            render_home(&SiteConfig::default(), &store, &pagination, LinkStyle::Query).unwrap();

        assert!(html.contains("Title 10"));
        assert!(!html.contains("Title 9<"));
        assert!(html.contains("href=\"/?page=2\">&larr; Previous"));
        assert!(html.contains("href=\"/?page=4\">Next &rarr;"));
        assert!(html.contains("aria-current=\"page\">3</a>"));
        assert!(html.contains("page-gap"));
    }

    #[test]
    fn test_home_last_page_disables_next() {
        let store = store(12);
        let pagination = Pagination::resolve(Some("999"), store.len());
        let html =
            render_home(&SiteConfig::default(), &store, &pagination, LinkStyle::Path).unwrap();

        assert!(html.contains("Title 11"));
        assert!(html.contains("page-next disabled"));
        assert!(html.contains("href=\"/page/2/\""));
    }

    #[test]
    fn test_render_entry() {
        let entry = DiaryEntry::new(
            "2025-07-23",
            "Small <kindnesses>",
            vec!["First.".to_string(), "Second.".to_string()],
        );
        let html = render_entry(&SiteConfig::default(), &entry).unwrap();

        assert!(html.contains("Small &lt;kindnesses&gt;"));
        assert!(html.contains("Wednesday, July 23, 2025"));
        assert!(html.contains("<p>First.</p>"));
        assert!(html.contains("<p>Second.</p>"));
        assert!(html.contains("Back to entries"));
    }

    #[test]
    fn test_render_about_lists_references() {
        let html = render_about(&SiteConfig::default()).unwrap();
        assert!(html.contains("https://arxiv.org/abs/2408.06292"));
        assert!(html.contains("Check out the source code"));

        let site = SiteConfig {
            source_url: None,
            ..SiteConfig::default()
        };
        let html = render_about(&site).unwrap();
        assert!(!html.contains("Check out the source code"));
    }

    #[test]
    fn test_render_not_found() {
        let html = render_not_found(
            &SiteConfig::default(),
            ENTRY_NOT_FOUND_TITLE,
            "No entry for 1999-01-01.",
        )
        .unwrap();
        assert!(html.contains("Not Found"));
        assert!(html.contains("<title>Entry not found</title>"));
        assert!(html.contains("No entry for 1999-01-01."));

        let html = render_not_found(
            &SiteConfig::default(),
            PAGE_NOT_FOUND_TITLE,
            PAGE_NOT_FOUND_MESSAGE,
        )
        .unwrap();
        assert!(html.contains("<title>Page not found</title>"));
    }
}
