//! Askama template structs for the web interface.
//!
//! Each struct corresponds to an HTML template in the templates/ directory.
//! Askama provides compile-time verification that templates are valid.

use askama::Template;

/// Listing row for one entry.
pub struct EntryRow {
    pub date: String,
    pub href: String,
    pub title: String,
    pub long_date: String,
    pub tooltip: String,
}

/// One slot in the pagination control; `gap` slots have no number or link.
pub struct PageLink {
    pub number: usize,
    pub href: String,
    pub current: bool,
    pub gap: bool,
}

/// Entry in the about page reference list.
pub struct Reference {
    pub label: &'static str,
    pub url: &'static str,
}

/// Home page: intro letter, one page of entries, pagination.
#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate<'a> {
    pub site_title: &'a str,
    pub site_description: &'a str,
    pub page_title: String,
    pub entries: Vec<EntryRow>,
    pub page_links: Vec<PageLink>,
    pub has_pagination: bool,
    pub has_prev: bool,
    pub prev_href: String,
    pub has_next: bool,
    pub next_href: String,
}

/// Single entry page.
#[derive(Template)]
#[template(path = "entry.html")]
pub struct EntryTemplate<'a> {
    pub site_title: &'a str,
    pub site_description: &'a str,
    pub page_title: String,
    pub date: &'a str,
    pub title: &'a str,
    pub long_date: String,
    pub paragraphs: &'a [String],
}

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate<'a> {
    pub site_title: &'a str,
    pub site_description: &'a str,
    pub page_title: &'a str,
    pub message: &'a str,
}

/// "What is this?" page.
#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutTemplate<'a> {
    pub site_title: &'a str,
    pub site_description: &'a str,
    pub page_title: String,
    pub has_source_url: bool,
    pub source_url: &'a str,
    pub references: &'a [Reference],
}
