//! HTTP request handlers for the web server.

mod about;
mod api;
mod api_types;
mod entries;
mod helpers;
mod home;
mod static_files;

// Re-export handlers for use by the router
pub use about::about_page;
pub use api::{api_entries, api_entry};
pub use entries::{entry_detail, not_found};
pub use home::{home, home_page};
pub use static_files::serve_css;
