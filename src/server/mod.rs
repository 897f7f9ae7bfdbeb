//! Web server for reading the diary.
//!
//! Serves:
//! - The paginated listing with the intro letter (`/`, `/page/:page`)
//! - One page per entry (`/:date`)
//! - The about page (`/what`)
//! - A read-only JSON API (`/api/entries`)

mod assets;
mod handlers;
pub mod pages;
mod routes;
mod template_structs;

pub use assets::CSS;
pub use routes::create_router;

use std::net::SocketAddr;
use std::sync::Arc;

use crate::config::{Settings, SiteConfig};
use crate::repository::EntryStore;

/// Shared state for the web server. Immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<EntryStore>,
    pub site: Arc<SiteConfig>,
}

impl AppState {
    pub fn new(store: EntryStore, site: SiteConfig) -> Self {
        Self {
            store: Arc::new(store),
            site: Arc::new(site),
        }
    }

    /// Load the entries file named in settings.
    pub async fn load(settings: &Settings) -> anyhow::Result<Self> {
        let store = EntryStore::load(&settings.data_file).await?;
        Ok(Self::new(store, settings.site.clone()))
    }
}

/// Start the web server.
pub async fn serve(settings: &Settings, host: &str, port: u16) -> anyhow::Result<()> {
    let state = AppState::load(settings).await?;
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    tracing::info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
