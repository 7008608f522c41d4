//! Cockpit JSON API
//!
//! The HTTP surface behind the dashboard: auth endpoints over the session
//! cell, data-source monitoring endpoints over mock fixtures, manual
//! intelligence intake, and the trigger panel's filtered views and CSV
//! export. All responses use the `{success, data}` / `{success, error}`
//! envelope.

pub mod error;
pub mod fixtures;
pub mod handlers;
pub mod models;
pub mod server;

pub use error::ApiError;
pub use server::{ApiConfig, ApiServer};

use std::sync::Arc;

use cockpit_auth::SessionStore;
use cockpit_core::{TriggerStore, UserDirectory};

/// Shared application state for the API server
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<SessionStore>,
    pub directory: Arc<dyn UserDirectory>,
    pub triggers: Arc<dyn TriggerStore>,
    pub config: ApiConfig,
}

impl AppState {
    /// State over the seeded directory and fixture trigger book.
    pub fn seeded(config: ApiConfig) -> Self {
        Self {
            sessions: Arc::new(SessionStore::new()),
            directory: Arc::new(cockpit_auth::StaticUserDirectory::seeded()),
            triggers: Arc::new(fixtures::InMemoryTriggerStore::seeded()),
            config,
        }
    }
}
