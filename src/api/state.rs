//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::{Database, Notifier};
use crate::services::Services;

/// Application state shared by every handler.
#[derive(Clone)]
pub struct AppState {
    /// All application services behind trait objects
    pub services: Services,
    /// Database connection, used by the health check
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state from a connected database and config.
    pub fn from_config(database: Arc<Database>, config: Config) -> Self {
        let notifier = Notifier::new(config.notif_webhook_url.clone());
        let services = Services::build(database.get_connection(), config, notifier);

        Self { services, database }
    }

    /// Create application state with manually injected services (tests).
    pub fn new(services: Services, database: Arc<Database>) -> Self {
        Self { services, database }
    }
}
