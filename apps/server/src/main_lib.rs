use std::sync::Arc;

use fonebuyers_core::{
    devices::{DeviceCatalogService, DeviceCatalogServiceTrait},
    documents::{DocumentStore, UnconfiguredStore},
    quotes::{QuoteService, QuoteServiceTrait},
};
use fonebuyers_storage_sqlite::SqliteDocumentStore;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;

pub struct AppState {
    /// Configured document store, `None` when no database is set up or it
    /// failed to open.
    pub document_store: Option<Arc<dyn DocumentStore>>,
    pub device_catalog_service: Arc<dyn DeviceCatalogServiceTrait>,
    pub quote_service: Arc<dyn QuoteServiceTrait>,
    pub database_url_set: bool,
    pub database_name_set: bool,
}

pub fn init_tracing() {
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

/// Opens the configured SQLite store. A store that cannot be opened is
/// logged and replaced by none, so the app serves fallback data instead of
/// failing to start.
pub async fn build_state(config: &Config) -> Arc<AppState> {
    let store: Option<Arc<dyn DocumentStore>> = match config.database_url.as_deref() {
        Some(url) => match SqliteDocumentStore::open(url, config.database_name.clone()) {
            Ok(store) => Some(Arc::new(store)),
            Err(e) => {
                tracing::error!("Document store unavailable, serving fallback data: {}", e);
                None
            }
        },
        None => {
            tracing::warn!("DATABASE_URL is not set, serving fallback data");
            None
        }
    };
    build_state_with_store(config, store)
}

/// Wires services around an already opened store (or none).
pub fn build_state_with_store(
    config: &Config,
    document_store: Option<Arc<dyn DocumentStore>>,
) -> Arc<AppState> {
    let service_store: Arc<dyn DocumentStore> = match &document_store {
        Some(store) => store.clone(),
        None => Arc::new(UnconfiguredStore::new("document store is not initialized")),
    };

    let device_catalog_service: Arc<dyn DeviceCatalogServiceTrait> =
        Arc::new(DeviceCatalogService::new(service_store.clone()));
    let quote_service: Arc<dyn QuoteServiceTrait> = Arc::new(QuoteService::new(
        device_catalog_service.clone(),
        service_store,
    ));

    Arc::new(AppState {
        document_store,
        device_catalog_service,
        quote_service,
        database_url_set: config.database_url.is_some(),
        database_name_set: config.database_name.is_some(),
    })
}
