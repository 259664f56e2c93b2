use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, warn};

use super::pricing::compute_offer;
use super::quotes_model::{QuoteRecord, QuoteRequest, QuoteResponse};
use super::quotes_traits::QuoteServiceTrait;
use crate::constants::QUOTE_COLLECTION;
use crate::devices::DeviceCatalogServiceTrait;
use crate::documents::DocumentStore;
use crate::errors::{Error, Result};

pub struct QuoteService {
    catalog: Arc<dyn DeviceCatalogServiceTrait>,
    store: Arc<dyn DocumentStore>,
}

impl QuoteService {
    pub fn new(
        catalog: Arc<dyn DeviceCatalogServiceTrait>,
        store: Arc<dyn DocumentStore>,
    ) -> Self {
        QuoteService { catalog, store }
    }

    /// Appends the quote to the `quote` collection. Failures are logged and dropped.
    async fn record_quote(&self, record: QuoteRecord) {
        let result = match record.to_document() {
            Ok(doc) => self.store.insert_document(QUOTE_COLLECTION, doc).await,
            Err(e) => Err(e),
        };
        if let Err(e) = result {
            warn!(
                "Failed to record quote for {} {}: {}",
                record.brand, record.model, e
            );
        }
    }
}

#[async_trait]
impl QuoteServiceTrait for QuoteService {
    async fn get_quote(&self, request: QuoteRequest) -> Result<QuoteResponse> {
        let devices = self.catalog.list_devices().await;
        let device = devices
            .iter()
            .find(|d| d.matches(&request.brand, &request.model))
            .ok_or(Error::DeviceNotFound)?;

        let offer = compute_offer(device, &request);
        debug!(
            "Quoted {} {} {}GB ({}) at {}",
            request.brand, request.model, request.storage, request.condition, offer
        );

        self.record_quote(QuoteRecord::new(&request, offer)).await;

        Ok(QuoteResponse::new(request, offer))
    }
}
