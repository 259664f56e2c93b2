use crate::errors::Result;
use crate::quotes::quotes_model::{QuoteRequest, QuoteResponse};
use async_trait::async_trait;

/// Trait for quote engine operations
#[async_trait]
pub trait QuoteServiceTrait: Send + Sync {
    /// Prices `request` against the catalog and records the quote.
    ///
    /// Fails with [`crate::Error::DeviceNotFound`] when no device matches the
    /// brand and model. Recording failures never fail the call.
    async fn get_quote(&self, request: QuoteRequest) -> Result<QuoteResponse>;
}
