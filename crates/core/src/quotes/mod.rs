//! Quotes module - trade-in pricing, quote models, service and traits.

mod pricing;
mod quote_service;
mod quotes_model;
mod quotes_traits;


pub use pricing::{compute_offer, round_to_cents, storage_adjustment};
pub use quote_service::QuoteService;
pub use quotes_model::{Condition, QuoteRecord, QuoteRequest, QuoteResponse};
pub use quotes_traits::QuoteServiceTrait;
