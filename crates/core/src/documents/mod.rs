//! Documents module - the storage port consumed by the catalog and quote engine.

mod documents_traits;
mod unconfigured_store;

pub use documents_traits::{Document, DocumentStore};
pub use unconfigured_store::UnconfiguredStore;

#[cfg(test)]
pub(crate) mod mock_store;
