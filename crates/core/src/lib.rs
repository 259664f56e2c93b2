//! The Fone Buyers core - domain models, services, and traits.
//!
//! This crate holds the device catalog and the trade-in quote engine. It is
//! storage-agnostic and defines the [`documents::DocumentStore`] trait that
//! the `storage-sqlite` crate implements.

pub mod constants;
pub mod devices;
pub mod documents;
pub mod errors;
pub mod quotes;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
