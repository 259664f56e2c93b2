//! SQLite storage implementation for The Fone Buyers.
//!
//! This crate implements the `DocumentStore` trait from `fonebuyers-core` on a
//! single SQLite table through Diesel. It contains:
//! - Connection pooling and the single writer actor
//! - Embedded Diesel migrations
//! - The document repository and its database model
//!
//! ```text
//!   core (catalog, quotes)
//!            │  DocumentStore
//!            ▼
//!   storage-sqlite (this crate)
//!            │
//!            ▼
//!        SQLite DB
//! ```

pub mod db;
pub mod documents;
pub mod errors;
pub mod schema;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, get_db_path, init, run_migrations, spawn_writer, DbConnection,
    DbPool, WriteHandle,
};

pub use documents::SqliteDocumentStore;

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export from fonebuyers-core for convenience
pub use fonebuyers_core::errors::{DatabaseError, Error, Result};
