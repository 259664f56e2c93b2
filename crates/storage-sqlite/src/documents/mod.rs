//! SQLite storage implementation for schemaless documents.

mod model;
mod repository;

pub use model::{DocumentDB, NewDocumentDB};
pub use repository::SqliteDocumentStore;
