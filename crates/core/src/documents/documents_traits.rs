use crate::errors::Result;
use async_trait::async_trait;

/// A schemaless JSON object, the unit a [`DocumentStore`] persists.
pub type Document = serde_json::Map<String, serde_json::Value>;

/// Trait for document store operations.
///
/// Implementations return storage failures as `Err` values; callers decide
/// whether to absorb them.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Appends a document to the named collection.
    async fn insert_document(&self, collection: &str, document: Document) -> Result<()>;

    /// Returns every document of the named collection in insertion order.
    async fn get_documents(&self, collection: &str) -> Result<Vec<Document>>;

    /// Names of the collections holding at least one document, sorted.
    async fn list_collections(&self) -> Result<Vec<String>>;

    /// Logical name of the underlying database, if one is known.
    fn database_name(&self) -> Option<String>;
}
