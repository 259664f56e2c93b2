use async_trait::async_trait;

use super::documents_traits::{Document, DocumentStore};
use crate::errors::{DatabaseError, Result};

/// Stand-in store used when no database is configured or it could not be opened.
///
/// Every operation fails with [`DatabaseError::ConnectionFailed`], which sends
/// the catalog to its fallback list and makes quote persistence a no-op.
#[derive(Debug, Clone)]
pub struct UnconfiguredStore {
    reason: String,
}

impl UnconfiguredStore {
    pub fn new(reason: impl Into<String>) -> Self {
        UnconfiguredStore {
            reason: reason.into(),
        }
    }

    fn error(&self) -> DatabaseError {
        DatabaseError::ConnectionFailed(self.reason.clone())
    }
}

#[async_trait]
impl DocumentStore for UnconfiguredStore {
    async fn insert_document(&self, _collection: &str, _document: Document) -> Result<()> {
        Err(self.error().into())
    }

    async fn get_documents(&self, _collection: &str) -> Result<Vec<Document>> {
        Err(self.error().into())
    }

    async fn list_collections(&self) -> Result<Vec<String>> {
        Err(self.error().into())
    }

    fn database_name(&self) -> Option<String> {
        None
    }
}
