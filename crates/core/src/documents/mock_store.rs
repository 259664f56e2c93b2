//! In-memory `DocumentStore` used by the service tests.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::documents_traits::{Document, DocumentStore};
use crate::errors::{DatabaseError, Result};

#[derive(Clone, Default)]
pub(crate) struct MockDocumentStore {
    collections: Arc<Mutex<BTreeMap<String, Vec<Document>>>>,
    fail_on_read: Arc<Mutex<bool>>,
    fail_on_write: Arc<Mutex<bool>>,
}

impl MockDocumentStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_documents(collection: &str, docs: Vec<serde_json::Value>) -> Self {
        let store = Self::new();
        {
            let mut collections = store.collections.lock().unwrap();
            let entry = collections.entry(collection.to_string()).or_default();
            for doc in docs {
                match doc {
                    serde_json::Value::Object(map) => entry.push(map),
                    other => panic!("test documents must be objects, got {}", other),
                }
            }
        }
        store
    }

    pub(crate) fn set_fail_on_read(&self, fail: bool) {
        *self.fail_on_read.lock().unwrap() = fail;
    }

    pub(crate) fn set_fail_on_write(&self, fail: bool) {
        *self.fail_on_write.lock().unwrap() = fail;
    }

    pub(crate) fn documents(&self, collection: &str) -> Vec<Document> {
        self.collections
            .lock()
            .unwrap()
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }
}

#[async_trait]
impl DocumentStore for MockDocumentStore {
    async fn insert_document(&self, collection: &str, document: Document) -> Result<()> {
        if *self.fail_on_write.lock().unwrap() {
            return Err(DatabaseError::QueryFailed("Intentional write failure".into()).into());
        }
        self.collections
            .lock()
            .unwrap()
            .entry(collection.to_string())
            .or_default()
            .push(document);
        Ok(())
    }

    async fn get_documents(&self, collection: &str) -> Result<Vec<Document>> {
        if *self.fail_on_read.lock().unwrap() {
            return Err(DatabaseError::ConnectionFailed("Intentional read failure".into()).into());
        }
        Ok(self.documents(collection))
    }

    async fn list_collections(&self) -> Result<Vec<String>> {
        if *self.fail_on_read.lock().unwrap() {
            return Err(DatabaseError::ConnectionFailed("Intentional read failure".into()).into());
        }
        Ok(self.collections.lock().unwrap().keys().cloned().collect())
    }

    fn database_name(&self) -> Option<String> {
        Some("mock".to_string())
    }
}
