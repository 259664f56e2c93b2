use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use fonebuyers_core::documents::{Document, DocumentStore};
use fonebuyers_core::errors::{DatabaseError, Result};

use super::model::{DocumentDB, NewDocumentDB};
use crate::db::{self, get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::documents;

/// Document store backed by a single SQLite table.
///
/// Reads use the connection pool on the blocking thread pool; inserts go
/// through the writer actor.
pub struct SqliteDocumentStore {
    pool: Arc<DbPool>,
    writer: WriteHandle,
    name: String,
}

impl SqliteDocumentStore {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle, name: impl Into<String>) -> Self {
        SqliteDocumentStore {
            pool,
            writer,
            name: name.into(),
        }
    }

    /// Opens (creating if needed) the database at `database_url`, applies
    /// migrations and starts the writer actor. Must be called from within a
    /// Tokio runtime.
    pub fn open(database_url: &str, database_name: Option<String>) -> Result<Self> {
        let db_path = db::init(database_url)?;
        let pool = db::create_pool(&db_path)?;
        db::run_migrations(&pool)?;
        let writer = db::spawn_writer((*pool).clone());

        let name = database_name.unwrap_or_else(|| {
            std::path::Path::new(&db_path)
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| db_path.clone())
        });
        log::info!("Document store opened at {} ({})", db_path, name);
        Ok(Self::new(pool, writer, name))
    }

    fn load_documents_impl(pool: &DbPool, collection_name: &str) -> Result<Vec<Document>> {
        let mut conn = get_connection(pool)?;
        let rows = documents::table
            .filter(documents::collection.eq(collection_name))
            .order(documents::id.asc())
            .select(DocumentDB::as_select())
            .load::<DocumentDB>(&mut conn)
            .map_err(StorageError::from)?;
        rows.into_iter()
            .map(|row| Document::try_from(row).map_err(fonebuyers_core::Error::from))
            .collect()
    }

    fn load_collection_names_impl(pool: &DbPool) -> Result<Vec<String>> {
        let mut conn = get_connection(pool)?;
        Ok(documents::table
            .select(documents::collection)
            .distinct()
            .order(documents::collection.asc())
            .load::<String>(&mut conn)
            .map_err(StorageError::from)?)
    }

    async fn run_blocking<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&DbPool) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || f(&pool))
            .await
            .map_err(|e| DatabaseError::Internal(format!("Read task failed: {}", e)))?
    }
}

#[async_trait]
impl DocumentStore for SqliteDocumentStore {
    async fn insert_document(&self, collection: &str, document: Document) -> Result<()> {
        let new_document = NewDocumentDB::new(collection, document)?;
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<()> {
                diesel::insert_into(documents::table)
                    .values(&new_document)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(())
            })
            .await
    }

    async fn get_documents(&self, collection: &str) -> Result<Vec<Document>> {
        let collection = collection.to_string();
        self.run_blocking(move |pool| Self::load_documents_impl(pool, &collection))
            .await
    }

    async fn list_collections(&self) -> Result<Vec<String>> {
        self.run_blocking(Self::load_collection_names_impl).await
    }

    fn database_name(&self) -> Option<String> {
        Some(self.name.clone())
    }
}
