//! Database models for documents.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use fonebuyers_core::documents::Document;

use crate::errors::StorageError;

/// Database model for a stored document
#[derive(Queryable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::documents)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct DocumentDB {
    pub id: i32,
    pub document_id: String,
    pub collection: String,
    pub body: String,
    pub created_at: NaiveDateTime,
}

/// Database model for inserting a document
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::documents)]
pub struct NewDocumentDB {
    pub document_id: String,
    pub collection: String,
    pub body: String,
    pub created_at: NaiveDateTime,
}

impl NewDocumentDB {
    pub fn new(collection: &str, document: Document) -> Result<Self, StorageError> {
        Ok(Self {
            document_id: uuid::Uuid::new_v4().to_string(),
            collection: collection.to_string(),
            body: serde_json::to_string(&serde_json::Value::Object(document))?,
            created_at: chrono::Utc::now().naive_utc(),
        })
    }
}

impl TryFrom<DocumentDB> for Document {
    type Error = StorageError;

    fn try_from(db: DocumentDB) -> Result<Self, Self::Error> {
        Ok(serde_json::from_str::<Document>(&db.body)?)
    }
}
