use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{self, doc, Bson, Document};
use mongodb::{Client, Database};
use serde_json::Value;

use super::{Cond, DocId, DocumentBackend, Filter, StoreError};

/// MongoDB-backed document store. One `Database` handle is opened at process
/// start and shared across all requests; the driver's own pool and timeout
/// defaults apply.
pub struct MongoBackend {
    db: Database,
}

impl MongoBackend {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(uri).await?;
        let db = client.database(database);
        tracing::info!("Connected to document store database '{}'", database);
        Ok(Self { db })
    }

    fn collection(&self, name: &str) -> mongodb::Collection<Document> {
        self.db.collection::<Document>(name)
    }
}

#[async_trait]
impl DocumentBackend for MongoBackend {
    async fn find(&self, collection: &str, filter: Filter) -> Result<Vec<(DocId, Value)>, StoreError> {
        let query = filter_to_query(&filter)?;
        let mut cursor = self.collection(collection).find(query).await?;
        let mut out = Vec::new();
        while let Some(doc) = cursor.try_next().await? {
            out.push(split_id(doc)?);
        }
        Ok(out)
    }

    async fn find_by_id(&self, collection: &str, id: DocId) -> Result<Option<Value>, StoreError> {
        let found = self
            .collection(collection)
            .find_one(doc! { "_id": id.as_object_id() })
            .await?;
        match found {
            Some(doc) => {
                let (_, body) = split_id(doc)?;
                Ok(Some(body))
            }
            None => Ok(None),
        }
    }

    async fn insert(&self, collection: &str, body: Value) -> Result<DocId, StoreError> {
        let doc = to_document(&body)?;
        let result = self.collection(collection).insert_one(doc).await?;
        match result.inserted_id {
            Bson::ObjectId(oid) => Ok(DocId(oid)),
            other => Err(StoreError::Decode(format!(
                "store assigned a non-ObjectId identifier: {}",
                other
            ))),
        }
    }

    async fn replace(&self, collection: &str, id: DocId, body: Value) -> Result<bool, StoreError> {
        let doc = to_document(&body)?;
        let result = self
            .collection(collection)
            .replace_one(doc! { "_id": id.as_object_id() }, doc)
            .await?;
        Ok(result.matched_count > 0)
    }

    async fn delete(&self, collection: &str, id: DocId) -> Result<bool, StoreError> {
        let result = self
            .collection(collection)
            .delete_one(doc! { "_id": id.as_object_id() })
            .await?;
        Ok(result.deleted_count > 0)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.db.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}

fn filter_to_query(filter: &Filter) -> Result<Document, StoreError> {
    let mut query = Document::new();
    for cond in filter.conds() {
        match cond {
            Cond::Eq(field, value) => {
                let bson = bson::to_bson(value).map_err(|e| StoreError::Encode(e.to_string()))?;
                query.insert(*field, bson);
            }
            Cond::Lte(field, limit) => {
                query.insert(*field, doc! { "$lte": *limit });
            }
        }
    }
    Ok(query)
}

fn to_document(body: &Value) -> Result<Document, StoreError> {
    bson::to_document(body).map_err(|e| StoreError::Encode(e.to_string()))
}

fn split_id(mut doc: Document) -> Result<(DocId, Value), StoreError> {
    let id = match doc.remove("_id") {
        Some(Bson::ObjectId(oid)) => DocId(oid),
        other => {
            return Err(StoreError::Decode(format!(
                "document is missing an ObjectId _id: {:?}",
                other
            )))
        }
    };
    let body = serde_json::to_value(&doc).map_err(|e| StoreError::Decode(e.to_string()))?;
    Ok((id, body))
}
