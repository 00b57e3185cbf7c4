pub mod memory;
pub mod mongo;

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::entities::{character, item, player, quest};
use crate::entities::{Character, Item, Player, Quest};

/// Errors from the document store layer
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("document store error: {0}")]
    Backend(#[from] mongodb::error::Error),

    #[error("failed to encode document: {0}")]
    Encode(String),

    #[error("failed to decode document: {0}")]
    Decode(String),
}

/// Store-assigned document identifier. Wraps an ObjectId so malformed
/// identifiers are caught at parse time, before any store round-trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocId(ObjectId);

impl DocId {
    pub fn new() -> Self {
        Self(ObjectId::new())
    }

    pub fn as_object_id(&self) -> ObjectId {
        self.0
    }

    pub fn to_hex(&self) -> String {
        self.0.to_hex()
    }
}

impl Default for DocId {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for DocId {
    type Err = mongodb::bson::oid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ObjectId::parse_str(s).map(DocId)
    }
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_hex())
    }
}

// Serialized as the plain hex string, not extended JSON
impl Serialize for DocId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_hex())
    }
}

impl<'de> Deserialize<'de> for DocId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Conjunction of field conditions, covering every query the API performs:
/// exact-match secondary keys plus the quest level threshold.
#[derive(Debug, Clone, Default)]
pub struct Filter {
    conds: Vec<Cond>,
}

#[derive(Debug, Clone)]
pub enum Cond {
    Eq(&'static str, Value),
    Lte(&'static str, i64),
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn eq(mut self, field: &'static str, value: impl Into<Value>) -> Self {
        self.conds.push(Cond::Eq(field, value.into()));
        self
    }

    pub fn lte(mut self, field: &'static str, value: i64) -> Self {
        self.conds.push(Cond::Lte(field, value));
        self
    }

    pub fn conds(&self) -> &[Cond] {
        &self.conds
    }

    /// Evaluate against a JSON document (memory backend).
    pub fn matches(&self, doc: &Value) -> bool {
        self.conds.iter().all(|cond| match cond {
            Cond::Eq(field, expected) => doc.get(field) == Some(expected),
            Cond::Lte(field, limit) => doc
                .get(field)
                .and_then(Value::as_i64)
                .is_some_and(|v| v <= *limit),
        })
    }
}

/// Abstraction over the persistence backend holding JSON-like records per
/// resource collection. Injected into the app state at startup so tests can
/// substitute the in-memory implementation.
#[async_trait]
pub trait DocumentBackend: Send + Sync {
    async fn find(&self, collection: &str, filter: Filter) -> Result<Vec<(DocId, Value)>, StoreError>;
    async fn find_by_id(&self, collection: &str, id: DocId) -> Result<Option<Value>, StoreError>;
    async fn insert(&self, collection: &str, body: Value) -> Result<DocId, StoreError>;
    async fn replace(&self, collection: &str, id: DocId, body: Value) -> Result<bool, StoreError>;
    async fn delete(&self, collection: &str, id: DocId) -> Result<bool, StoreError>;
    async fn ping(&self) -> Result<(), StoreError>;
}

/// Typed handle to one collection. Owns the timestamp bookkeeping: `createdAt`
/// is set once at insert and preserved across replaces, `updatedAt` is bumped
/// on every write. Deserialization of `T` applies the entity's field defaults,
/// so documents reach the backend fully defaulted.
pub struct Collection<T> {
    name: &'static str,
    backend: Arc<dyn DocumentBackend>,
    _marker: PhantomData<T>,
}

impl<T> Collection<T>
where
    T: Serialize + Send + Sync,
{
    pub fn new(name: &'static str, backend: Arc<dyn DocumentBackend>) -> Self {
        Self {
            name,
            backend,
            _marker: PhantomData,
        }
    }

    pub async fn find_all(&self) -> Result<Vec<Value>, StoreError> {
        self.find(Filter::new()).await
    }

    pub async fn find(&self, filter: Filter) -> Result<Vec<Value>, StoreError> {
        let docs = self.backend.find(self.name, filter).await?;
        Ok(docs
            .into_iter()
            .map(|(id, body)| attach_id(id, body))
            .collect())
    }

    pub async fn find_by_id(&self, id: DocId) -> Result<Option<Value>, StoreError> {
        let body = self.backend.find_by_id(self.name, id).await?;
        Ok(body.map(|body| attach_id(id, body)))
    }

    /// Insert a new document and return it as the client sees it, with the
    /// store-assigned identifier and timestamps.
    pub async fn insert(&self, doc: &T) -> Result<Value, StoreError> {
        let mut body = self.to_body(doc)?;
        let now = timestamp();
        set_field(&mut body, "createdAt", now.clone());
        set_field(&mut body, "updatedAt", now);
        let id = self.backend.insert(self.name, body.clone()).await?;
        Ok(attach_id(id, body))
    }

    /// Full-document replace. The replacement body never carries `createdAt`,
    /// so the existing document is read first to preserve it. Returns `None`
    /// when the identifier does not resolve to a document.
    pub async fn replace(&self, id: DocId, doc: &T) -> Result<Option<Value>, StoreError> {
        let Some(existing) = self.backend.find_by_id(self.name, id).await? else {
            return Ok(None);
        };
        let mut body = self.to_body(doc)?;
        let created_at = existing
            .get("createdAt")
            .cloned()
            .unwrap_or_else(|| timestamp());
        set_field(&mut body, "createdAt", created_at);
        set_field(&mut body, "updatedAt", timestamp());
        if !self.backend.replace(self.name, id, body.clone()).await? {
            return Ok(None);
        }
        Ok(Some(attach_id(id, body)))
    }

    /// Returns true when a document was removed.
    pub async fn delete(&self, id: DocId) -> Result<bool, StoreError> {
        self.backend.delete(self.name, id).await
    }

    fn to_body(&self, doc: &T) -> Result<Value, StoreError> {
        let value = serde_json::to_value(doc).map_err(|e| StoreError::Encode(e.to_string()))?;
        if !value.is_object() {
            return Err(StoreError::Encode(format!(
                "{} document did not serialize to an object",
                self.name
            )));
        }
        Ok(value)
    }
}

/// Facade over the injected backend, handing out per-resource collection
/// handles.
#[derive(Clone)]
pub struct Store {
    backend: Arc<dyn DocumentBackend>,
}

impl Store {
    pub fn new(backend: Arc<dyn DocumentBackend>) -> Self {
        Self { backend }
    }

    /// In-memory store for tests and local development.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(memory::MemoryBackend::new()))
    }

    pub fn players(&self) -> Collection<Player> {
        Collection::new(player::COLLECTION, self.backend.clone())
    }

    pub fn characters(&self) -> Collection<Character> {
        Collection::new(character::COLLECTION, self.backend.clone())
    }

    pub fn quests(&self) -> Collection<Quest> {
        Collection::new(quest::COLLECTION, self.backend.clone())
    }

    pub fn items(&self) -> Collection<Item> {
        Collection::new(item::COLLECTION, self.backend.clone())
    }

    pub async fn ping(&self) -> Result<(), StoreError> {
        self.backend.ping().await
    }
}

fn timestamp() -> Value {
    Value::String(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true))
}

fn set_field(body: &mut Value, key: &str, value: Value) {
    if let Some(obj) = body.as_object_mut() {
        obj.insert(key.to_string(), value);
    }
}

fn attach_id(id: DocId, body: Value) -> Value {
    let mut obj = match body {
        Value::Object(map) => map,
        other => {
            let mut map = Map::new();
            map.insert("value".to_string(), other);
            map
        }
    };
    obj.insert("id".to_string(), Value::String(id.to_hex()));
    Value::Object(obj)
}
