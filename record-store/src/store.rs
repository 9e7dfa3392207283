use crate::error::StoreResult;
use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::sync::broadcast;

/// Kind of change observed under a subscribed path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    /// A record appeared at a path that held nothing before
    Added,
    /// An existing record was replaced or partially updated
    Changed,
}

/// One change event delivered to subscribers
#[derive(Debug, Clone)]
pub struct ChangeEvent {
    /// Full path of the changed record
    pub path: String,
    pub kind: ChangeKind,
    pub value: Value,
}

/// The console's realtime document database, reduced to the primitives
/// the billing engine actually uses.
///
/// Records are plain JSON documents addressed by slash-separated paths
/// (`ipd/admissions/<id>`). Writes are whole-snapshot or field-level;
/// conflict resolution between concurrent writers is the store's
/// problem, not the caller's.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Fetch the record at a path, if any.
    async fn get(&self, path: &str) -> StoreResult<Option<Value>>;

    /// Fetch all direct children of a path, ordered by child key.
    async fn get_all(&self, path: &str) -> StoreResult<Vec<(String, Value)>>;

    /// Append a child under a generated unique key and return the key.
    ///
    /// Keys are time-ordered, so `get_all` returns children in append
    /// order.
    async fn push(&self, path: &str, value: Value) -> StoreResult<String>;

    /// Replace the record at a path.
    async fn set(&self, path: &str, value: Value) -> StoreResult<()>;

    /// Merge fields into the record at a path, creating it when absent.
    async fn update_fields(&self, path: &str, fields: Map<String, Value>) -> StoreResult<()>;

    /// Subscribe to change events at or under a path.
    fn subscribe(&self, path: &str) -> broadcast::Receiver<ChangeEvent>;
}
