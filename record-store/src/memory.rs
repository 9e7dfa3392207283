use crate::error::{StoreError, StoreResult};
use crate::store::{ChangeEvent, ChangeKind, RecordStore};
use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::{Map, Value};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::broadcast;

const CHANNEL_CAPACITY: usize = 64;

/// In-memory record store used by tests and single-node deployments.
///
/// Documents live in a concurrent map keyed by full path. Push keys are
/// time-ordered (millisecond timestamp plus a process-wide sequence),
/// so children sort back into append order.
pub struct MemoryStore {
    records: DashMap<String, Value>,
    subscribers: DashMap<String, broadcast::Sender<ChangeEvent>>,
    sequence: AtomicU64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
            subscribers: DashMap::new(),
            sequence: AtomicU64::new(0),
        }
    }

    fn next_key(&self) -> String {
        let millis = chrono::Utc::now().timestamp_millis().max(0) as u64;
        let seq = self.sequence.fetch_add(1, Ordering::SeqCst);
        format!("{millis:012x}{:06x}", seq & 0xff_ffff)
    }

    fn notify(&self, event: ChangeEvent) {
        let child_prefix = format!("{}/", event.path);
        for entry in self.subscribers.iter() {
            let subscribed = entry.key();
            // A subscriber sees events at its path and below it
            if event.path == *subscribed
                || event.path.starts_with(&format!("{subscribed}/"))
                || subscribed.starts_with(&child_prefix)
            {
                let _ = entry.value().send(event.clone());
            }
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn get(&self, path: &str) -> StoreResult<Option<Value>> {
        Ok(self.records.get(path).map(|entry| entry.value().clone()))
    }

    async fn get_all(&self, path: &str) -> StoreResult<Vec<(String, Value)>> {
        let prefix = format!("{path}/");
        let mut children: Vec<(String, Value)> = self
            .records
            .iter()
            .filter_map(|entry| {
                let rest = entry.key().strip_prefix(&prefix)?;
                if rest.is_empty() || rest.contains('/') {
                    return None;
                }
                Some((rest.to_string(), entry.value().clone()))
            })
            .collect();
        children.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(children)
    }

    async fn push(&self, path: &str, value: Value) -> StoreResult<String> {
        let key = self.next_key();
        let child_path = format!("{path}/{key}");
        self.records.insert(child_path.clone(), value.clone());
        self.notify(ChangeEvent {
            path: child_path,
            kind: ChangeKind::Added,
            value,
        });
        Ok(key)
    }

    async fn set(&self, path: &str, value: Value) -> StoreResult<()> {
        let previous = self.records.insert(path.to_string(), value.clone());
        self.notify(ChangeEvent {
            path: path.to_string(),
            kind: if previous.is_some() {
                ChangeKind::Changed
            } else {
                ChangeKind::Added
            },
            value,
        });
        Ok(())
    }

    async fn update_fields(&self, path: &str, fields: Map<String, Value>) -> StoreResult<()> {
        let mut entry = self
            .records
            .entry(path.to_string())
            .or_insert_with(|| Value::Object(Map::new()));

        match entry.value_mut() {
            Value::Object(existing) => {
                for (field, value) in fields {
                    existing.insert(field, value);
                }
            }
            other => {
                return Err(StoreError::Backend(format!(
                    "cannot update fields of non-object record at {path}: {other}"
                )))
            }
        }

        let value = entry.value().clone();
        drop(entry);
        self.notify(ChangeEvent {
            path: path.to_string(),
            kind: ChangeKind::Changed,
            value,
        });
        Ok(())
    }

    fn subscribe(&self, path: &str) -> broadcast::Receiver<ChangeEvent> {
        self.subscribers
            .entry(path.to_string())
            .or_insert_with(|| broadcast::channel(CHANNEL_CAPACITY).0)
            .subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_push_generates_unique_ordered_keys() {
        let store = MemoryStore::new();

        let first = store.push("ipd/admissions", json!({"n": 1})).await.unwrap();
        let second = store.push("ipd/admissions", json!({"n": 2})).await.unwrap();
        assert_ne!(first, second);
        assert!(first < second);
    }

    #[tokio::test]
    async fn test_get_all_returns_children_in_append_order() {
        let store = MemoryStore::new();
        for n in 0..5 {
            store.push("opd/visits", json!({ "n": n })).await.unwrap();
        }

        let children = store.get_all("opd/visits").await.unwrap();
        assert_eq!(children.len(), 5);
        for (n, (_, value)) in children.iter().enumerate() {
            assert_eq!(value["n"], json!(n));
        }
    }

    #[tokio::test]
    async fn test_get_all_excludes_grandchildren() {
        let store = MemoryStore::new();
        store.set("a/b", json!(1)).await.unwrap();
        store.set("a/b/c", json!(2)).await.unwrap();

        let children = store.get_all("a").await.unwrap();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].0, "b");
    }

    #[tokio::test]
    async fn test_update_fields_merges_into_existing_record() {
        let store = MemoryStore::new();
        store
            .set("beds/general/412", json!({"status": "occupied", "floor": 4}))
            .await
            .unwrap();

        let mut fields = Map::new();
        fields.insert("status".to_string(), json!("available"));
        store.update_fields("beds/general/412", fields).await.unwrap();

        let record = store.get("beds/general/412").await.unwrap().unwrap();
        assert_eq!(record["status"], json!("available"));
        assert_eq!(record["floor"], json!(4));
    }

    #[tokio::test]
    async fn test_update_fields_rejects_non_object_record() {
        let store = MemoryStore::new();
        store.set("counters/total", json!(7)).await.unwrap();

        let mut fields = Map::new();
        fields.insert("status".to_string(), json!("available"));
        let err = store.update_fields("counters/total", fields).await;
        assert!(matches!(err, Err(StoreError::Backend(_))));
    }

    #[tokio::test]
    async fn test_subscribe_receives_changes_under_path() {
        let store = MemoryStore::new();
        let mut rx = store.subscribe("ipd/admissions");

        store.push("ipd/admissions", json!({"n": 1})).await.unwrap();
        let event = rx.recv().await.unwrap();
        assert_eq!(event.kind, ChangeKind::Added);
        assert!(event.path.starts_with("ipd/admissions/"));
    }

    #[tokio::test]
    async fn test_subscribe_ignores_sibling_paths() {
        let store = MemoryStore::new();
        let mut rx = store.subscribe("ipd/admissions");

        store.set("opd/visits/x", json!(1)).await.unwrap();
        store.set("ipd/admissions/y", json!(2)).await.unwrap();

        let event = rx.recv().await.unwrap();
        assert_eq!(event.path, "ipd/admissions/y");
    }
}
