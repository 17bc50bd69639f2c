//! Record storage module
//!
//! Defines the storage seam the HTTP handlers talk to, plus an in-memory
//! implementation used for local runs and handler tests.

use crate::error::AppError;
use crate::models::{Record, RecordPayload};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Storage operations behind the record handlers.
///
/// Each method maps to exactly one statement against the backing store.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// All records, in whatever order the store yields them.
    async fn list(&self) -> Result<Vec<Record>, AppError>;

    /// Insert a record and return it with its assigned id.
    async fn create(&self, payload: &RecordPayload) -> Result<Record, AppError>;

    /// Overwrite name and email of `id`. Returns the number of rows affected.
    async fn update(&self, id: i64, payload: &RecordPayload) -> Result<u64, AppError>;

    /// Remove `id`. Returns the number of rows affected.
    async fn delete(&self, id: i64) -> Result<u64, AppError>;
}

#[derive(Default)]
struct MemoryInner {
    records: BTreeMap<i64, Record>,
    last_id: i64,
}

/// In-memory record store
///
/// Ids start at 1 and are never reused, matching an auto-increment column.
#[derive(Clone, Default)]
pub struct MemoryRecordStore {
    inner: Arc<RwLock<MemoryInner>>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn list(&self) -> Result<Vec<Record>, AppError> {
        let inner = self.inner.read().await;
        Ok(inner.records.values().cloned().collect())
    }

    async fn create(&self, payload: &RecordPayload) -> Result<Record, AppError> {
        let mut inner = self.inner.write().await;

        let id = inner
            .last_id
            .checked_add(1)
            .ok_or_else(|| AppError::Internal("record id space exhausted".to_string()))?;
        inner.last_id = id;

        let record = payload.clone().into_record(id);
        inner.records.insert(id, record.clone());

        Ok(record)
    }

    async fn update(&self, id: i64, payload: &RecordPayload) -> Result<u64, AppError> {
        let mut inner = self.inner.write().await;

        match inner.records.get_mut(&id) {
            Some(record) => {
                record.name = payload.name.clone();
                record.email = payload.email.clone();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i64) -> Result<u64, AppError> {
        let mut inner = self.inner.write().await;
        Ok(u64::from(inner.records.remove(&id).is_some()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tokio_test::assert_ok;

    #[tokio::test]
    async fn empty_store_lists_nothing() {
        let store = MemoryRecordStore::new();
        assert_eq!(assert_ok!(store.list().await), Vec::<Record>::new());
    }

    #[tokio::test]
    async fn ids_increase_and_are_not_reused() {
        let store = MemoryRecordStore::new();

        let first = assert_ok!(store.create(&RecordPayload::new("a", "a@x.com")).await);
        let second = assert_ok!(store.create(&RecordPayload::new("b", "b@x.com")).await);
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);

        assert_eq!(assert_ok!(store.delete(second.id).await), 1);
        let third = assert_ok!(store.create(&RecordPayload::new("c", "c@x.com")).await);
        assert_eq!(third.id, 3);
    }

    #[tokio::test]
    async fn update_reports_rows_affected() {
        let store = MemoryRecordStore::new();
        let created = assert_ok!(store.create(&RecordPayload::new("Ana", "ana@x.com")).await);

        let changed = RecordPayload::new("Ana B", "anab@x.com");
        assert_eq!(assert_ok!(store.update(created.id, &changed).await), 1);
        assert_eq!(assert_ok!(store.update(999_999, &changed).await), 0);

        let records = assert_ok!(store.list().await);
        assert_eq!(records, vec![changed.into_record(created.id)]);
    }

    #[tokio::test]
    async fn delete_twice_affects_one_row_then_none() {
        let store = MemoryRecordStore::new();
        let created = assert_ok!(store.create(&RecordPayload::new("Ana", "ana@x.com")).await);

        assert_eq!(assert_ok!(store.delete(created.id).await), 1);
        assert_eq!(assert_ok!(store.delete(created.id).await), 0);
    }
}
