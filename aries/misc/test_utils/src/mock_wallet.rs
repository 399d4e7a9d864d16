use std::{collections::BTreeMap, sync::Mutex};

use aries_proof_core::{
    errors::error::{VcxCoreError, VcxCoreResult},
    wallet::{record::Record, record_store::RecordStore, search::TagQuery},
};
use async_trait::async_trait;

/// Record store kept in memory, with version checks on update.
#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    records: Mutex<BTreeMap<(String, String), Record>>,
}

impl InMemoryRecordStore {
    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The stored copy, bypassing the async interface.
    pub fn snapshot(&self, category: &str, id: &str) -> Option<Record> {
        self.records
            .lock()
            .unwrap()
            .get(&(category.to_owned(), id.to_owned()))
            .cloned()
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn add_record(&self, record: Record) -> VcxCoreResult<()> {
        let key = (record.category().to_owned(), record.id().to_owned());
        let mut records = self.records.lock().unwrap();
        if records.contains_key(&key) {
            return Err(VcxCoreError::DuplicateRecord(format!("{}/{}", key.0, key.1)));
        }
        records.insert(key, record);
        Ok(())
    }

    async fn get_record(&self, category: &str, id: &str) -> VcxCoreResult<Option<Record>> {
        Ok(self.snapshot(category, id))
    }

    async fn update_record(&self, mut record: Record) -> VcxCoreResult<u64> {
        let key = (record.category().to_owned(), record.id().to_owned());
        let mut records = self.records.lock().unwrap();
        let stored = records.get(&key).ok_or_else(|| VcxCoreError::RecordNotFound {
            category: key.0.clone(),
            id: key.1.clone(),
        })?;
        if stored.version() != record.version() {
            return Err(VcxCoreError::RecordVersionConflict {
                id: key.1.clone(),
                expected: record.version(),
                found: stored.version(),
            });
        }
        let version = stored.version() + 1;
        record.set_version(version);
        records.insert(key, record);
        Ok(version)
    }

    async fn search_records(
        &self,
        category: &str,
        query: &TagQuery,
        limit: Option<usize>,
    ) -> VcxCoreResult<Vec<Record>> {
        let records = self.records.lock().unwrap();
        Ok(records
            .values()
            .filter(|record| record.category() == category && query.matches(record.tags()))
            .take(limit.unwrap_or(usize::MAX))
            .cloned()
            .collect())
    }
}
