use async_trait::async_trait;

use super::{record::Record, search::TagQuery};
use crate::errors::error::VcxCoreResult;

/// Tag-indexed persistent storage for protocol records.
#[async_trait]
pub trait RecordStore: std::fmt::Debug + Send + Sync {
    /// Stores a new record. Fails with `DuplicateRecord` if `(category, id)` is taken.
    async fn add_record(&self, record: Record) -> VcxCoreResult<()>;

    /// Returns `None` when no record with this `(category, id)` exists.
    async fn get_record(&self, category: &str, id: &str) -> VcxCoreResult<Option<Record>>;

    /// Replaces value and tags of an existing record.
    ///
    /// The stored version must equal `record.version()`, otherwise `RecordVersionConflict` is
    /// returned and nothing is written. Returns the new version on success.
    async fn update_record(&self, record: Record) -> VcxCoreResult<u64>;

    async fn search_records(
        &self,
        category: &str,
        query: &TagQuery,
        limit: Option<usize>,
    ) -> VcxCoreResult<Vec<Record>>;
}
