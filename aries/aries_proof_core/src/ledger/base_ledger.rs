use std::fmt::Debug;

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::error::VcxCoreResult;

/// Read access to the anoncreds objects published on a ledger.
///
/// Objects are returned as opaque JSON; the proof engine only routes them to the crypto provider.
/// A missing object fails with `LedgerItemNotFound`, transport problems with `LedgerUnavailable`.
#[async_trait]
pub trait AnoncredsLedgerRead: Debug + Send + Sync {
    async fn get_schema(&self, schema_id: &str) -> VcxCoreResult<Value>;

    async fn get_cred_def(&self, cred_def_id: &str) -> VcxCoreResult<Value>;

    async fn get_rev_reg_def_json(&self, rev_reg_id: &str) -> VcxCoreResult<Value>;

    /// Delta of the registry between `from` (genesis when `None`) and `to`. Returns the delta
    /// together with the ledger timestamp it was accumulated up to.
    async fn get_rev_reg_delta_json(
        &self,
        rev_reg_id: &str,
        from: Option<u64>,
        to: u64,
    ) -> VcxCoreResult<(Value, u64)>;
}
