use std::collections::HashSet;

use aries_proof_core::{
    errors::error::{VcxCoreError, VcxCoreResult},
    ledger::base_ledger::AnoncredsLedgerRead,
};
use async_trait::async_trait;
use serde_json::{json, Value};

use super::CallCounter;
use crate::constants::{CRED_DEF_ID, CRED_DEF_ID_2, REV_REG_ID, SCHEMA_ID, SCHEMA_ID_2};

/// Ledger that knows the canned identifiers of [`crate::constants`] and counts every lookup.
/// Unknown identifiers fail with `LedgerItemNotFound`.
#[derive(Debug)]
pub struct MockLedger {
    known_ids: HashSet<String>,
    unavailable: bool,
    schemas: CallCounter,
    cred_defs: CallCounter,
    rev_reg_defs: CallCounter,
    deltas: CallCounter,
}

impl Default for MockLedger {
    fn default() -> Self {
        Self {
            known_ids: [SCHEMA_ID, SCHEMA_ID_2, CRED_DEF_ID, CRED_DEF_ID_2, REV_REG_ID]
                .into_iter()
                .map(ToOwned::to_owned)
                .collect(),
            unavailable: false,
            schemas: CallCounter::default(),
            cred_defs: CallCounter::default(),
            rev_reg_defs: CallCounter::default(),
            deltas: CallCounter::default(),
        }
    }
}

impl MockLedger {
    /// Every lookup fails with `LedgerUnavailable`.
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    pub fn schema_fetch_count(&self, id: &str) -> usize {
        self.schemas.count(id)
    }

    pub fn cred_def_fetch_count(&self, id: &str) -> usize {
        self.cred_defs.count(id)
    }

    pub fn rev_reg_def_fetch_count(&self, id: &str) -> usize {
        self.rev_reg_defs.count(id)
    }

    pub fn delta_fetch_count(&self, id: &str) -> usize {
        self.deltas.count(id)
    }

    pub fn total_fetch_count(&self) -> usize {
        self.schemas.total() + self.cred_defs.total() + self.rev_reg_defs.total() + self.deltas.total()
    }

    fn lookup(&self, id: &str, object: Value) -> VcxCoreResult<Value> {
        if self.unavailable {
            return Err(VcxCoreError::LedgerUnavailable(format!(
                "pool connection refused while reading {id}"
            )));
        }
        if !self.known_ids.contains(id) {
            return Err(VcxCoreError::LedgerItemNotFound(id.to_owned()));
        }
        Ok(object)
    }
}

#[async_trait]
impl AnoncredsLedgerRead for MockLedger {
    async fn get_schema(&self, schema_id: &str) -> VcxCoreResult<Value> {
        self.schemas.hit(schema_id);
        self.lookup(
            schema_id,
            json!({ "id": schema_id, "ver": "1.0", "attrNames": ["name", "age"], "seqNo": 1281 }),
        )
    }

    async fn get_cred_def(&self, cred_def_id: &str) -> VcxCoreResult<Value> {
        self.cred_defs.hit(cred_def_id);
        self.lookup(
            cred_def_id,
            json!({ "id": cred_def_id, "ver": "1.0", "type": "CL", "tag": "tag1", "value": {} }),
        )
    }

    async fn get_rev_reg_def_json(&self, rev_reg_id: &str) -> VcxCoreResult<Value> {
        self.rev_reg_defs.hit(rev_reg_id);
        self.lookup(
            rev_reg_id,
            json!({ "id": rev_reg_id, "ver": "1.0", "revocDefType": "CL_ACCUM", "value": { "maxCredNum": 100 } }),
        )
    }

    async fn get_rev_reg_delta_json(
        &self,
        rev_reg_id: &str,
        from: Option<u64>,
        to: u64,
    ) -> VcxCoreResult<(Value, u64)> {
        self.deltas.hit(rev_reg_id);
        let delta = self.lookup(
            rev_reg_id,
            json!({ "ver": "1.0", "value": { "accum": format!("accum-{to}"), "from": from } }),
        )?;
        Ok((delta, to))
    }
}
