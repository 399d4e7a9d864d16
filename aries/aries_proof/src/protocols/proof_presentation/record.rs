use aries_proof_core::wallet::{record::Record, record_tags::RecordTags};
use chrono::{DateTime, Utc};
use strum_macros::{AsRefStr, EnumString};

use super::state::ProofState;
use crate::errors::error::prelude::*;

pub const PROOF_RECORD_CATEGORY: &str = "ProofRecord";

pub const TAG_ROLE: &str = "role";
pub const TAG_LAST_THREAD_ID: &str = "lastThreadId";
/// Base64url copy of a connectionless request message, kept for re-delivery.
pub const TAG_REQUEST_DATA: &str = "RequestData";

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum ProofRole {
    Requestor,
    Holder,
}

/// Persisted state of one present-proof exchange.
///
/// A plain value: state changes are computed by [`super::state::transition`] and applied by the
/// service. Tags and the store version live beside the serialized value, not inside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProofRecord {
    id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    connection_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    request_json: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    proof_json: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    state: Option<ProofState>,
    created_at: DateTime<Utc>,
    #[serde(skip)]
    tags: RecordTags,
    #[serde(skip)]
    version: u64,
}

impl ProofRecord {
    /// A verifier's record. It has no committed state until a presentation arrives.
    pub fn new_requestor(
        id: String,
        connection_id: Option<String>,
        request_json: String,
        thread_id: &str,
    ) -> Self {
        let mut record = Self::new(id, connection_id, request_json, None);
        record.tags.set(TAG_ROLE, ProofRole::Requestor.as_ref());
        record.tags.set(TAG_LAST_THREAD_ID, thread_id);
        record
    }

    pub fn new_holder(
        id: String,
        connection_id: Option<String>,
        request_json: String,
        thread_id: &str,
    ) -> Self {
        let mut record = Self::new(id, connection_id, request_json, Some(ProofState::Requested));
        record.tags.set(TAG_ROLE, ProofRole::Holder.as_ref());
        record.tags.set(TAG_LAST_THREAD_ID, thread_id);
        record
    }

    fn new(
        id: String,
        connection_id: Option<String>,
        request_json: String,
        state: Option<ProofState>,
    ) -> Self {
        Self {
            id,
            connection_id,
            request_json: Some(request_json),
            proof_json: None,
            state,
            created_at: Utc::now(),
            tags: RecordTags::default(),
            version: 0,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn connection_id(&self) -> Option<&str> {
        self.connection_id.as_deref()
    }

    pub fn request_json(&self) -> Option<&str> {
        self.request_json.as_deref()
    }

    pub fn proof_json(&self) -> Option<&str> {
        self.proof_json.as_deref()
    }

    /// The committed state, `None` for a requestor record still awaiting its presentation.
    pub fn state(&self) -> Option<ProofState> {
        self.state
    }

    /// State used for transition checks. An uncommitted record counts as `Requested`.
    pub fn effective_state(&self) -> ProofState {
        self.state.unwrap_or(ProofState::Requested)
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn role(&self) -> Option<ProofRole> {
        self.tags.get(TAG_ROLE).and_then(|role| role.parse().ok())
    }

    pub fn thread_id(&self) -> Option<&str> {
        self.tags.get(TAG_LAST_THREAD_ID)
    }

    pub fn tags(&self) -> &RecordTags {
        &self.tags
    }

    pub fn get_tag(&self, name: &str) -> Option<&str> {
        self.tags.get(name)
    }

    pub fn set_tag(&mut self, name: &str, value: impl Into<String>) {
        self.tags.set(name, value);
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Applies a computed transition together with the artifact it depends on.
    pub(crate) fn accept_with_proof(&mut self, state: ProofState, proof_json: String) {
        self.proof_json = Some(proof_json);
        self.state = Some(state);
    }

    pub(crate) fn set_state(&mut self, state: ProofState) {
        self.state = Some(state);
    }

    pub(crate) fn set_version(&mut self, version: u64) {
        self.version = version;
    }

    pub fn to_record(&self) -> ProofResult<Record> {
        Ok(Record::builder()
            .category(PROOF_RECORD_CATEGORY)
            .id(self.id.clone())
            .value(serde_json::to_string(self)?)
            .tags(self.tags.clone())
            .version(self.version)
            .build())
    }

    pub fn from_record(record: Record) -> ProofResult<Self> {
        let mut proof_record: ProofRecord = serde_json::from_str(record.value()).map_err(|err| {
            AriesProofError::from_msg(
                AriesProofErrorKind::SerializationError,
                format!("Cannot deserialize proof record {}: {}", record.id(), err),
            )
        })?;
        proof_record.tags = record.tags().clone();
        proof_record.version = record.version();
        Ok(proof_record)
    }
}
