use std::{collections::HashMap, sync::Mutex};

use aries_proof_core::{
    anoncreds::base_anoncreds::BaseAnonCreds,
    data_types::{
        credential::{CredentialInfo, RetrievedCredential},
        ledger::{
            CredentialDefinitionsMap, RevocationRegistryDefinitionsMap,
            RevocationRegistryDeltasMap, RevocationStatesMap, SchemasMap,
        },
        presentation::RequestedCredentials,
    },
    errors::error::{VcxCoreError, VcxCoreResult},
    tails::TailsReader,
};
use async_trait::async_trait;
use serde_json::{json, Value};

use super::CallCounter;

/// What the last `prover_create_proof` call received.
#[derive(Debug, Clone, PartialEq)]
pub struct ProofInputs {
    pub master_secret_id: String,
    pub schemas: SchemasMap,
    pub credential_defs: CredentialDefinitionsMap,
    pub revoc_states: RevocationStatesMap,
}

/// What the last `verifier_verify_proof` call received.
#[derive(Debug, Clone, PartialEq)]
pub struct VerifyInputs {
    pub schemas: SchemasMap,
    pub credential_defs: CredentialDefinitionsMap,
    pub rev_reg_defs: RevocationRegistryDefinitionsMap,
    pub rev_reg_deltas: RevocationRegistryDeltasMap,
}

/// Crypto provider over a fixed set of credentials.
///
/// Proofs it creates carry one identifier per chosen referent, built from the stored credential
/// and the requested timestamp, so they can be fed back into verification.
#[derive(Debug)]
pub struct MockAnoncreds {
    credentials: HashMap<String, CredentialInfo>,
    verify_result: bool,
    fail_proof_creation: bool,
    credential_lookups: CallCounter,
    revocation_states: CallCounter,
    proof_inputs: Mutex<Option<ProofInputs>>,
    verify_inputs: Mutex<Option<VerifyInputs>>,
    search_limits: Mutex<Vec<usize>>,
}

impl Default for MockAnoncreds {
    fn default() -> Self {
        Self {
            credentials: HashMap::new(),
            verify_result: true,
            fail_proof_creation: false,
            credential_lookups: CallCounter::default(),
            revocation_states: CallCounter::default(),
            proof_inputs: Mutex::new(None),
            verify_inputs: Mutex::new(None),
            search_limits: Mutex::new(Vec::new()),
        }
    }
}

impl MockAnoncreds {
    pub fn with_credential(mut self, info: CredentialInfo) -> Self {
        self.credentials.insert(info.referent.clone(), info);
        self
    }

    pub fn with_verify_result(mut self, valid: bool) -> Self {
        self.verify_result = valid;
        self
    }

    /// `prover_create_proof` fails with `CryptoFailure`.
    pub fn with_failing_proof_creation(mut self) -> Self {
        self.fail_proof_creation = true;
        self
    }

    pub fn get_credential_count(&self, cred_id: &str) -> usize {
        self.credential_lookups.count(cred_id)
    }

    pub fn revocation_state_count(&self) -> usize {
        self.revocation_states.total()
    }

    pub fn last_proof_inputs(&self) -> Option<ProofInputs> {
        self.proof_inputs.lock().unwrap().clone()
    }

    pub fn last_verify_inputs(&self) -> Option<VerifyInputs> {
        self.verify_inputs.lock().unwrap().clone()
    }

    pub fn search_limits(&self) -> Vec<usize> {
        self.search_limits.lock().unwrap().clone()
    }

    fn credential(&self, cred_id: &str) -> VcxCoreResult<&CredentialInfo> {
        self.credentials
            .get(cred_id)
            .ok_or_else(|| VcxCoreError::RecordNotFound {
                category: "Indy::Credential".to_owned(),
                id: cred_id.to_owned(),
            })
    }
}

#[async_trait]
impl BaseAnonCreds for MockAnoncreds {
    async fn prover_get_credential(&self, cred_id: &str) -> VcxCoreResult<CredentialInfo> {
        self.credential_lookups.hit(cred_id);
        self.credential(cred_id).cloned()
    }

    async fn prover_create_proof(
        &self,
        _proof_req_json: &str,
        requested_credentials_json: &str,
        master_secret_id: &str,
        schemas: &SchemasMap,
        credential_defs: &CredentialDefinitionsMap,
        revoc_states: &RevocationStatesMap,
    ) -> VcxCoreResult<String> {
        *self.proof_inputs.lock().unwrap() = Some(ProofInputs {
            master_secret_id: master_secret_id.to_owned(),
            schemas: schemas.clone(),
            credential_defs: credential_defs.clone(),
            revoc_states: revoc_states.clone(),
        });
        if self.fail_proof_creation {
            return Err(VcxCoreError::CryptoFailure(
                "proof generation rejected the credential selection".to_owned(),
            ));
        }

        let requested: RequestedCredentials = serde_json::from_str(requested_credentials_json)?;
        let mut identifiers = Vec::new();
        for choice in requested.choices() {
            let info = self.credential(choice.cred_id)?;
            identifiers.push(json!({
                "schema_id": info.schema_id,
                "cred_def_id": info.cred_def_id,
                "rev_reg_id": info.rev_reg_id,
                "timestamp": info.rev_reg_id.as_ref().and(choice.timestamp),
            }));
        }
        Ok(json!({
            "proof": { "proofs": [], "aggregated_proof": {} },
            "requested_proof": { "revealed_attrs": {}, "predicates": {} },
            "identifiers": identifiers,
        })
        .to_string())
    }

    async fn verifier_verify_proof(
        &self,
        _proof_req_json: &str,
        _proof_json: &str,
        schemas: &SchemasMap,
        credential_defs: &CredentialDefinitionsMap,
        rev_reg_defs: &RevocationRegistryDefinitionsMap,
        rev_reg_deltas: &RevocationRegistryDeltasMap,
    ) -> VcxCoreResult<bool> {
        *self.verify_inputs.lock().unwrap() = Some(VerifyInputs {
            schemas: schemas.clone(),
            credential_defs: credential_defs.clone(),
            rev_reg_defs: rev_reg_defs.clone(),
            rev_reg_deltas: rev_reg_deltas.clone(),
        });
        Ok(self.verify_result)
    }

    async fn create_revocation_state(
        &self,
        tails: &TailsReader,
        rev_reg_def: &Value,
        rev_reg_delta: &Value,
        timestamp: u64,
        cred_rev_id: &str,
    ) -> VcxCoreResult<Value> {
        self.revocation_states
            .hit(&format!("{}:{}", tails.file.rev_reg_id, timestamp));
        Ok(json!({
            "rev_reg_id": rev_reg_def["id"],
            "accum": rev_reg_delta["value"]["accum"],
            "timestamp": timestamp,
            "cred_rev_id": cred_rev_id,
        }))
    }

    async fn prover_search_credentials_for_proof_req(
        &self,
        _proof_req_json: &str,
        _referent: &str,
        limit: usize,
    ) -> VcxCoreResult<Vec<RetrievedCredential>> {
        self.search_limits.lock().unwrap().push(limit);
        let mut credentials: Vec<RetrievedCredential> = self
            .credentials
            .values()
            .map(|info| RetrievedCredential {
                cred_info: info.clone(),
                interval: None,
            })
            .collect();
        credentials.sort_by(|a, b| a.cred_info.referent.cmp(&b.cred_info.referent));
        credentials.truncate(limit);
        Ok(credentials)
    }
}
