use std::fmt::Debug;

use async_trait::async_trait;
use serde_json::Value;

use crate::{
    data_types::{
        credential::{CredentialInfo, RetrievedCredential},
        ledger::{
            CredentialDefinitionsMap, RevocationRegistryDefinitionsMap,
            RevocationRegistryDeltasMap, RevocationStatesMap, SchemasMap,
        },
    },
    errors::error::VcxCoreResult,
    tails::TailsReader,
};

/// Zero-knowledge credential cryptography as consumed by the proof engine. The inputs follow the
/// indy anoncreds API: request and credential selections are passed as JSON strings, ledger
/// objects as id-keyed maps.
#[async_trait]
pub trait BaseAnonCreds: Debug + Send + Sync {
    async fn prover_get_credential(&self, cred_id: &str) -> VcxCoreResult<CredentialInfo>;

    async fn prover_create_proof(
        &self,
        proof_req_json: &str,
        requested_credentials_json: &str,
        master_secret_id: &str,
        schemas: &SchemasMap,
        credential_defs: &CredentialDefinitionsMap,
        revoc_states: &RevocationStatesMap,
    ) -> VcxCoreResult<String>;

    async fn verifier_verify_proof(
        &self,
        proof_req_json: &str,
        proof_json: &str,
        schemas: &SchemasMap,
        credential_defs: &CredentialDefinitionsMap,
        rev_reg_defs: &RevocationRegistryDefinitionsMap,
        rev_reg_deltas: &RevocationRegistryDeltasMap,
    ) -> VcxCoreResult<bool>;

    async fn create_revocation_state(
        &self,
        tails: &TailsReader,
        rev_reg_def: &Value,
        rev_reg_delta: &Value,
        timestamp: u64,
        cred_rev_id: &str,
    ) -> VcxCoreResult<Value>;

    async fn prover_search_credentials_for_proof_req(
        &self,
        proof_req_json: &str,
        referent: &str,
        limit: usize,
    ) -> VcxCoreResult<Vec<RetrievedCredential>>;
}
