use serde::{Deserialize, Serialize};

/// Per-sub-proof ledger references carried in a completed proof.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProofIdentifier {
    pub schema_id: String,
    pub cred_def_id: String,
    #[serde(default)]
    pub rev_reg_id: Option<String>,
    #[serde(default)]
    pub timestamp: Option<u64>,
}

/// The part of a proof the verifier needs before handing it to the crypto provider.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
pub struct PartialProof {
    #[serde(default)]
    pub identifiers: Vec<ProofIdentifier>,
}
