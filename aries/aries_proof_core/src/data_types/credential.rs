use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::pres_request::NonRevokedInterval;

/// Holder-side metadata of a stored credential.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CredentialInfo {
    pub referent: String,
    #[serde(default)]
    pub attrs: HashMap<String, String>,
    pub schema_id: String,
    pub cred_def_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rev_reg_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cred_rev_id: Option<String>,
}

/// One hit of a credential search scoped to a proof-request referent.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RetrievedCredential {
    pub cred_info: CredentialInfo,
    pub interval: Option<NonRevokedInterval>,
}
