use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

/// Holder-authored choice of credentials, one entry per referent of the proof request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
pub struct RequestedCredentials {
    #[serde(default)]
    pub self_attested_attributes: HashMap<String, String>,
    #[serde(default)]
    pub requested_attributes: HashMap<String, RequestedAttribute>,
    #[serde(default)]
    pub requested_predicates: HashMap<String, RequestedPredicate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RequestedAttribute {
    pub cred_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<u64>,
    #[serde(default = "default_revealed")]
    pub revealed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RequestedPredicate {
    pub cred_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<u64>,
}

fn default_revealed() -> bool {
    true
}

/// A single chosen credential, whether it satisfies an attribute or a predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CredentialChoice<'a> {
    pub referent: &'a str,
    pub cred_id: &'a str,
    pub timestamp: Option<u64>,
}

impl RequestedCredentials {
    /// Attribute choices followed by predicate choices.
    pub fn choices(&self) -> impl Iterator<Item = CredentialChoice<'_>> {
        let attrs = self
            .requested_attributes
            .iter()
            .map(|(referent, attr)| CredentialChoice {
                referent,
                cred_id: &attr.cred_id,
                timestamp: attr.timestamp,
            });
        let preds = self
            .requested_predicates
            .iter()
            .map(|(referent, pred)| CredentialChoice {
                referent,
                cred_id: &pred.cred_id,
                timestamp: pred.timestamp,
            });
        attrs.chain(preds)
    }

    /// Distinct credential ids referenced by any choice.
    pub fn credential_identifiers(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.choices()
            .filter(|choice| seen.insert(choice.cred_id))
            .map(|choice| choice.cred_id.to_owned())
            .collect()
    }
}
