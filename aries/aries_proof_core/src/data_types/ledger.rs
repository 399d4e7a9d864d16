use std::collections::HashMap;

use serde_json::Value;

pub type SchemasMap = HashMap<String, Value>;
pub type CredentialDefinitionsMap = HashMap<String, Value>;
pub type RevocationRegistryDefinitionsMap = HashMap<String, Value>;
/// registry id -> (timestamp as decimal string -> revocation state)
pub type RevocationStatesMap = HashMap<String, HashMap<String, Value>>;
/// registry id -> (timestamp as decimal string -> registry delta)
pub type RevocationRegistryDeltasMap = HashMap<String, HashMap<String, Value>>;
