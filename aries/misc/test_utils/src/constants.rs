use std::collections::HashMap;

use aries_proof_core::data_types::{
    credential::CredentialInfo,
    pres_request::{AttributeInfo, PredicateInfo, PredicateType, ProofRequest},
};

pub const SCHEMA_ID: &str = "V4SGRU86Z58d6TV7PBUe6f:2:test-licence:4.4.4";
pub const SCHEMA_ID_2: &str = "V4SGRU86Z58d6TV7PBUe6f:2:employment:1.0";
pub const CRED_DEF_ID: &str = "V4SGRU86Z58d6TV7PBUe6f:3:CL:1281:tag1";
pub const CRED_DEF_ID_2: &str = "V4SGRU86Z58d6TV7PBUe6f:3:CL:1290:tag1";
pub const REV_REG_ID: &str = "Rev1";
pub const CRED_ID: &str = "cred_id_licence";
pub const CRED_ID_2: &str = "cred_id_employment";
pub const CRED_REV_ID: &str = "12";
pub const TIMESTAMP: u64 = 1700000000;
pub const TIMESTAMP_2: u64 = 1700086400;
pub const MASTER_SECRET_ID: &str = "main";
pub const CONNECTION_ID: &str = "conn-established";
pub const CONNECTION_ID_PENDING: &str = "conn-negotiating";
pub const VERKEY: &str = "6zJ9dRYZ7XHVbJGcPcm5gPqFEWNJPLmC6BvUW1zQ5tb2";
pub const ROUTING_KEY: &str = "8HH5gYEeNc3z7PYXmd54d4x6qAfCNrqQqEB3nS7Zfu7K";
pub const ENDPOINT: &str = "https://agent.example.org/didcomm";

/// Non-revocable credential issued under [`SCHEMA_ID`] / [`CRED_DEF_ID`].
pub fn credential_info(cred_id: &str) -> CredentialInfo {
    CredentialInfo {
        referent: cred_id.to_owned(),
        attrs: HashMap::from([("name".to_owned(), "Alice".to_owned())]),
        schema_id: SCHEMA_ID.to_owned(),
        cred_def_id: CRED_DEF_ID.to_owned(),
        rev_reg_id: None,
        cred_rev_id: None,
    }
}

/// Credential revocable through [`REV_REG_ID`].
pub fn revocable_credential_info(cred_id: &str) -> CredentialInfo {
    CredentialInfo {
        rev_reg_id: Some(REV_REG_ID.to_owned()),
        cred_rev_id: Some(CRED_REV_ID.to_owned()),
        ..credential_info(cred_id)
    }
}

/// Asks for a name and an age predicate, both restricted to nothing.
pub fn proof_request() -> ProofRequest {
    ProofRequest {
        name: "licence check".to_owned(),
        version: "1.0".to_owned(),
        nonce: "123432421212".to_owned(),
        requested_attributes: HashMap::from([(
            "name_1".to_owned(),
            AttributeInfo {
                name: Some("name".to_owned()),
                ..Default::default()
            },
        )]),
        requested_predicates: HashMap::from([(
            "age_2".to_owned(),
            PredicateInfo {
                name: "age".to_owned(),
                p_type: PredicateType::GE,
                p_value: 18,
                restrictions: None,
                non_revoked: None,
            },
        )]),
        non_revoked: None,
        ver: None,
    }
}
