use std::collections::HashMap;

use aries_proof::{
    global::settings::ProofServiceConfig,
    handlers::proof_presentation::service::ProofService,
};
use aries_proof_core::data_types::presentation::{
    RequestedAttribute, RequestedCredentials, RequestedPredicate,
};
use test_utils::devsetup::SetupMocks;

pub fn proof_service(setup: &SetupMocks) -> ProofService {
    proof_service_with_config(setup, ProofServiceConfig::default())
}

pub fn proof_service_with_config(setup: &SetupMocks, config: ProofServiceConfig) -> ProofService {
    ProofService::new(
        setup.tails.clone(),
        setup.transport.clone(),
        setup.events.clone(),
        config,
    )
}

/// `name_1` answered by `name_cred`, `age_2` by `age_cred`.
pub fn requested_credentials(
    name_cred: (&str, Option<u64>),
    age_cred: (&str, Option<u64>),
) -> RequestedCredentials {
    RequestedCredentials {
        self_attested_attributes: HashMap::new(),
        requested_attributes: HashMap::from([(
            "name_1".to_owned(),
            RequestedAttribute {
                cred_id: name_cred.0.to_owned(),
                timestamp: name_cred.1,
                revealed: true,
            },
        )]),
        requested_predicates: HashMap::from([(
            "age_2".to_owned(),
            RequestedPredicate {
                cred_id: age_cred.0.to_owned(),
                timestamp: age_cred.1,
            },
        )]),
    }
}
