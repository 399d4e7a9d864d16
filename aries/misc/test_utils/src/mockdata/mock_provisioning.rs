use aries_proof_core::{
    errors::error::VcxCoreResult,
    provisioning::{AgentEndpoint, ProvisioningRecord, ProvisioningService},
};
use async_trait::async_trait;

use crate::constants::{ENDPOINT, MASTER_SECRET_ID, ROUTING_KEY, VERKEY};

#[derive(Debug)]
pub struct MockProvisioningService {
    record: ProvisioningRecord,
}

impl Default for MockProvisioningService {
    fn default() -> Self {
        Self {
            record: ProvisioningRecord {
                master_secret_id: MASTER_SECRET_ID.to_owned(),
                endpoint: AgentEndpoint {
                    uri: ENDPOINT.parse().unwrap(),
                    verkey: VERKEY.to_owned(),
                    routing_keys: vec![ROUTING_KEY.to_owned()],
                },
            },
        }
    }
}

#[async_trait]
impl ProvisioningService for MockProvisioningService {
    async fn get_provisioning(&self) -> VcxCoreResult<ProvisioningRecord> {
        Ok(self.record.clone())
    }
}
