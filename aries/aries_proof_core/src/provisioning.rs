use std::fmt::Debug;

use async_trait::async_trait;
use messages::decorators::service::Service;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::errors::error::VcxCoreResult;

/// Where and how this agent can be reached without an established connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentEndpoint {
    pub uri: Url,
    pub verkey: String,
    #[serde(default)]
    pub routing_keys: Vec<String>,
}

/// Per-wallet agent provisioning data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvisioningRecord {
    pub master_secret_id: String,
    pub endpoint: AgentEndpoint,
}

impl ProvisioningRecord {
    pub fn to_service_decorator(&self) -> Service {
        Service::builder()
            .recipient_keys(vec![self.endpoint.verkey.clone()])
            .routing_keys(self.endpoint.routing_keys.clone())
            .service_endpoint(self.endpoint.uri.clone())
            .build()
    }
}

#[async_trait]
pub trait ProvisioningService: Debug + Send + Sync {
    async fn get_provisioning(&self) -> VcxCoreResult<ProvisioningRecord>;
}
