use std::fmt::Debug;

use async_trait::async_trait;
use messages::PresentProof;
use url::Url;

use crate::errors::error::VcxCoreResult;

/// Outbound delivery of a protocol message. Packing and routing are the implementor's business.
#[async_trait]
pub trait MessageTransport: Debug + Send + Sync {
    async fn send(
        &self,
        message: &PresentProof,
        recipient_key: &str,
        endpoint: &Url,
        routing_keys: &[String],
    ) -> VcxCoreResult<()>;
}
