use std::sync::Mutex;

use aries_proof_core::{errors::error::VcxCoreResult, transport::MessageTransport};
use async_trait::async_trait;
use messages::PresentProof;
use url::Url;

#[derive(Debug, Clone, PartialEq)]
pub struct SentMessage {
    pub message: PresentProof,
    pub recipient_key: String,
    pub endpoint: Url,
    pub routing_keys: Vec<String>,
}

/// Keeps every outbound message instead of delivering it.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    sent: Mutex<Vec<SentMessage>>,
}

impl RecordingTransport {
    pub fn sent(&self) -> Vec<SentMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl MessageTransport for RecordingTransport {
    async fn send(
        &self,
        message: &PresentProof,
        recipient_key: &str,
        endpoint: &Url,
        routing_keys: &[String],
    ) -> VcxCoreResult<()> {
        self.sent.lock().unwrap().push(SentMessage {
            message: message.clone(),
            recipient_key: recipient_key.to_owned(),
            endpoint: endpoint.clone(),
            routing_keys: routing_keys.to_vec(),
        });
        Ok(())
    }
}
