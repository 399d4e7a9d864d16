use std::fmt::Debug;

use serde::{Deserialize, Serialize};

/// Raised after an inbound protocol message has been processed and its record persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceMessageProcessingEvent {
    pub record_id: String,
    /// Always the `https://didcomm.org/` form of the type URI. Messages received under the
    /// legacy `did:sov:` prefix are reported under the canonical one.
    pub message_type: String,
    pub thread_id: String,
}

/// Fire-and-forget event sink.
pub trait EventBus: Debug + Send + Sync {
    fn publish(&self, event: ServiceMessageProcessingEvent);
}
