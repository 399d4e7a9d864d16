use std::sync::Mutex;

use aries_proof_core::events::{EventBus, ServiceMessageProcessingEvent};

#[derive(Debug, Default)]
pub struct RecordingEventBus {
    events: Mutex<Vec<ServiceMessageProcessingEvent>>,
}

impl RecordingEventBus {
    pub fn events(&self) -> Vec<ServiceMessageProcessingEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl EventBus for RecordingEventBus {
    fn publish(&self, event: ServiceMessageProcessingEvent) {
        self.events.lock().unwrap().push(event);
    }
}
