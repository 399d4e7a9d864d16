pub mod mock_anoncreds;
pub mod mock_connections;
pub mod mock_events;
pub mod mock_ledger;
pub mod mock_provisioning;
pub mod mock_tails;
pub mod mock_transport;

use std::{collections::HashMap, sync::Mutex};

/// Per-key call counter shared by the counting mocks.
#[derive(Debug, Default)]
pub struct CallCounter {
    counts: Mutex<HashMap<String, usize>>,
}

impl CallCounter {
    pub fn hit(&self, key: &str) {
        *self
            .counts
            .lock()
            .unwrap()
            .entry(key.to_owned())
            .or_default() += 1;
    }

    pub fn count(&self, key: &str) -> usize {
        self.counts.lock().unwrap().get(key).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.lock().unwrap().values().sum()
    }
}
