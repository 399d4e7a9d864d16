use std::sync::Arc;

use aries_proof_core::context::AgentContext;

use crate::{
    logger::init_logger,
    mock_wallet::InMemoryRecordStore,
    mockdata::{
        mock_anoncreds::MockAnoncreds, mock_connections::MockConnectionService,
        mock_events::RecordingEventBus, mock_ledger::MockLedger,
        mock_provisioning::MockProvisioningService, mock_tails::MockTailsProvider,
        mock_transport::RecordingTransport,
    },
};

/// One agent wired to in-memory collaborators. The concrete mocks stay reachable for
/// assertions; [`SetupMocks::context`] hands out the trait-object view.
#[derive(Debug)]
pub struct SetupMocks {
    pub record_store: Arc<InMemoryRecordStore>,
    pub ledger: Arc<MockLedger>,
    pub anoncreds: Arc<MockAnoncreds>,
    pub connections: Arc<MockConnectionService>,
    pub provisioning: Arc<MockProvisioningService>,
    pub tails: Arc<MockTailsProvider>,
    pub transport: Arc<RecordingTransport>,
    pub events: Arc<RecordingEventBus>,
}

impl SetupMocks {
    pub fn init() -> SetupMocks {
        init_logger();
        SetupMocks {
            record_store: Arc::new(InMemoryRecordStore::default()),
            ledger: Arc::new(MockLedger::default()),
            anoncreds: Arc::new(MockAnoncreds::default()),
            connections: Arc::new(MockConnectionService::default()),
            provisioning: Arc::new(MockProvisioningService::default()),
            tails: Arc::new(MockTailsProvider::default()),
            transport: Arc::new(RecordingTransport::default()),
            events: Arc::new(RecordingEventBus::default()),
        }
    }

    pub fn with_ledger(mut self, ledger: MockLedger) -> Self {
        self.ledger = Arc::new(ledger);
        self
    }

    pub fn with_anoncreds(mut self, anoncreds: MockAnoncreds) -> Self {
        self.anoncreds = Arc::new(anoncreds);
        self
    }

    pub fn context(&self) -> AgentContext {
        AgentContext::builder()
            .record_store(self.record_store.clone())
            .ledger(self.ledger.clone())
            .anoncreds(self.anoncreds.clone())
            .connections(self.connections.clone())
            .provisioning(self.provisioning.clone())
            .build()
    }
}
