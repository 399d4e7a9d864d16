use std::sync::Arc;

use typed_builder::TypedBuilder;

use crate::{
    anoncreds::base_anoncreds::BaseAnonCreds, connection::ConnectionService,
    ledger::base_ledger::AnoncredsLedgerRead, provisioning::ProvisioningService,
    wallet::record_store::RecordStore,
};

/// Wallet and pool scoped collaborators, passed explicitly to every protocol operation.
#[derive(Debug, Clone, TypedBuilder)]
pub struct AgentContext {
    pub record_store: Arc<dyn RecordStore>,
    pub ledger: Arc<dyn AnoncredsLedgerRead>,
    pub anoncreds: Arc<dyn BaseAnonCreds>,
    pub connections: Arc<dyn ConnectionService>,
    pub provisioning: Arc<dyn ProvisioningService>,
}
