use std::fmt::{self, Debug};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::error::VcxCoreResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConnectionState {
    Invited,
    Negotiating,
    Connected,
    Abandoned,
}

impl fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Invited => "Invited",
            Self::Negotiating => "Negotiating",
            Self::Connected => "Connected",
            Self::Abandoned => "Abandoned",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionRecord {
    pub id: String,
    pub state: ConnectionState,
}

impl ConnectionRecord {
    pub fn is_connected(&self) -> bool {
        self.state == ConnectionState::Connected
    }
}

#[async_trait]
pub trait ConnectionService: Debug + Send + Sync {
    /// Fails with `RecordNotFound` when the connection does not exist.
    async fn get_connection(&self, connection_id: &str) -> VcxCoreResult<ConnectionRecord>;
}
