use std::collections::HashMap;

use aries_proof_core::{
    connection::{ConnectionRecord, ConnectionService, ConnectionState},
    errors::error::{VcxCoreError, VcxCoreResult},
};
use async_trait::async_trait;

use crate::constants::{CONNECTION_ID, CONNECTION_ID_PENDING};

/// Knows [`CONNECTION_ID`] as connected and [`CONNECTION_ID_PENDING`] as negotiating.
#[derive(Debug)]
pub struct MockConnectionService {
    connections: HashMap<String, ConnectionState>,
}

impl Default for MockConnectionService {
    fn default() -> Self {
        Self {
            connections: HashMap::from([
                (CONNECTION_ID.to_owned(), ConnectionState::Connected),
                (CONNECTION_ID_PENDING.to_owned(), ConnectionState::Negotiating),
            ]),
        }
    }
}

#[async_trait]
impl ConnectionService for MockConnectionService {
    async fn get_connection(&self, connection_id: &str) -> VcxCoreResult<ConnectionRecord> {
        let state = self
            .connections
            .get(connection_id)
            .copied()
            .ok_or_else(|| VcxCoreError::RecordNotFound {
                category: "ConnectionRecord".to_owned(),
                id: connection_id.to_owned(),
            })?;
        Ok(ConnectionRecord {
            id: connection_id.to_owned(),
            state,
        })
    }
}
