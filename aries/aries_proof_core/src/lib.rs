//! Data types and collaborator interfaces consumed by the present-proof protocol engine.
//!
//! Nothing in this crate talks to a network, a wallet or a ledger: every external capability is
//! expressed as an async trait, and an [`context::AgentContext`] bundles the wallet-scoped
//! implementations for one agent.

pub mod anoncreds;
pub mod connection;
pub mod context;
pub mod data_types;
pub mod errors;
pub mod events;
pub mod ledger;
pub mod provisioning;
pub mod tails;
pub mod transport;
pub mod wallet;
