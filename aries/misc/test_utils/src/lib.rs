#![allow(clippy::unwrap_used)]

//! In-memory collaborators, canned ledger identifiers and logging setup for tests of the
//! present-proof engine.

pub mod constants;
pub mod devsetup;
pub mod errors;
pub mod logger;
pub mod mock_wallet;
pub mod mockdata;
