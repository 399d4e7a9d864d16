#![allow(clippy::result_large_err)]
#![deny(clippy::unwrap_used)]

//! Present-proof 1.0 protocol engine.
//!
//! [`handlers::proof_presentation::service::ProofService`] drives both roles of the exchange. The
//! ledger aggregation, revocation-state and wire-codec steps it composes live under [`common`]
//! and [`protocols`].

#[macro_use]
extern crate log;

#[macro_use]
extern crate serde;

pub extern crate aries_proof_core;
pub extern crate messages;

pub mod utils;

#[macro_use]
pub mod handlers;

pub mod common;
pub mod errors;
pub mod global;
pub mod protocols;
