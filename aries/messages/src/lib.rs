#![allow(clippy::module_inception)]
#![allow(clippy::derive_partial_eq_without_eq)]
#![allow(clippy::large_enum_variant)]
#![deny(clippy::unwrap_used)]

pub mod decorators;
pub mod misc;
pub mod msg_fields;
pub mod msg_parts;
pub mod msg_types;

pub use msg_fields::protocols::present_proof::PresentProof;
