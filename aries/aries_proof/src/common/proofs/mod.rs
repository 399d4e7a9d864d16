pub mod ledger_objects;
pub mod prover;
pub mod verifier;
