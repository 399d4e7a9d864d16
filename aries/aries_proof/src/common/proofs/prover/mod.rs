pub mod prover_internal;
