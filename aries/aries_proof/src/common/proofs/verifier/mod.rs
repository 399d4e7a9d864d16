pub mod verifier_internal;
