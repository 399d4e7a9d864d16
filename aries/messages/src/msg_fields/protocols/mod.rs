pub mod present_proof;
