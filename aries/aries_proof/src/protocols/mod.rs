pub mod proof_presentation;
