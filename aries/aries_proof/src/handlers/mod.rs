#[macro_use]
pub mod util;

pub mod proof_presentation;
