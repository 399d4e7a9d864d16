pub mod error;
mod mapping_core;
mod mapping_others;
