pub mod record;
pub mod record_store;
pub mod record_tags;
pub mod search;
