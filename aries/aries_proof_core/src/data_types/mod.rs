pub mod credential;
pub mod ledger;
pub mod pres_request;
pub mod presentation;
pub mod proof;
