pub mod present;
pub mod request;
