pub mod attachment;
pub mod service;
pub mod thread;
pub mod timing;
