pub mod app;
pub mod error;
pub mod export;
pub mod extract;
pub mod notify;
pub mod utils;
pub mod workflow;
