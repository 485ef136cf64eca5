/// Module containing environment-variable configuration helpers
pub mod config;
/// Module containing resource identifier detection
pub mod id;
/// Module containing logging utilities
pub mod logger;

pub use id::*;
pub use logger::*;
