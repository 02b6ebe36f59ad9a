//! # Session Shared
//! 
//! Configuration, telemetry, constants and claim types shared by the session crates.

pub mod constants;
pub mod types;
pub mod telemetry;
pub mod config;
pub mod error;

pub use types::*;
pub use error::AppError;
