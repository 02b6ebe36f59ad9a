//! Application error types

use thiserror::Error;

use crate::config::RuntimeEnv;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    #[error("JWT_SECRET must be set when running in {env} mode")]
    MissingSigningSecret { env: RuntimeEnv },
}
