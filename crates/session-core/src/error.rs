//! Session errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Token signing failed: {0}")]
    SigningFailure(String),

    #[error("Cookie store unavailable: {0}")]
    ContextUnavailable(String),

    #[error("Cookie rejected by store: {0}")]
    InvalidCookie(String),
}

impl From<session_security::JwtError> for SessionError {
    fn from(e: session_security::JwtError) -> Self {
        SessionError::SigningFailure(e.to_string())
    }
}
