//! Token signer trait (port)

use chrono::{DateTime, Utc};
use session_security::JwtSigner;
use session_shared::SessionClaims;

use crate::error::SessionError;

#[cfg_attr(test, mockall::automock)]
pub trait TokenSigner: Send + Sync {
    fn sign(&self, claims: &SessionClaims, expires_at: DateTime<Utc>) -> Result<String, SessionError>;
}

impl TokenSigner for JwtSigner {
    fn sign(&self, claims: &SessionClaims, expires_at: DateTime<Utc>) -> Result<String, SessionError> {
        Ok(JwtSigner::sign(self, claims, expires_at)?)
    }
}
