// ============================================================================
// Session Core - Session Issuer
// File: crates/session-core/src/services/session_issuer.rs
// ============================================================================
//! Issues a signed session token and stores it as the `auth-token` cookie

use std::sync::Arc;

use chrono::{Duration, SubsecRound, Utc};
use session_shared::constants::{AUTH_COOKIE_NAME, SESSION_TTL_DAYS};
use session_shared::SessionClaims;
use tracing::debug;

use crate::domain::CookieAttributes;
use crate::error::SessionError;
use crate::ports::{RequestContext, TokenSigner};

/// Stateless session issuer: the cookie is the whole session.
pub struct SessionIssuer<S: TokenSigner> {
    signer: Arc<S>,
    secure_cookies: bool,
}

impl<S: TokenSigner> SessionIssuer<S> {
    pub fn new(signer: Arc<S>) -> Self {
        Self {
            signer,
            secure_cookies: true,
        }
    }

    #[must_use]
    pub fn with_secure_cookies(mut self, secure: bool) -> Self {
        self.secure_cookies = secure;
        self
    }

    /// Sign `{ userId, email }` and write it to the request's cookie store.
    ///
    /// The store is resolved before anything is signed, and the cookie is
    /// written only once a token exists, so a failure at either step leaves
    /// no cookie behind. A store that cannot encode the cookie reports
    /// [`SessionError::InvalidCookie`].
    #[tracing::instrument(name = "create_session", skip_all, fields(user_id = %user_id))]
    pub async fn create_session<C>(
        &self,
        ctx: &C,
        user_id: &str,
        email: &str,
    ) -> Result<(), SessionError>
    where
        C: RequestContext + ?Sized,
    {
        // 1. Expiry, millisecond precision
        let expires_at = Utc::now().trunc_subsecs(3) + Duration::days(SESSION_TTL_DAYS);

        // 2. Request-scoped cookie store
        let store = ctx.cookie_store().await?;

        // 3. Sign
        let claims = SessionClaims::new(user_id, email);
        let token = self.signer.sign(&claims, expires_at)?;

        // 4. Single cookie write
        let attributes = CookieAttributes::session(expires_at, self.secure_cookies);
        store.set(AUTH_COOKIE_NAME, &token, &attributes)?;

        debug!(expires_at = %expires_at, "Session cookie issued");
        Ok(())
    }
}
