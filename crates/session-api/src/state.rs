use std::sync::Arc;

use session_core::SessionIssuer;
use session_security::JwtSigner;

#[derive(Clone)]
pub struct AppState {
    pub issuer: Arc<SessionIssuer<JwtSigner>>,
    pub signer: Arc<JwtSigner>,
}

impl AppState {
    pub fn new(signer: Arc<JwtSigner>, secure_cookies: bool) -> Self {
        let issuer = SessionIssuer::new(signer.clone()).with_secure_cookies(secure_cookies);
        Self {
            issuer: Arc::new(issuer),
            signer,
        }
    }
}
