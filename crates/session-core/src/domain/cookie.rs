//! Cookie attributes as written by the session issuer

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SameSite {
    Strict,
    Lax,
    None,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieAttributes {
    pub http_only: bool,
    pub secure: bool,
    pub same_site: SameSite,
    pub expires: DateTime<Utc>,
    pub path: String,
}

impl CookieAttributes {
    /// Attributes for the session cookie: script-inaccessible, lax
    /// cross-site policy, scoped to the whole site.
    pub fn session(expires: DateTime<Utc>, secure: bool) -> Self {
        Self {
            http_only: true,
            secure,
            same_site: SameSite::Lax,
            expires,
            path: session_shared::constants::SESSION_COOKIE_PATH.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_attributes() {
        let expires = Utc::now();
        let attrs = CookieAttributes::session(expires, true);
        assert!(attrs.http_only);
        assert!(attrs.secure);
        assert_eq!(attrs.same_site, SameSite::Lax);
        assert_eq!(attrs.path, "/");
        assert_eq!(attrs.expires, expires);
    }
}
