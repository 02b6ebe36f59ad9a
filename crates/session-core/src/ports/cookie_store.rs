//! Request-scoped cookie store (port)

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::CookieAttributes;
use crate::error::SessionError;

/// Cookie sink bound to one request/response cycle.
///
/// A cookie that cannot be represented as given is rejected with
/// [`SessionError::InvalidCookie`] and nothing is recorded.
#[cfg_attr(test, mockall::automock)]
pub trait CookieStore: Send + Sync {
    fn set(&self, name: &str, value: &str, attributes: &CookieAttributes) -> Result<(), SessionError>;
}

/// Gives access to the cookie store of the request currently in flight.
///
/// Resolution may have to wait on the hosting framework and fails with
/// [`SessionError::ContextUnavailable`] when no request is in scope.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RequestContext: Send + Sync {
    async fn cookie_store(&self) -> Result<Arc<dyn CookieStore>, SessionError>;
}
