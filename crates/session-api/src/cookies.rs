//! Request-scoped cookie store for axum
//!
//! Every request runs inside a task-local scope holding its own
//! [`RequestCookies`]. Code anywhere below the handler can reach it through
//! [`CurrentRequest`]; cookies written there are emitted as `Set-Cookie`
//! headers once the handler returns.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    extract::Request,
    http::{header::SET_COOKIE, HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::{self, Cookie};
use parking_lot::Mutex;
use session_core::{CookieAttributes, CookieStore, RequestContext, SameSite, SessionError};
use time::OffsetDateTime;
use tracing::warn;

tokio::task_local! {
    static REQUEST_COOKIES: Arc<RequestCookies>;
}

/// Cookies written during one request.
#[derive(Default)]
pub struct RequestCookies {
    written: Mutex<Vec<Cookie<'static>>>,
}

impl RequestCookies {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    fn written(&self) -> Vec<Cookie<'static>> {
        self.written.lock().clone()
    }

    fn write_to(&self, headers: &mut HeaderMap) {
        for cookie in self.written.lock().drain(..) {
            match HeaderValue::from_str(&cookie.to_string()) {
                Ok(value) => {
                    headers.append(SET_COOKIE, value);
                }
                Err(e) => warn!(cookie = cookie.name(), error = %e, "Dropping unencodable cookie"),
            }
        }
    }
}

impl CookieStore for RequestCookies {
    fn set(&self, name: &str, value: &str, attributes: &CookieAttributes) -> Result<(), SessionError> {
        let expires = OffsetDateTime::from_unix_timestamp(attributes.expires.timestamp())
            .map_err(|e| SessionError::InvalidCookie(format!("{name}: expiry {e}")))?;

        let cookie = Cookie::build((name.to_string(), value.to_string()))
            .http_only(attributes.http_only)
            .secure(attributes.secure)
            .same_site(same_site(attributes.same_site))
            .path(attributes.path.clone())
            .expires(expires)
            .build();

        self.written.lock().push(cookie);
        Ok(())
    }
}

fn same_site(value: SameSite) -> cookie::SameSite {
    match value {
        SameSite::Strict => cookie::SameSite::Strict,
        SameSite::Lax => cookie::SameSite::Lax,
        SameSite::None => cookie::SameSite::None,
    }
}

/// Middleware binding a fresh [`RequestCookies`] to the request.
pub async fn request_cookie_scope(request: Request, next: Next) -> Response {
    let cookies = Arc::new(RequestCookies::new());
    let mut response = REQUEST_COOKIES.scope(cookies.clone(), next.run(request)).await;
    cookies.write_to(response.headers_mut());
    response
}

/// Resolves the cookie store of the request being handled on this task.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurrentRequest;

#[async_trait]
impl RequestContext for CurrentRequest {
    async fn cookie_store(&self) -> Result<Arc<dyn CookieStore>, SessionError> {
        REQUEST_COOKIES
            .try_with(|cookies| cookies.clone() as Arc<dyn CookieStore>)
            .map_err(|_| SessionError::ContextUnavailable("no request in scope".to_string()))
    }
}
