//! # Session API
//! 
//! axum bindings for the session issuer: request cookie scope, handlers, router.

pub mod cookies;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use cookies::{request_cookie_scope, CurrentRequest, RequestCookies};
pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
