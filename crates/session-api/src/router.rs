use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::trace::{DefaultMakeSpan, TraceLayer};

use crate::cookies::request_cookie_scope;
use crate::handlers::{auth, health};
use crate::state::AppState;

pub fn build_router(state: AppState, dev_login_enabled: bool) -> Router {
    let mut auth_routes = Router::new().route("/api/v1/auth/session", get(auth::current_session));

    if dev_login_enabled {
        auth_routes = auth_routes.route("/api/v1/auth/dev-login", post(auth::dev_login));
    }

    Router::new()
        .route("/health", get(health::health_check))
        .merge(auth_routes)
        .with_state(state)
        .layer(middleware::from_fn(request_cookie_scope))
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
}
