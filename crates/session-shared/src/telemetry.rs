//! Telemetry setup

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset: the session crates log at info and
/// request spans from `tower_http` stay visible.
pub const DEFAULT_LOG_DIRECTIVES: &str =
    "warn,session_server=info,session_api=info,session_core=info,tower_http=info";

pub fn init_telemetry() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_DIRECTIVES));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().json().with_current_span(true).with_span_list(false))
        .init();
}
