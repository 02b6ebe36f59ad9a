use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, error};

use session_api::{build_router, AppState};
use session_security::JwtSigner;
use session_shared::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Initialize telemetry
    session_shared::telemetry::init_telemetry();

    info!("Session server starting...");

    // Load configuration
    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Signing secret is resolved once; a production deployment without one stops here
    let secret = match config.signing_secret() {
        Ok(s) => s,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };
    let signer = Arc::new(JwtSigner::new(secret)?);

    let dev_login_enabled = config.app.env.is_development();
    let state = AppState::new(signer, config.cookie.secure);
    let app = build_router(state, dev_login_enabled);

    info!(
        env = %config.app.env,
        secure_cookies = config.cookie.secure,
        dev_login = dev_login_enabled,
        "{} configured",
        config.app.name
    );

    // Bind address
    let host: std::net::IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));
    info!("Listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
