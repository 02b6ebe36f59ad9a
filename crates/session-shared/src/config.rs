//! Configuration management

use std::fmt;

use config::{Config, Environment, File, Map};
use serde::Deserialize;
use tracing::warn;

use crate::constants::{DEV_FALLBACK_SECRET, JWT_SECRET_ENV};
use crate::error::AppError;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    #[serde(default)]
    pub jwt: JwtSettings,
    pub cookie: CookieSettings,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeEnv {
    Development,
    Production,
}

impl RuntimeEnv {
    pub fn is_development(self) -> bool {
        matches!(self, RuntimeEnv::Development)
    }
}

impl fmt::Display for RuntimeEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuntimeEnv::Development => f.write_str("development"),
            RuntimeEnv::Production => f.write_str("production"),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: RuntimeEnv,
    pub host: String,
    pub port: u16,
    pub name: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct JwtSettings {
    #[serde(default)]
    pub secret: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CookieSettings {
    pub secure: bool,
}

impl AppConfig {
    pub fn load() -> Result<Self, AppError> {
        Self::load_from(std::env::vars().collect())
    }

    /// Build the config from an explicit set of environment variables.
    ///
    /// `APP_ENV` picks the runtime environment and defaults to production;
    /// development behaviour has to be asked for by name.
    pub fn load_from(vars: Map<String, String>) -> Result<Self, AppError> {
        let env = vars
            .get("APP_ENV")
            .cloned()
            .unwrap_or_else(|| RuntimeEnv::Production.to_string());
        let secret = vars.get(JWT_SECRET_ENV).cloned();

        let config = Config::builder()
            .set_default("app.env", env.clone())?
            .set_default("app.host", "127.0.0.1")?
            .set_default("app.port", 8080)?
            .set_default("app.name", "session-server")?
            .set_default("cookie.secure", true)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::default()
                    .separator("__")
                    .try_parsing(true)
                    .source(Some(vars)),
            )
            .set_override_option("jwt.secret", secret)?
            .build()?;
        Ok(config.try_deserialize()?)
    }

    /// Secret used to sign session tokens.
    ///
    /// Falls back to [`DEV_FALLBACK_SECRET`] only in development; any other
    /// environment must configure one.
    pub fn signing_secret(&self) -> Result<String, AppError> {
        self.jwt.resolve_secret(self.app.env)
    }
}

impl JwtSettings {
    pub fn resolve_secret(&self, env: RuntimeEnv) -> Result<String, AppError> {
        match self.secret.as_deref().map(str::trim) {
            Some(secret) if !secret.is_empty() => Ok(secret.to_string()),
            _ if env.is_development() => {
                warn!("{} not set, using development fallback secret", JWT_SECRET_ENV);
                Ok(DEV_FALLBACK_SECRET.to_string())
            }
            _ => Err(AppError::MissingSigningSecret { env }),
        }
    }
}
