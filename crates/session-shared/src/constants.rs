//! Application-wide constants

pub const AUTH_COOKIE_NAME: &str = "auth-token";
pub const SESSION_TTL_DAYS: i64 = 7;
pub const SESSION_COOKIE_PATH: &str = "/";
pub const DEV_FALLBACK_SECRET: &str = "development-secret-key";
pub const JWT_SECRET_ENV: &str = "JWT_SECRET";
