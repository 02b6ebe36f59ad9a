//! Domain services

pub mod session_issuer;

pub use session_issuer::SessionIssuer;
