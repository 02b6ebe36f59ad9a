//! # Session Security
//! 
//! Token signing and verification for session cookies.

pub mod jwt;

pub use jwt::{JwtError, JwtSigner, VerifiedSession};
