//! # Session Core
//! 
//! Session issuance and the collaborator ports it is wired through.

pub mod domain;
pub mod services;
pub mod ports;
pub mod error;

pub use domain::*;
pub use error::SessionError;
pub use ports::{CookieStore, RequestContext, TokenSigner};
pub use services::SessionIssuer;
