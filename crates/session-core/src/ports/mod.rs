//! Collaborator ports

pub mod cookie_store;
pub mod token_signer;

pub use cookie_store::{CookieStore, RequestContext};
pub use token_signer::TokenSigner;

#[cfg(test)]
pub use cookie_store::{MockCookieStore, MockRequestContext};
#[cfg(test)]
pub use token_signer::MockTokenSigner;
