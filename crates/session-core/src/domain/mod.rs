//! Domain types

pub mod cookie;

pub use cookie::{CookieAttributes, SameSite};
