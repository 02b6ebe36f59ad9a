//! Common types

use serde::{Deserialize, Serialize};

/// Identity asserted by a session token.
///
/// Both fields are caller-supplied and carried as-is; nothing here checks
/// their format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionClaims {
    pub user_id: String,
    pub email: String,
}

impl SessionClaims {
    pub fn new(user_id: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            email: email.into(),
        }
    }
}
