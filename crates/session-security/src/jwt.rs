//! JWT token handling

use chrono::{DateTime, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use session_shared::SessionClaims;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JwtError {
    #[error("Signing secret is empty")]
    MissingSecret,
    #[error("Token creation failed: {0}")]
    CreationError(String),
    #[error("Token validation failed: {0}")]
    ValidationError(String),
    #[error("Token expired")]
    TokenExpired,
}

/// Wire payload: the session claims plus the standard `exp` claim.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SessionPayload {
    #[serde(flatten)]
    claims: SessionClaims,
    exp: i64,
}

/// Claims recovered from a token that passed signature and expiry checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedSession {
    pub claims: SessionClaims,
    pub expires_at: DateTime<Utc>,
}

/// HS256 signer holding the process-wide secret.
pub struct JwtSigner {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtSigner {
    pub fn new(secret: impl Into<String>) -> Result<Self, JwtError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(JwtError::MissingSecret);
        }
        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        })
    }

    /// Sign `claims` with `exp` set to `expires_at` (whole seconds).
    pub fn sign(&self, claims: &SessionClaims, expires_at: DateTime<Utc>) -> Result<String, JwtError> {
        let payload = SessionPayload {
            claims: claims.clone(),
            exp: expires_at.timestamp(),
        };
        encode(&Header::new(Algorithm::HS256), &payload, &self.encoding_key)
            .map_err(|e| JwtError::CreationError(e.to_string()))
    }

    pub fn verify(&self, token: &str) -> Result<VerifiedSession, JwtError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let data = decode::<SessionPayload>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => JwtError::TokenExpired,
                _ => JwtError::ValidationError(e.to_string()),
            }
        })?;

        let expires_at = DateTime::from_timestamp(data.claims.exp, 0)
            .ok_or_else(|| JwtError::ValidationError("exp out of range".to_string()))?;

        Ok(VerifiedSession {
            claims: data.claims.claims,
            expires_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
    use chrono::Duration;

    const SECRET: &str = "development-secret-key";

    fn segment_json(token: &str, index: usize) -> serde_json::Value {
        let segment = token.split('.').nth(index).unwrap();
        let bytes = URL_SAFE_NO_PAD.decode(segment).unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_sign_and_verify() {
        let signer = JwtSigner::new(SECRET).unwrap();
        let claims = SessionClaims::new("user-42", "hello@example.com");
        let expires_at = Utc::now() + Duration::days(7);

        let token = signer.sign(&claims, expires_at).unwrap();
        assert_eq!(token.split('.').count(), 3);

        let verified = signer.verify(&token).unwrap();
        assert_eq!(verified.claims, claims);
        assert_eq!(verified.expires_at.timestamp(), expires_at.timestamp());
    }

    #[test]
    fn test_header_and_payload_shape() {
        let signer = JwtSigner::new(SECRET).unwrap();
        let expires_at = Utc::now() + Duration::days(7);
        let token = signer
            .sign(&SessionClaims::new("user-1", "test@example.com"), expires_at)
            .unwrap();

        let header = segment_json(&token, 0);
        assert_eq!(header["alg"], "HS256");

        let payload = segment_json(&token, 1);
        let keys: Vec<&String> = payload.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 3);
        assert_eq!(payload["userId"], "user-1");
        assert_eq!(payload["email"], "test@example.com");
        assert_eq!(payload["exp"], expires_at.timestamp());
    }

    #[test]
    fn test_unicode_and_empty_claims() {
        let signer = JwtSigner::new(SECRET).unwrap();
        let expires_at = Utc::now() + Duration::days(7);

        for (user_id, email) in [("ユーザー-7", "δοκιμή@παράδειγμα.ελ"), ("", ""), ("id", "not-an-email")] {
            let claims = SessionClaims::new(user_id, email);
            let token = signer.sign(&claims, expires_at).unwrap();
            assert_eq!(signer.verify(&token).unwrap().claims, claims);
        }
    }

    #[test]
    fn test_empty_secret_rejected() {
        assert!(matches!(JwtSigner::new(""), Err(JwtError::MissingSecret)));
    }

    #[test]
    fn test_expired_token_rejected() {
        let signer = JwtSigner::new(SECRET).unwrap();
        let token = signer
            .sign(&SessionClaims::new("user-1", "a@b.c"), Utc::now() - Duration::hours(1))
            .unwrap();
        assert!(matches!(signer.verify(&token), Err(JwtError::TokenExpired)));
    }

    #[test]
    fn test_foreign_secret_rejected() {
        let signer = JwtSigner::new(SECRET).unwrap();
        let other = JwtSigner::new("another-secret").unwrap();
        let token = other
            .sign(&SessionClaims::new("user-1", "a@b.c"), Utc::now() + Duration::days(1))
            .unwrap();
        assert!(matches!(signer.verify(&token), Err(JwtError::ValidationError(_))));
    }

    #[test]
    fn test_tampered_payload_rejected() {
        let signer = JwtSigner::new(SECRET).unwrap();
        let token = signer
            .sign(&SessionClaims::new("user-1", "a@b.c"), Utc::now() + Duration::days(1))
            .unwrap();

        let forged = SessionPayload {
            claims: SessionClaims::new("admin", "a@b.c"),
            exp: (Utc::now() + Duration::days(1)).timestamp(),
        };
        let forged_segment = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&forged).unwrap());
        let parts: Vec<&str> = token.split('.').collect();
        let tampered = format!("{}.{}.{}", parts[0], forged_segment, parts[2]);

        assert!(matches!(signer.verify(&tampered), Err(JwtError::ValidationError(_))));
        assert!(signer.verify("not-a-token").is_err());
    }
}
