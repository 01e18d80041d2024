//! Access token claims decoding.
//!
//! The API issues JWT access tokens. The client never verifies signatures
//! (that is the server's job); it only decodes the payload segment to learn
//! the user id and expiry for display and diagnostics.

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, TokenError};

/// Claims decoded from an access token payload.
///
/// All fields except `exp` are optional so that tokens from older server
/// revisions still decode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Expiration time (Unix seconds).
    pub exp: i64,

    /// Issued-at time (Unix seconds).
    #[serde(default)]
    pub iat: Option<i64>,

    /// The authenticated user's id.
    #[serde(default)]
    pub user_id: Option<i64>,

    /// Token type as stamped by the server (`access` or `refresh`).
    #[serde(default)]
    pub token_type: Option<String>,

    /// Unique token id.
    #[serde(default)]
    pub jti: Option<String>,
}

impl TokenClaims {
    /// Returns the expiry as a UTC timestamp.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }

    /// Returns true if the token is expired at the given instant.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.exp <= now.timestamp()
    }
}

/// Decode the claims from a JWT-shaped token without verifying it.
///
/// # Errors
///
/// Returns [`TokenError::Malformed`] if the token does not split into three
/// segments, the payload segment is not base64url, or the payload is not
/// valid JSON.
pub fn decode(token: &str) -> Result<TokenClaims, Error> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 {
        return Err(TokenError::Malformed {
            reason: "expected three dot-separated segments".to_string(),
        }
        .into());
    }
    let payload = segments[1];

    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|e| TokenError::Malformed {
            reason: format!("payload is not valid base64url: {}", e),
        })?;

    serde_json::from_slice(&bytes).map_err(|e| {
        TokenError::Malformed {
            reason: format!("payload is not valid claims JSON: {}", e),
        }
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn encode_token(payload: &serde_json::Value) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(payload.to_string().as_bytes());
        format!("{}.{}.signature", header, payload)
    }

    #[test]
    fn decodes_round_tripped_claims() {
        let token = encode_token(&json!({"user_id": 42, "exp": 1_900_000_000}));
        let claims = decode(&token).unwrap();
        assert_eq!(claims.user_id, Some(42));
        assert_eq!(claims.exp, 1_900_000_000);
    }

    #[test]
    fn decodes_full_claim_set() {
        let token = encode_token(&json!({
            "token_type": "access",
            "exp": 1_900_000_000,
            "iat": 1_899_999_000,
            "jti": "abc123",
            "user_id": 7
        }));
        let claims = decode(&token).unwrap();
        assert_eq!(claims.token_type.as_deref(), Some("access"));
        assert_eq!(claims.iat, Some(1_899_999_000));
        assert_eq!(claims.jti.as_deref(), Some("abc123"));
    }

    #[test]
    fn rejects_token_without_three_segments() {
        assert!(decode("").is_err());
        assert!(decode("only-one-segment").is_err());
        assert!(decode("two.segments").is_err());
        assert!(decode("a.b.c.d").is_err());
    }

    #[test]
    fn rejects_non_base64_payload() {
        assert!(decode("header.!!not-base64!!.sig").is_err());
    }

    #[test]
    fn rejects_non_json_payload() {
        let payload = URL_SAFE_NO_PAD.encode(b"not json at all");
        assert!(decode(&format!("h.{}.s", payload)).is_err());
    }

    #[test]
    fn expiry_comparison() {
        let claims = TokenClaims {
            exp: 1_000,
            iat: None,
            user_id: None,
            token_type: None,
            jti: None,
        };
        let before = DateTime::from_timestamp(999, 0).unwrap();
        let after = DateTime::from_timestamp(1_001, 0).unwrap();
        assert!(!claims.is_expired(before));
        assert!(claims.is_expired(after));
    }
}
