//! Error types for the ACT client.
//!
//! This module provides a unified error type with explicit variants for
//! transport, HTTP status, authentication, token, decode, storage, and
//! input validation failures.

use std::fmt;
use thiserror::Error;

/// The unified error type for ACT client operations.
///
/// Every failure mode in the client maps to exactly one of these variants,
/// so callers can distinguish "the network was down" from "the server said
/// no" from "the session is gone".
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (DNS, TLS, connection, timeout). No response
    /// was received from the server.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// A response was received with a non-success HTTP status.
    #[error("status error: {0}")]
    Status(#[from] StatusError),

    /// Authentication errors (credentials rejected, expired session).
    #[error("authentication error: {0}")]
    Auth(#[from] AuthError),

    /// A token could not be decoded.
    #[error("token error: {0}")]
    Token(#[from] TokenError),

    /// A response body could not be decoded as the expected JSON.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// The durable token store failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Input validation errors (invalid API URL or symbol format).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out: {message}")]
    Timeout { message: String },

    /// Generic HTTP transport error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// A received response with a non-success HTTP status.
///
/// Carries the error `code` and human-readable `detail` from the response
/// body when the server sent them.
#[derive(Debug)]
pub struct StatusError {
    /// HTTP status code.
    pub status: u16,
    /// Machine-readable error code (e.g. `token_not_valid`), if present.
    pub code: Option<String>,
    /// Error message from the server, if present.
    pub detail: Option<String>,
}

impl StatusError {
    /// Create a new status error.
    pub fn new(status: u16, code: Option<String>, detail: Option<String>) -> Self {
        Self {
            status,
            code,
            detail,
        }
    }

    /// Check if this status indicates a rejected or expired credential.
    pub fn is_auth_error(&self) -> bool {
        self.status == 401 || self.code.as_deref() == Some("token_not_valid")
    }
}

impl fmt::Display for StatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref code) = self.code {
            write!(f, " [{}]", code)?;
        }
        if let Some(ref detail) = self.detail {
            write!(f, ": {}", detail)?;
        }
        Ok(())
    }
}

impl std::error::Error for StatusError {}

/// Authentication-related errors.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The token endpoint rejected the supplied credentials.
    #[error("credentials rejected (HTTP {status})")]
    CredentialsRejected {
        status: u16,
        detail: Option<String>,
    },

    /// A request was refused with 401 and the refresh attempt did not yield
    /// a new access token.
    #[error("session expired")]
    SessionExpired,
}

/// Token decoding errors.
#[derive(Debug, Error)]
pub enum TokenError {
    /// The token does not have the expected JWT structure.
    #[error("malformed token: {reason}")]
    Malformed { reason: String },
}

/// Response body decoding errors.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The response body was not the expected JSON shape.
    #[error("invalid response body: {message}")]
    Body { message: String },
}

/// Durable store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    #[error("store I/O failed: {message}")]
    Io { message: String },

    /// The stored state could not be parsed.
    #[error("store state is corrupt: {message}")]
    Corrupt { message: String },
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid API base URL.
    #[error("invalid API URL '{value}': {reason}")]
    ApiUrl { value: String, reason: String },

    /// Invalid ticker symbol.
    #[error("invalid symbol '{value}': {reason}")]
    Symbol { value: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_display_includes_code_and_detail() {
        let err = StatusError::new(
            401,
            Some("token_not_valid".to_string()),
            Some("Token is invalid or expired".to_string()),
        );
        let rendered = err.to_string();
        assert!(rendered.contains("401"));
        assert!(rendered.contains("token_not_valid"));
        assert!(rendered.contains("invalid or expired"));
    }

    #[test]
    fn status_error_recognizes_auth_failures() {
        assert!(StatusError::new(401, None, None).is_auth_error());
        assert!(StatusError::new(403, Some("token_not_valid".into()), None).is_auth_error());
        assert!(!StatusError::new(404, None, None).is_auth_error());
    }
}
