//! Login credentials type.

use std::fmt;

/// Login credentials for the token endpoint.
///
/// The API accepts a username, an email, or both alongside the password.
///
/// # Security
///
/// The password is never exposed in Debug output to prevent accidental
/// logging.
///
/// # Example
///
/// ```
/// use act_core::Credentials;
///
/// let creds = Credentials::with_email("a@b.com", "secret");
/// assert_eq!(creds.email(), Some("a@b.com"));
/// assert_eq!(creds.username(), None);
/// ```
#[derive(Clone)]
pub struct Credentials {
    username: Option<String>,
    email: Option<String>,
    password: String,
}

impl Credentials {
    /// Create credentials carrying both a username and an email.
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: Some(username.into()),
            email: Some(email.into()),
            password: password.into(),
        }
    }

    /// Create credentials identified by username only.
    pub fn with_username(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            email: None,
            password: password.into(),
        }
    }

    /// Create credentials identified by email only.
    pub fn with_email(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: None,
            email: Some(email.into()),
            password: password.into(),
        }
    }

    /// Returns the username, if set.
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// Returns the email, if set.
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Returns the password.
    ///
    /// # Security
    ///
    /// Use this only when constructing authentication requests.
    /// Never log or display this value.
    pub fn password(&self) -> &str {
        &self.password
    }
}

// Intentionally hide password in Debug output
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_hides_password_in_debug() {
        let creds = Credentials::new("alice", "alice@act.example", "secret123");
        let debug = format!("{:?}", creds);
        assert!(debug.contains("alice"));
        assert!(!debug.contains("secret123"));
        assert!(debug.contains("[REDACTED]"));
    }
}
