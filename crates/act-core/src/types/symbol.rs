//! Ticker symbol type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// Maximum symbol length accepted by the API.
const MAX_LEN: usize = 10;

/// A validated ticker symbol (e.g. `AAPL`, `BTC-USD`).
///
/// Symbols are 1 to 10 characters of ASCII letters, digits, `.` and `-`,
/// normalized to uppercase.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Symbol(String);

impl Symbol {
    /// Create a new symbol from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the symbol is empty, too long, or contains
    /// characters outside the allowed set.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref().trim();

        if s.is_empty() {
            return Err(InvalidInputError::Symbol {
                value: s.to_string(),
                reason: "must not be empty".to_string(),
            }
            .into());
        }

        if s.len() > MAX_LEN {
            return Err(InvalidInputError::Symbol {
                value: s.to_string(),
                reason: format!("must be at most {} characters", MAX_LEN),
            }
            .into());
        }

        if !s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
        {
            return Err(InvalidInputError::Symbol {
                value: s.to_string(),
                reason: "may only contain letters, digits, '.' and '-'".to_string(),
            }
            .into());
        }

        Ok(Self(s.to_ascii_uppercase()))
    }

    /// Returns the symbol as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Symbol {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for Symbol {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Symbol {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Symbol::new(&s).map_err(serde::de::Error::custom)
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_symbols() {
        assert_eq!(Symbol::new("AAPL").unwrap().as_str(), "AAPL");
        assert_eq!(Symbol::new("btc-usd").unwrap().as_str(), "BTC-USD");
        assert_eq!(Symbol::new("BRK.B").unwrap().as_str(), "BRK.B");
    }

    #[test]
    fn rejects_empty_symbol() {
        assert!(Symbol::new("").is_err());
        assert!(Symbol::new("   ").is_err());
    }

    #[test]
    fn rejects_overlong_symbol() {
        assert!(Symbol::new("ABCDEFGHIJK").is_err());
    }

    #[test]
    fn rejects_invalid_characters() {
        assert!(Symbol::new("AA PL").is_err());
        assert!(Symbol::new("AAPL$").is_err());
    }
}
