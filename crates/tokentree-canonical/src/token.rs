use std::fmt;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Error returned when a string does not have token shape.
#[derive(thiserror::Error, Debug)]
#[error("invalid token {value:?}: expected a lowercase hex digest")]
pub struct TokenParseError {
    /// The offending input.
    pub value: String,
}

/// Opaque content-derived identifier for a canonical value.
///
/// Tokens are structural: two values with identical canonical form produce
/// the same token wherever and however often they occur. Rendered as a
/// lowercase hex digest (40 hex digits for the SHA-1 reference algorithm,
/// 64 for SHA-256).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Token(String);

impl Token {
    /// Creates a token without validation; callers are responsible for
    /// conformity.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Parses a validated token from a string (pattern: `[0-9a-f]{40,64}`).
    pub fn parse(value: impl Into<String>) -> Result<Self, TokenParseError> {
        let s = value.into();
        if !Regex::new(r"^[0-9a-f]{40,64}$")
            .expect("invalid regex")
            .is_match(&s)
        {
            return Err(TokenParseError { value: s });
        }
        Ok(Self(s))
    }

    /// Hex text of the token.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the token, returning its hex text.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for Token {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Token {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
