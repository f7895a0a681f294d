//! Token computation: canonical text plus a one-way digest.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha1::Sha1;
use sha2::{Digest, Sha256};

use crate::serializer::{canonical_text, CanonicalError};
use crate::token::Token;

/// Supported digest algorithms for tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DigestAlg {
    /// SHA-1: the 160-bit reference digest (40 hex digits).
    #[serde(rename = "sha-1")]
    Sha1,
    /// SHA-256 (64 hex digits).
    #[serde(rename = "sha-256")]
    Sha256,
}

/// Serializer function used to render canonical text prior to hashing.
pub type Serializer = fn(&Value) -> Result<String, CanonicalError>;

/// Computes tokens from canonical values.
///
/// The serializer and the digest algorithm are fixed at construction; a
/// given tokenizer always produces the same token for the same canonical
/// form, across process runs. There is no process-wide default
/// configuration; construct one explicitly.
#[derive(Debug, Clone, Copy)]
pub struct Tokenizer {
    alg: DigestAlg,
    serializer: Serializer,
}

impl Tokenizer {
    /// Creates a tokenizer from an algorithm and a serializer function.
    pub fn new(alg: DigestAlg, serializer: Serializer) -> Self {
        Self { alg, serializer }
    }

    /// Tokenizer using the SHA-1 reference digest over canonical text.
    pub fn sha1() -> Self {
        Self::new(DigestAlg::Sha1, canonical_text)
    }

    /// Tokenizer using SHA-256 over canonical text.
    pub fn sha256() -> Self {
        Self::new(DigestAlg::Sha256, canonical_text)
    }

    /// The digest algorithm in use.
    pub fn alg(&self) -> DigestAlg {
        self.alg
    }

    /// Serializes `value` canonically and digests the UTF-8 bytes,
    /// rendering the result as lowercase hex.
    pub fn token(&self, value: &Value) -> Result<Token, CanonicalError> {
        let text = (self.serializer)(value)?;
        let digest = match self.alg {
            DigestAlg::Sha1 => hex::encode(Sha1::digest(text.as_bytes())),
            DigestAlg::Sha256 => hex::encode(Sha256::digest(text.as_bytes())),
        };
        Ok(Token::new(digest))
    }
}
