//! Canonical value primitives for tokentree structures.
//!
//! This crate provides:
//! - `Node`: the annotated input tree handed to the transform engine
//! - `canonical_text`: deterministic text rendering of canonical values
//! - `Token` and `Tokenizer`: content-derived identifiers and their digests
//!
//! Every piece that participates in hashing lives in this crate.

#![deny(missing_docs)]

/// Annotated input node tree.
pub mod node;
/// Canonical text rendering.
pub mod serializer;
/// Token newtype and validation.
pub mod token;
/// Digest-based token computation.
pub mod tokenizer;

pub use node::{annotate, Node};
pub use serializer::{canonical_text, CanonicalError};
pub use token::{Token, TokenParseError};
pub use tokenizer::{DigestAlg, Serializer, Tokenizer};

/// Canonical value type: JSON values whose object maps keep sorted keys.
///
/// Tokens appear inside canonical values as plain strings; nothing in the
/// value form distinguishes a token from ordinary text. That is deliberate:
/// a persisted structure is itself an ordinary canonical value.
pub type Value = serde_json::Value;
