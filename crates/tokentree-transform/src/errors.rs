use thiserror::Error;

/// Errors that can occur while transforming a structure.
#[derive(Error, Debug)]
pub enum TransformError {
    /// Canonicalization or tokenization failed (e.g. a non-finite float).
    #[error(transparent)]
    Canonical(#[from] tokentree_canonical::CanonicalError),
}
