//! Storage traits: the reader and writer/sink contracts.

use tokentree_canonical::{Token, Value};

use crate::error::StoreError;

/// Read access to a token store.
pub trait StoreReader {
    /// Returns the canonical value bound to `token`.
    ///
    /// Fails with [`StoreError::UnknownToken`] for tokens the store does
    /// not hold.
    fn read(&self, token: &Token) -> Result<Value, StoreError>;

    /// The head token: identity of the most recently completed top-level
    /// structure, if any.
    fn head(&self) -> Option<&Token>;
}

/// Write access to a token store.
pub trait StoreWriter {
    /// Binds `token` to `value`. Re-inserting an existing token is a no-op
    /// in effect: equal tokens imply equal canonical values.
    fn insert(&mut self, token: Token, value: Value);

    /// Sets (or clears) the head token.
    fn set_head(&mut self, head: Option<Token>);

    /// Ingests `(token, value)` pairs in order, leaving the head at the
    /// last token seen.
    ///
    /// Feeding a transform's output stream here in emission order makes
    /// the head the token of the top-level structure.
    fn populate<I>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (Token, Value)>,
        Self: Sized,
    {
        for (token, value) in pairs {
            let head = token.clone();
            self.insert(token, value);
            self.set_head(Some(head));
        }
    }
}
