//! In-memory store backend.

use std::collections::HashMap;

use tokentree_canonical::{Token, Value};

use crate::error::StoreError;
use crate::traits::{StoreReader, StoreWriter};

/// An in-memory token store with both the read and write interfaces.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tokenmap: HashMap<Token, Value>,
    head: Option<Token>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store from an existing token map and head.
    pub fn from_parts(tokenmap: HashMap<Token, Value>, head: Option<Token>) -> Self {
        Self { tokenmap, head }
    }

    /// Borrows the value bound to `token`, if present.
    pub fn get(&self, token: &Token) -> Option<&Value> {
        self.tokenmap.get(token)
    }

    /// Number of distinct tokens held.
    pub fn len(&self) -> usize {
        self.tokenmap.len()
    }

    /// Whether the store holds no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokenmap.is_empty()
    }

    /// Iterates over the `(token, value)` entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&Token, &Value)> {
        self.tokenmap.iter()
    }
}

impl StoreReader for MemoryStore {
    fn read(&self, token: &Token) -> Result<Value, StoreError> {
        self.tokenmap
            .get(token)
            .cloned()
            .ok_or_else(|| StoreError::UnknownToken(token.clone()))
    }

    fn head(&self) -> Option<&Token> {
        self.head.as_ref()
    }
}

impl StoreWriter for MemoryStore {
    fn insert(&mut self, token: Token, value: Value) {
        self.tokenmap.insert(token, value);
    }

    fn set_head(&mut self, head: Option<Token>) {
        self.head = head;
    }
}
