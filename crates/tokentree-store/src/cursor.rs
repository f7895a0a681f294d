//! Lazy reverse cursor over a persisted token graph.

use std::fmt;

use tokentree_canonical::{Token, Value};

use crate::error::StoreError;
use crate::traits::StoreReader;

/// One navigation step: a sequence index or a mapping key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Positional index into a sequence.
    Index(usize),
    /// Key lookup in a mapping.
    Key(String),
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Index(i) => write!(f, "[{}]", i),
            Step::Key(k) => f.write_str(k),
        }
    }
}

impl From<usize> for Step {
    fn from(index: usize) -> Self {
        Step::Index(index)
    }
}

impl From<&str> for Step {
    fn from(key: &str) -> Self {
        Step::Key(key.to_string())
    }
}

impl From<String> for Step {
    fn from(key: String) -> Self {
        Step::Key(key)
    }
}

/// Read-only navigator over a token-addressed structure.
///
/// Construction resolves the token immediately through the reader; each
/// [`get`](Cursor::get) resolves one child token and returns a fresh
/// cursor, leaving this one untouched. One reader call per step, no
/// caching across cursors, and nothing is ever written.
#[derive(Debug)]
pub struct Cursor<'r, R: StoreReader + ?Sized> {
    reader: &'r R,
    token: Token,
    value: Value,
}

impl<'r, R: StoreReader + ?Sized> Cursor<'r, R> {
    /// Resolves `token` against `reader` and binds a cursor to the result.
    pub fn new(reader: &'r R, token: Token) -> Result<Self, StoreError> {
        let value = reader.read(&token)?;
        Ok(Self {
            reader,
            token,
            value,
        })
    }

    /// The token this cursor is bound to.
    pub fn token(&self) -> &Token {
        &self.token
    }

    /// The canonical structure the token resolves to. Child composites
    /// that were tokenized appear here as token strings.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Steps into the child at `step`, treating the entry as a token and
    /// resolving it through the same reader.
    ///
    /// Fails with [`StoreError::MissingKey`] if the bound structure has no
    /// such entry, [`StoreError::NotAToken`] if the entry is not a token
    /// string, and [`StoreError::UnknownToken`] if the reader cannot
    /// resolve it.
    pub fn get(&self, step: impl Into<Step>) -> Result<Cursor<'r, R>, StoreError> {
        let step = step.into();
        let child = match (&step, &self.value) {
            (Step::Index(i), Value::Array(items)) => items.get(*i),
            (Step::Key(k), Value::Object(map)) => map.get(k),
            _ => None,
        };
        let child = child.ok_or_else(|| StoreError::MissingKey {
            step: step.to_string(),
        })?;

        let Value::String(token) = child else {
            return Err(StoreError::NotAToken {
                step: step.to_string(),
            });
        };
        Cursor::new(self.reader, Token::new(token.clone()))
    }
}
