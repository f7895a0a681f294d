//! Key-sorted mapping with independently tokenized values.

use std::collections::BTreeMap;

use tokentree_canonical::{annotate, Node, Token, Value};
use tokentree_store::{StoreError, StoreReader};

/// A mapping whose values each get their own token.
///
/// The node form annotates both the mapping and every value, so under the
/// include-by-annotation policy each value tokenizes independently and the
/// mapping itself persists as a thin key→token table. Equal values share a
/// token no matter which keys hold them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenDict {
    entries: BTreeMap<String, Node>,
}

impl TokenDict {
    /// Creates an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a dictionary from key/value entries.
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Node>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Inserts or replaces an entry.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Node>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Borrows the value at `key`.
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.entries.get(key)
    }

    /// Iterates over keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterates over `(key, value)` entries in sorted-key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dictionary is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Encodes this dictionary as an annotated node for transformation.
    pub fn to_node(&self) -> Node {
        annotate(Node::Mapping(
            self.entries
                .iter()
                .map(|(k, v)| (k.clone(), annotate(v.clone())))
                .collect(),
        ))
    }

    /// Rebuilds the entries from a dictionary token, resolving each value
    /// token through the reader.
    pub fn from_token<R: StoreReader + ?Sized>(
        reader: &R,
        token: &Token,
    ) -> Result<BTreeMap<String, Value>, StoreError> {
        Self::from_token_with(reader, token, |reader, token| reader.read(token))
    }

    /// Rebuilds the entries from a dictionary token, applying `builder` to
    /// each value token instead of resolving it directly.
    ///
    /// Use this to turn each value into a more specific type, e.g.
    /// `AttributeGraph::from_token`.
    pub fn from_token_with<R, T, F>(
        reader: &R,
        token: &Token,
        mut builder: F,
    ) -> Result<BTreeMap<String, T>, StoreError>
    where
        R: StoreReader + ?Sized,
        F: FnMut(&R, &Token) -> Result<T, StoreError>,
    {
        let Value::Object(map) = reader.read(token)? else {
            return Err(StoreError::Format(
                "token dictionary is not a mapping".into(),
            ));
        };

        let mut entries = BTreeMap::new();
        for (key, value) in map {
            let Value::String(value_token) = value else {
                return Err(StoreError::Format(format!(
                    "entry {:?} is not a token",
                    key
                )));
            };
            entries.insert(key, builder(reader, &Token::new(value_token))?);
        }
        Ok(entries)
    }
}
