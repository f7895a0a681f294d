//! JSON document persistence for token stores.
//!
//! The document form is a two-element array `[tokenmap, head]`: an object
//! keyed by token text, and the head token (or null). The map is written
//! with sorted keys, so equal stores serialize identically.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use tokentree_canonical::{Token, Value};

use crate::error::StoreError;
use crate::memory::MemoryStore;
use crate::traits::{StoreReader, StoreWriter};

/// Reads a store document from a UTF-8 JSON stream.
pub fn read_stream<R: Read>(reader: R) -> Result<MemoryStore, StoreError> {
    let document: Value = serde_json::from_reader(reader)?;

    let Value::Array(mut parts) = document else {
        return Err(StoreError::Format("expected a two-element array".into()));
    };
    if parts.len() != 2 {
        return Err(StoreError::Format(format!(
            "expected a two-element array, found {} elements",
            parts.len()
        )));
    }
    let head = parts.pop().unwrap_or(Value::Null);
    let tokenmap = parts.pop().unwrap_or(Value::Null);

    let Value::Object(entries) = tokenmap else {
        return Err(StoreError::Format("tokenmap is not an object".into()));
    };
    let head = match head {
        Value::Null => None,
        Value::String(s) => Some(Token::new(s)),
        _ => return Err(StoreError::Format("head is not a token string".into())),
    };

    let mut store = MemoryStore::new();
    for (token, value) in entries {
        store.insert(Token::new(token), value);
    }
    store.set_head(head);
    Ok(store)
}

/// Writes a store document to a UTF-8 JSON stream.
pub fn write_stream<W: Write>(writer: W, store: &MemoryStore) -> Result<(), StoreError> {
    let tokenmap: BTreeMap<&str, &Value> = store
        .iter()
        .map(|(token, value)| (token.as_str(), value))
        .collect();
    let head = store.head().map(Token::as_str);

    let mut writer = BufWriter::new(writer);
    serde_json::to_writer(&mut writer, &(tokenmap, head))?;
    writer.flush()?;
    Ok(())
}

/// Reads a store document from a file.
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<MemoryStore, StoreError> {
    let file = File::open(path)?;
    read_stream(BufReader::new(file))
}

/// Writes a store document to a file, replacing any existing content.
pub fn write_file<P: AsRef<Path>>(path: P, store: &MemoryStore) -> Result<(), StoreError> {
    let file = File::create(path)?;
    write_stream(file, store)
}
