//! Token-addressed storage for canonical values.
//!
//! This crate provides:
//! - `StoreReader` and `StoreWriter` traits for token-keyed storage with a
//!   head pointer
//! - `MemoryStore`, the in-memory reference backend
//! - JSON document persistence (`[tokenmap, head]`) over streams and files
//! - `Cursor`, the lazy read-only navigator over a persisted token graph
//!
//! Stores are populated by draining a transform's output in emission
//! order; post-order emission means no forward references ever occur.

#![deny(missing_docs)]

/// Lazy reverse cursor over a token graph.
pub mod cursor;
/// Error types for store operations.
pub mod error;
/// JSON document persistence.
pub mod json;
/// In-memory store backend.
pub mod memory;
/// Storage traits.
pub mod traits;

pub use cursor::{Cursor, Step};
pub use error::StoreError;
pub use memory::MemoryStore;
pub use traits::{StoreReader, StoreWriter};
