//! Higher-level structures built on the tokenizing transform.
//!
//! This crate provides:
//! - `AttributeGraph`: an attributed hierarchical graph whose nodes,
//!   attribute tables, and member tables each receive their own token
//! - `TokenDict`: a key-sorted mapping whose values tokenize independently
//!
//! Both types encode themselves as annotated nodes for the
//! include-by-annotation policy, and both restore from a head token
//! through any store reader. Content addressing gives structural sharing
//! for free: unchanged substructures keep their tokens across versions.

#![deny(missing_docs)]

/// Attributed hierarchical graph.
pub mod attrgraph;
/// Key-sorted mapping with independently tokenized values.
pub mod tokendict;

pub use attrgraph::AttributeGraph;
pub use tokendict::TokenDict;
