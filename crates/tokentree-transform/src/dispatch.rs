//! Per-node dispatch: how a node decomposes and whether it tokenizes.

use serde_json::Value;
use tokentree_canonical::{CanonicalError, Node};

use crate::errors::TransformError;

/// The decision produced for one node: either a finished canonical leaf,
/// or a composite to decompose with its reassembly shape and tokenize flag.
#[derive(Debug)]
pub enum Dispatch {
    /// Scalar or string: already canonical, never tokenized on its own.
    Terminal(Value),
    /// Mapping or sequence: walk `children`, then reassemble.
    Composite {
        /// Mapping keys in ascending order, parallel to `children`;
        /// `None` for sequences.
        keys: Option<Vec<String>>,
        /// Child nodes in emission order (sorted-key order for mappings,
        /// positional order for sequences).
        children: Vec<Node>,
        /// Whether the reassembled value is hashed and replaced by its
        /// token in the parent.
        tokenize: bool,
    },
}

/// Policy deciding which composite nodes are tokenized.
///
/// Scalars and strings are terminal under every policy. The outermost
/// composite of a transform is always tokenized regardless of policy; that
/// forcing lives in the engine, so policies stay context-free.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// Every mapping and sequence is tokenized.
    Full,
    /// Only annotated composites are tokenized. Unannotated composites
    /// still decompose (annotated descendants get found) but reassemble
    /// inline without hashing.
    IncludeAnnotated,
    /// Composites are tokenized unless annotated. Annotation is re-applied
    /// to every child of an excluded node as it is re-emitted, so exclusion
    /// covers the whole subtree beneath the marker.
    ExcludeAnnotated,
}

impl Policy {
    /// Classifies `node` and produces its dispatch decision.
    pub fn dispatch(&self, node: Node) -> Result<Dispatch, TransformError> {
        let mut node = node;
        let mut annotated = false;
        while let Node::Annotated(inner) = node {
            annotated = true;
            node = *inner;
        }

        match node {
            Node::Sequence(items) => {
                let (tokenize, rewrap) = self.composite_flags(annotated);
                let children = if rewrap {
                    items.into_iter().map(Node::annotated).collect()
                } else {
                    items
                };
                Ok(Dispatch::Composite {
                    keys: None,
                    children,
                    tokenize,
                })
            }
            Node::Mapping(mut pairs) => {
                let (tokenize, rewrap) = self.composite_flags(annotated);
                pairs.sort_by(|a, b| a.0.cmp(&b.0));
                let (keys, children) = pairs
                    .into_iter()
                    .map(|(k, v)| (k, if rewrap { Node::annotated(v) } else { v }))
                    .unzip();
                Ok(Dispatch::Composite {
                    keys: Some(keys),
                    children,
                    tokenize,
                })
            }
            Node::Null => Ok(Dispatch::Terminal(Value::Null)),
            Node::Bool(b) => Ok(Dispatch::Terminal(Value::Bool(b))),
            Node::Int(i) => Ok(Dispatch::Terminal(Value::from(i))),
            Node::UInt(u) => Ok(Dispatch::Terminal(Value::from(u))),
            Node::Float(f) => match serde_json::Number::from_f64(f) {
                Some(n) => Ok(Dispatch::Terminal(Value::Number(n))),
                None => Err(CanonicalError::NonFiniteNumber(f).into()),
            },
            Node::String(s) => Ok(Dispatch::Terminal(Value::String(s))),
            // Annotation wrappers were stripped above.
            Node::Annotated(_) => unreachable!("annotation stripped before classification"),
        }
    }

    /// (tokenize, re-annotate children) for a composite with the given
    /// annotation status.
    fn composite_flags(&self, annotated: bool) -> (bool, bool) {
        match self {
            Policy::Full => (true, false),
            Policy::IncludeAnnotated => (annotated, false),
            Policy::ExcludeAnnotated => (!annotated, annotated),
        }
    }
}
