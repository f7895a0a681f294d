//! Input node tree for transformation.
//!
//! `Node` is the closed classification of everything the transform engine
//! can walk: scalars, strings, ordered sequences, string-keyed mappings,
//! and the annotation wrapper. Classification happens once per node by
//! pattern match; there is no runtime capability probing.

use serde_json::Value;

/// A nested input value, possibly carrying the annotation marker.
///
/// Strings are terminal: a value that renders as text is never treated as a
/// container, even if it arrived from an iterable source. Mapping keys are
/// strings and are sorted (byte-wise, which equals code-point order) when
/// the node is canonicalized, regardless of insertion order here.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// JSON null.
    Null,
    /// Boolean scalar.
    Bool(bool),
    /// Signed integer scalar.
    Int(i64),
    /// Unsigned integer scalar outside the `i64` range.
    UInt(u64),
    /// Floating-point scalar. Non-finite values are rejected at
    /// canonicalization time, before any digest is computed.
    Float(f64),
    /// Text. Terminal, never decomposed.
    String(String),
    /// Ordered sequence; element order is preserved exactly.
    Sequence(Vec<Node>),
    /// Key/value mapping in insertion order; canonicalized sorted by key.
    Mapping(Vec<(String, Node)>),
    /// Annotation marker: this node gets non-default tokenization
    /// treatment under the include/exclude policies. The marker applies to
    /// this node only; children have independent annotation status.
    Annotated(Box<Node>),
}

impl Node {
    /// Wraps `node` in the annotation marker. Already-annotated nodes are
    /// returned unchanged rather than double-wrapped.
    pub fn annotated(node: Node) -> Node {
        match node {
            Node::Annotated(_) => node,
            other => Node::Annotated(Box::new(other)),
        }
    }

    /// Whether this node carries the annotation marker.
    pub fn is_annotated(&self) -> bool {
        matches!(self, Node::Annotated(_))
    }

    /// Removes the annotation wrapper, if present.
    pub fn into_plain(self) -> Node {
        match self {
            Node::Annotated(inner) => *inner,
            other => other,
        }
    }

    /// Builds a sequence node from anything yielding nodes.
    pub fn sequence<I, T>(items: I) -> Node
    where
        I: IntoIterator<Item = T>,
        T: Into<Node>,
    {
        Node::Sequence(items.into_iter().map(Into::into).collect())
    }

    /// Builds a mapping node from key/value pairs.
    pub fn mapping<I, K, V>(pairs: I) -> Node
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Node>,
    {
        Node::Mapping(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Marks a value for non-default tokenization treatment.
///
/// Under the include-by-annotation policy only annotated composites are
/// tokenized; under exclude-by-annotation they are the ones inlined.
pub fn annotate(node: impl Into<Node>) -> Node {
    Node::annotated(node.into())
}

impl From<bool> for Node {
    fn from(value: bool) -> Self {
        Node::Bool(value)
    }
}

impl From<i32> for Node {
    fn from(value: i32) -> Self {
        Node::Int(value as i64)
    }
}

impl From<i64> for Node {
    fn from(value: i64) -> Self {
        Node::Int(value)
    }
}

impl From<u64> for Node {
    fn from(value: u64) -> Self {
        Node::UInt(value)
    }
}

impl From<f64> for Node {
    fn from(value: f64) -> Self {
        Node::Float(value)
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::String(value.to_string())
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Node::String(value)
    }
}

impl<T: Into<Node>> From<Vec<T>> for Node {
    fn from(items: Vec<T>) -> Self {
        Node::sequence(items)
    }
}

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Node::Null,
            Value::Bool(b) => Node::Bool(b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Node::Int(i)
                } else if let Some(u) = n.as_u64() {
                    Node::UInt(u)
                } else {
                    // A serde_json number is f64 when it is neither i64 nor u64.
                    Node::Float(n.as_f64().unwrap_or_default())
                }
            }
            Value::String(s) => Node::String(s),
            Value::Array(items) => Node::Sequence(items.into_iter().map(Node::from).collect()),
            Value::Object(map) => {
                Node::Mapping(map.into_iter().map(|(k, v)| (k, Node::from(v))).collect())
            }
        }
    }
}
