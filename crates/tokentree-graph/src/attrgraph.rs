//! Attributed hierarchical graph.

use std::collections::BTreeMap;

use tokentree_canonical::{annotate, Node, Token, Value};
use tokentree_store::{StoreError, StoreReader};

/// A graph node carrying an attribute table and named child graphs.
///
/// The node form is an annotated sequence `[attrs]` or `[attrs, members]`
/// where the attribute table, the member table, and every child graph are
/// annotated themselves. Under the include-by-annotation policy each of
/// those pieces gets its own token, so two versions of a graph that share
/// a subtree share that subtree's tokens in the store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeGraph {
    /// Attribute table. Values are arbitrary canonical values and are
    /// tokenized as one block; the transform does not descend into them.
    pub attrs: BTreeMap<String, Value>,
    /// Named child graphs, in key order.
    pub members: BTreeMap<String, AttributeGraph>,
}

impl AttributeGraph {
    /// Creates a graph node from its parts.
    pub fn new(
        attrs: BTreeMap<String, Value>,
        members: BTreeMap<String, AttributeGraph>,
    ) -> Self {
        Self { attrs, members }
    }

    /// Creates a leaf node carrying only attributes.
    pub fn with_attrs(attrs: BTreeMap<String, Value>) -> Self {
        Self {
            attrs,
            members: BTreeMap::new(),
        }
    }

    /// Encodes this graph as an annotated node for transformation.
    pub fn to_node(&self) -> Node {
        let attrs = annotate(Node::Mapping(
            self.attrs
                .iter()
                .map(|(k, v)| (k.clone(), Node::from(v.clone())))
                .collect(),
        ));

        let mut parts = vec![attrs];
        if !self.members.is_empty() {
            parts.push(annotate(Node::Mapping(
                self.members
                    .iter()
                    .map(|(name, child)| (name.clone(), child.to_node()))
                    .collect(),
            )));
        }
        annotate(Node::Sequence(parts))
    }

    /// Rebuilds a graph from its node token.
    ///
    /// `token` must resolve to the `[attrs_token]` / `[attrs_token,
    /// members_token]` sequence produced by transforming
    /// [`to_node`](AttributeGraph::to_node) output; member tokens are
    /// resolved recursively through the same reader.
    pub fn from_token<R: StoreReader + ?Sized>(
        reader: &R,
        token: &Token,
    ) -> Result<Self, StoreError> {
        let Value::Array(parts) = reader.read(token)? else {
            return Err(StoreError::Format(
                "attribute graph node is not a sequence".into(),
            ));
        };
        let mut parts = parts.into_iter();

        let attrs = match parts.next() {
            None => BTreeMap::new(),
            Some(part) => {
                let Value::Object(map) = resolve(reader, part)? else {
                    return Err(StoreError::Format(
                        "attribute table is not a mapping".into(),
                    ));
                };
                map.into_iter().collect()
            }
        };

        let members = match parts.next() {
            None => BTreeMap::new(),
            Some(part) => {
                let Value::Object(map) = resolve(reader, part)? else {
                    return Err(StoreError::Format("member table is not a mapping".into()));
                };
                let mut members = BTreeMap::new();
                for (name, child) in map {
                    let Value::String(child_token) = child else {
                        return Err(StoreError::Format(format!(
                            "member {:?} is not a token",
                            name
                        )));
                    };
                    members.insert(name, Self::from_token(reader, &Token::new(child_token))?);
                }
                members
            }
        };

        Ok(Self { attrs, members })
    }

    /// Iterates depth-first over every node, yielding each node's path:
    /// `(member name, node)` pairs from the node itself up to the root
    /// (whose name is `None`). Members are visited in key order.
    pub fn nodes(&self) -> PathWalk<'_> {
        PathWalk::new(self, false)
    }

    /// Like [`nodes`](AttributeGraph::nodes), restricted to childless
    /// nodes.
    pub fn leaves(&self) -> PathWalk<'_> {
        PathWalk::new(self, true)
    }
}

fn resolve<R: StoreReader + ?Sized>(reader: &R, part: Value) -> Result<Value, StoreError> {
    let Value::String(token) = part else {
        return Err(StoreError::Format("expected a token string".into()));
    };
    reader.read(&Token::new(token))
}

/// Depth-first iterator over graph node paths.
pub struct PathWalk<'g> {
    stack: Vec<Vec<(Option<&'g str>, &'g AttributeGraph)>>,
    leaves_only: bool,
}

impl<'g> PathWalk<'g> {
    fn new(root: &'g AttributeGraph, leaves_only: bool) -> Self {
        Self {
            stack: vec![vec![(None, root)]],
            leaves_only,
        }
    }
}

impl<'g> Iterator for PathWalk<'g> {
    type Item = Vec<(Option<&'g str>, &'g AttributeGraph)>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(path) = self.stack.pop() {
            let Some(&(_, node)) = path.first() else {
                continue;
            };
            for (name, child) in node.members.iter().rev() {
                let mut next = Vec::with_capacity(path.len() + 1);
                next.push((Some(name.as_str()), child));
                next.extend(path.iter().copied());
                self.stack.push(next);
            }
            if !self.leaves_only || node.members.is_empty() {
                return Some(path);
            }
        }
        None
    }
}
