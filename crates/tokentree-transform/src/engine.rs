//! The explicit-stack transform engine.

use serde_json::{Map, Value};
use tokentree_canonical::{Node, Token, Tokenizer};

use crate::dispatch::{Dispatch, Policy};
use crate::errors::TransformError;

/// Depth-first tokenizing transform engine.
///
/// A transformer holds no cross-call state beyond its configuration: the
/// dispatch policy and the tokenizer (serializer + digest), both fixed at
/// construction. Each [`transform`](Transformer::transform) call owns its
/// own stack and accumulators, so an engine may be reused freely.
#[derive(Debug, Clone, Copy)]
pub struct Transformer {
    policy: Policy,
    tokenizer: Tokenizer,
}

impl Transformer {
    /// Creates an engine from a policy and a tokenizer.
    pub fn new(policy: Policy, tokenizer: Tokenizer) -> Self {
        Self { policy, tokenizer }
    }

    /// The dispatch policy in use.
    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// The tokenizer in use.
    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Starts a single-use, lazy, depth-first transform of `node`.
    ///
    /// The returned stream yields `(token, value)` pairs bottom-up, in
    /// post-order: a pair is produced each time a tokenized subtree
    /// completes, and the token is substituted for the subtree in its
    /// parent. The last pair is always the fully resolved top-level
    /// structure; at least one pair is always produced, even for a bare
    /// scalar. Streams are not restartable; call `transform` again for a
    /// fresh pass.
    pub fn transform(&self, node: Node) -> Transform<'_> {
        Transform {
            engine: self,
            stack: vec![Frame::root(node)],
            first_dispatch: true,
            emitted: false,
            done: false,
        }
    }
}

/// One traversal frame: the children still to visit, how to reassemble
/// the processed ones, and whether the result gets hashed.
struct Frame {
    children: std::vec::IntoIter<Node>,
    shape: Shape,
    tokenize: bool,
    accum: Vec<Value>,
}

enum Shape {
    /// Synthetic frame wrapping the input value alone.
    Root,
    Sequence,
    /// Mapping keys in ascending order, parallel to the accumulator.
    Mapping(Vec<String>),
}

impl Frame {
    fn root(node: Node) -> Self {
        Frame {
            children: vec![node].into_iter(),
            shape: Shape::Root,
            tokenize: false,
            accum: Vec::new(),
        }
    }

    fn collect(self) -> Value {
        match self.shape {
            Shape::Root => self.accum.into_iter().next().unwrap_or(Value::Null),
            Shape::Sequence => Value::Array(self.accum),
            Shape::Mapping(keys) => {
                let mut map = Map::new();
                for (key, value) in keys.into_iter().zip(self.accum) {
                    map.insert(key, value);
                }
                Value::Object(map)
            }
        }
    }
}

/// Lazy post-order stream of `(Token, Value)` pairs.
///
/// Working memory is bounded by input depth, not node count, and the next
/// pair is only computed when the consumer asks for it; a consumer may
/// persist each pair before pulling the next, or stop early at no cost.
/// After the first error the stream is fused.
pub struct Transform<'t> {
    engine: &'t Transformer,
    stack: Vec<Frame>,
    first_dispatch: bool,
    emitted: bool,
    done: bool,
}

impl Iterator for Transform<'_> {
    type Item = Result<(Token, Value), TransformError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            let Some(frame) = self.stack.last_mut() else {
                self.done = true;
                return None;
            };

            if let Some(child) = frame.children.next() {
                match self.engine.policy.dispatch(child) {
                    Err(e) => {
                        self.done = true;
                        return Some(Err(e));
                    }
                    Ok(Dispatch::Terminal(value)) => {
                        self.first_dispatch = false;
                        frame.accum.push(value);
                    }
                    Ok(Dispatch::Composite {
                        keys,
                        children,
                        tokenize,
                    }) => {
                        // The outermost composite is tokenized under every
                        // policy.
                        let tokenize = tokenize || self.first_dispatch;
                        self.first_dispatch = false;
                        let shape = match keys {
                            Some(keys) => Shape::Mapping(keys),
                            None => Shape::Sequence,
                        };
                        self.stack.push(Frame {
                            children: children.into_iter(),
                            shape,
                            tokenize,
                            accum: Vec::new(),
                        });
                    }
                }
                continue;
            }

            // Frame exhausted: reassemble and unwind one level.
            let Some(finished) = self.stack.pop() else {
                self.done = true;
                return None;
            };
            let tokenize = finished.tokenize;
            let value = finished.collect();

            if self.stack.is_empty() {
                // The synthetic root frame never tokenizes; if the walk
                // produced no pairs (terminal top-level input), synthesize
                // the one guaranteed emission.
                self.done = true;
                if self.emitted {
                    return None;
                }
                return Some(
                    self.engine
                        .tokenizer
                        .token(&value)
                        .map(|token| (token, value))
                        .map_err(TransformError::from),
                );
            }

            if tokenize {
                let token = match self.engine.tokenizer.token(&value) {
                    Ok(token) => token,
                    Err(e) => {
                        self.done = true;
                        return Some(Err(e.into()));
                    }
                };
                if let Some(parent) = self.stack.last_mut() {
                    parent.accum.push(Value::String(token.as_str().to_string()));
                }
                self.emitted = true;
                return Some(Ok((token, value)));
            }

            if let Some(parent) = self.stack.last_mut() {
                parent.accum.push(value);
            }
        }
    }
}
