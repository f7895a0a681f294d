//! Transform command implementation.

use tokentree_canonical::Node;
use tokentree_store::{json as store_json, MemoryStore, StoreReader, StoreWriter};
use tokentree_transform::Transformer;

use crate::commands::{parse_alg, parse_policy, read_json_input};

pub fn run(
    input: Option<String>,
    out: String,
    policy: String,
    alg: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let engine = Transformer::new(parse_policy(&policy)?, parse_alg(&alg)?);
    let node = Node::from(read_json_input(input)?);

    // Persist each pair as it is emitted; the last one becomes the head.
    let mut store = MemoryStore::new();
    for pair in engine.transform(node) {
        let (token, value) = pair?;
        store.set_head(Some(token.clone()));
        store.insert(token, value);
    }
    store_json::write_file(&out, &store)
        .map_err(|e| format!("Failed to write store {}: {}", out, e))?;

    match store.len() {
        1 => eprintln!("Wrote 1 structure to {}", out),
        n => eprintln!("Wrote {} structures to {}", n, out),
    }
    if let Some(head) = store.head() {
        println!("{}", head);
    }
    Ok(())
}
