//! Show command implementation.

use tokentree_canonical::Token;
use tokentree_store::{json as store_json, StoreReader};

use crate::output;

pub fn run(store: String, token: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let reader = store_json::read_file(&store)
        .map_err(|e| format!("Failed to read store {}: {}", store, e))?;

    let token = match token {
        Some(t) => Token::new(t),
        None => reader
            .head()
            .cloned()
            .ok_or("Store has no head token; pass --token")?,
    };

    let value = reader.read(&token)?;
    eprintln!("{}", token);
    println!("{}", output::format_json(&value));
    Ok(())
}
