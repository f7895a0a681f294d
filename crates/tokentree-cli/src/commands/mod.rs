pub mod show;
pub mod token;
pub mod transform;
pub mod walk;

use std::io::Read;

use serde_json::Value;
use tokentree_canonical::Tokenizer;
use tokentree_transform::Policy;

/// Reads a JSON document from a file path or stdin.
pub fn read_json_input(input: Option<String>) -> Result<Value, Box<dyn std::error::Error>> {
    let json_str = if let Some(path) = input {
        std::fs::read_to_string(&path)
            .map_err(|e| format!("Failed to read file {}: {}", path, e))?
    } else {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    };

    let value: Value =
        serde_json::from_str(&json_str).map_err(|e| format!("Invalid JSON: {}", e))?;
    Ok(value)
}

/// Parses a digest algorithm name.
pub fn parse_alg(alg: &str) -> Result<Tokenizer, Box<dyn std::error::Error>> {
    match alg {
        "sha1" => Ok(Tokenizer::sha1()),
        "sha256" => Ok(Tokenizer::sha256()),
        other => Err(format!("Unknown algorithm {:?} (expected sha1 or sha256)", other).into()),
    }
}

/// Parses a dispatch policy name.
pub fn parse_policy(policy: &str) -> Result<Policy, Box<dyn std::error::Error>> {
    match policy {
        "full" => Ok(Policy::Full),
        "include" => Ok(Policy::IncludeAnnotated),
        "exclude" => Ok(Policy::ExcludeAnnotated),
        other => Err(format!(
            "Unknown policy {:?} (expected full, include, or exclude)",
            other
        )
        .into()),
    }
}
