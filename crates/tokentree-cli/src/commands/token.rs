//! Token command implementation.

use tokentree_canonical::canonical_text;

use crate::commands::{parse_alg, read_json_input};

pub fn run(
    input: Option<String>,
    alg: String,
    text: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let tokenizer = parse_alg(&alg)?;
    let value = read_json_input(input)?;

    if text {
        println!("{}", canonical_text(&value)?);
    }
    println!("{}", tokenizer.token(&value)?);
    Ok(())
}
