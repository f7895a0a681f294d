//! Walk command implementation.

use tokentree_store::{json as store_json, Cursor, Step, StoreReader};

use crate::output;

pub fn run(store: String, steps: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let reader = store_json::read_file(&store)
        .map_err(|e| format!("Failed to read store {}: {}", store, e))?;
    let head = reader
        .head()
        .cloned()
        .ok_or("Store has no head token; nothing to walk")?;

    let mut cursor = Cursor::new(&reader, head)?;
    for step in steps {
        // Digit-only steps are sequence indices; everything else is a key.
        let step = match step.parse::<usize>() {
            Ok(index) => Step::Index(index),
            Err(_) => Step::Key(step),
        };
        cursor = cursor.get(step)?;
    }

    eprintln!("{}", cursor.token());
    println!("{}", output::format_json(cursor.value()));
    Ok(())
}
