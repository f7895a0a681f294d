//! Canonical text rendering for deterministic hashing.

use serde_json::Value;

/// Error returned when canonical rendering fails.
#[derive(thiserror::Error, Debug)]
pub enum CanonicalError {
    /// Non-finite number (NaN/Infinity) detected; such values have no
    /// canonical text form and must be rejected before digesting.
    #[error("non-finite number: {0}")]
    NonFiniteNumber(f64),
    /// A value could not be rendered as JSON text.
    #[error("serialization failed: {0}")]
    Serialize(String),
}

/// Renders `value` in canonical text form.
///
/// The form is byte-stable: object keys sorted ascending regardless of the
/// map's backing order, `,`/`:` separators with no whitespace, strings
/// escaped minimally with non-ASCII text preserved as raw UTF-8, numbers
/// and booleans in serde_json's fixed rendering. Two values with equal
/// canonical form yield identical text, which is the property every token
/// rests on.
pub fn canonical_text(value: &Value) -> Result<String, CanonicalError> {
    let mut out = String::new();
    write_value(value, &mut out)?;
    Ok(out)
}

fn write_value(value: &Value, out: &mut String) -> Result<(), CanonicalError> {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(true) => out.push_str("true"),
        Value::Bool(false) => out.push_str("false"),
        Value::Number(n) => {
            // serde_json numbers cannot normally hold non-finite floats;
            // the check guards alternate Number constructions.
            if n.is_f64() {
                let f = n.as_f64().unwrap_or(f64::NAN);
                if !f.is_finite() {
                    return Err(CanonicalError::NonFiniteNumber(f));
                }
            }
            out.push_str(&n.to_string());
        }
        Value::String(s) => write_string(s, out)?,
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_value(item, out)?;
            }
            out.push(']');
        }
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));

            out.push('{');
            for (i, (key, child)) in entries.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_string(key, out)?;
                out.push(':');
                write_value(child, out)?;
            }
            out.push('}');
        }
    }
    Ok(())
}

fn write_string(s: &str, out: &mut String) -> Result<(), CanonicalError> {
    let rendered =
        serde_json::to_string(s).map_err(|e| CanonicalError::Serialize(e.to_string()))?;
    out.push_str(&rendered);
    Ok(())
}
