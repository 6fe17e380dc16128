//! JSON response formatting

use serde_json::Value as JsonValue;

use crate::errors::Result;

/// Pretty-print a JSON body with 2-space indentation.
///
/// Object keys keep the order the server sent them in.
pub fn format_json(body: &str) -> Result<String> {
    let value: JsonValue = serde_json::from_str(body)?;
    Ok(serde_json::to_string_pretty(&value)?)
}
