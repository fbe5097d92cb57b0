// Start of file: /src/utils/json.rs

// The json module organizes formatting helpers used for logging.

use serde::Serialize;
use anyhow::Result;

// Convert any `Serialize` type into a two-space-indented JSON string.
pub fn to_two_space_indented_json<T: Serialize>(value: &T) -> Result<String> {
    let pretty_json: String = serde_json::to_string_pretty(value)?;
    Ok(pretty_json)
}


// End of file: /src/utils/json.rs
