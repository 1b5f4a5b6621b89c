use serde::de::DeserializeOwned;
use std::fs;

/// Read and deserialize a JSON input file.
pub fn read_json<T: DeserializeOwned>(path: &str) -> Result<T, Box<dyn std::error::Error>> {
    let contents = fs::read_to_string(path).map_err(|e| format!("could not read {path}: {e}"))?;
    let value = serde_json::from_str(&contents)
        .map_err(|e| format!("invalid JSON in {path}: {e}"))?;
    Ok(value)
}
