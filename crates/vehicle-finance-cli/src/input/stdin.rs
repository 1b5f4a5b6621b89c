use serde_json::Value;
use std::io::{self, Read};

/// Read piped JSON from stdin, if any.
///
/// Interactive sessions (stdin is a TTY) and empty pipes both yield None,
/// so the caller falls back to flag-based input.
pub fn read_stdin() -> Result<Option<Value>, Box<dyn std::error::Error>> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;

    let body = buffer.trim();
    if body.is_empty() {
        return Ok(None);
    }

    let value: Value =
        serde_json::from_str(body).map_err(|e| format!("piped input is not valid JSON: {e}"))?;
    Ok(Some(value))
}
