use serde_json::Value;

/// Pretty-printed JSON, the default format. Decimal amounts come through
/// as strings, so full precision survives the trip.
pub fn print_json(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(rendered) => println!("{}", rendered),
        Err(e) => eprintln!("could not serialize output: {}", e),
    }
}
