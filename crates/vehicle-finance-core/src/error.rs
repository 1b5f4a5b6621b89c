use thiserror::Error;

#[derive(Debug, Error)]
pub enum VehicleFinanceError {
    #[error("Could not parse {field}: {value:?} is not a decimal number")]
    ParseError { field: String, value: String },

    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Division by zero in {context}")]
    DivisionByZero { context: String },

    #[error("Date error: {0}")]
    DateError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for VehicleFinanceError {
    fn from(e: serde_json::Error) -> Self {
        VehicleFinanceError::SerializationError(e.to_string())
    }
}
