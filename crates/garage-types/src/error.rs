//! Error types for garage

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration directory not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),
}

/// Failure to turn a tagged record into a vehicle
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Record is not a JSON object")]
    NotAnObject,

    #[error("Malformed record: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Record of kind {kind} is missing field '{field}'")]
    MissingField { kind: &'static str, field: &'static str },

    #[error("Record of kind {kind} has unexpected field '{field}'")]
    UnexpectedField { kind: &'static str, field: &'static str },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_messages() {
        let err = DecodeError::MissingField {
            kind: "Auto",
            field: "kraftstoff",
        };
        assert_eq!(
            err.to_string(),
            "Record of kind Auto is missing field 'kraftstoff'"
        );

        let wrapped: Error = err.into();
        assert!(wrapped.to_string().starts_with("Decode error: "));
    }
}
