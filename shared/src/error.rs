use thiserror::Error;
use validator::ValidationErrors;
use serde_json::Error as JsonError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq)]
pub enum SharedError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("Unexpected HTTP status {status} from {url}")]
    HttpStatus {
        status: u16,
        url: String,
    },

    #[error("Conversion error: {0}")]
    Conversion(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Required field missing: {0}")]
    MissingField(String),
}

impl From<ValidationErrors> for SharedError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}

impl From<JsonError> for SharedError {
    fn from(error: JsonError) -> Self {
        Self::Conversion(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SharedError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_json_error_becomes_conversion() {
        let err: SharedError = serde_json::from_str::<Vec<String>>("{not json")
            .unwrap_err()
            .into();
        assert!(matches!(err, SharedError::Conversion(_)));
    }

    #[test]
    fn test_http_status_message() {
        let err = SharedError::HttpStatus {
            status: 404,
            url: "./assets/data/PS.json".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Unexpected HTTP status 404 from ./assets/data/PS.json"
        );
    }
}
