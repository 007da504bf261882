//! Error types for Daycare core operations.
//!
//! Filtering and calendar association never fail; errors only arise at the
//! edges where text is turned into data (dataset files, dates, months). The
//! CLI layer maps these to user-friendly messages.

use thiserror::Error;

/// Result type alias for Daycare operations.
pub type Result<T> = std::result::Result<T, DaycareError>;

/// Core error type for Daycare operations.
#[derive(Debug, Error)]
pub enum DaycareError {
    /// Reading a dataset file failed
    #[error("I/O error: {0}")]
    Io(String),

    /// Dataset contents could not be decoded
    #[error("Parse error: {0}")]
    Parse(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<std::io::Error> for DaycareError {
    fn from(err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            DaycareError::NotFound(err.to_string())
        } else {
            DaycareError::Io(err.to_string())
        }
    }
}

impl From<serde_json::Error> for DaycareError {
    fn from(err: serde_json::Error) -> Self {
        DaycareError::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_maps_to_not_found() {
        let err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert!(matches!(DaycareError::from(err), DaycareError::NotFound(_)));
    }

    #[test]
    fn test_json_error_maps_to_parse() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let mapped = DaycareError::from(err);
        assert!(matches!(mapped, DaycareError::Parse(_)));
        assert!(mapped.to_string().starts_with("Parse error:"));
    }
}
