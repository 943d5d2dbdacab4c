use serde_json::Error as JsonError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SharedError {
    #[error("Network failure: {0}")]
    NetworkFailure(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Upstream API reported failure: {0}")]
    Upstream(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Stored record is corrupted: {0}")]
    StorageCorruption(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl SharedError {
    /// Whether the failure came from the fetch boundary (network, payload, upstream).
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            SharedError::NetworkFailure(_)
                | SharedError::MalformedResponse(_)
                | SharedError::Upstream(_)
        )
    }
}

impl From<JsonError> for SharedError {
    fn from(error: JsonError) -> Self {
        Self::MalformedResponse(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SharedError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_json_error_maps_to_malformed_response() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let shared: SharedError = err.into();
        assert!(matches!(shared, SharedError::MalformedResponse(_)));
        assert!(shared.is_fetch_failure());
    }

    #[test]
    fn test_error_display() {
        let err = SharedError::NotFound("contest 42".to_string());
        assert_eq!(err.to_string(), "Not found: contest 42");
        assert!(!err.is_fetch_failure());
    }
}
