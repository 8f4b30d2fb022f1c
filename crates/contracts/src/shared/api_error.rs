use thiserror::Error;

/// Failure of a dashboard API call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("not found")]
    NotFound,
    #[error("HTTP {0}")]
    Status(u16),
    #[error("failed to parse response: {0}")]
    Decode(String),
    #[error("failed to serialize request: {0}")]
    Encode(String),
}

impl ApiError {
    /// Maps a non-success HTTP status
    pub fn from_status(status: u16) -> Self {
        match status {
            404 => ApiError::NotFound,
            other => ApiError::Status(other),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status() {
        assert_eq!(ApiError::from_status(404), ApiError::NotFound);
        assert_eq!(ApiError::from_status(500), ApiError::Status(500));
        assert!(ApiError::from_status(404).is_not_found());
        assert_eq!(ApiError::Status(502).to_string(), "HTTP 502");
    }
}
