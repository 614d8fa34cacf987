use thiserror::Error;

/// Errors that can occur during repository operations.
///
/// Absence of a record is not an error: single-record lookups return
/// `Ok(None)` and bulk lookups return an empty collection. These variants
/// cover transport, service, and data-shape failures only; none of them is
/// retried by the repository.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_failed_display() {
        let error = RepositoryError::ConnectionFailed("timeout after 30s".to_string());
        assert_eq!(error.to_string(), "Connection failed: timeout after 30s");
    }

    #[test]
    fn test_query_failed_display() {
        let error = RepositoryError::QueryFailed("invalid partition key".to_string());
        assert_eq!(error.to_string(), "Query failed: invalid partition key");
    }

    #[test]
    fn test_invalid_data_display() {
        let error = RepositoryError::InvalidData("missing field: title".to_string());
        assert_eq!(error.to_string(), "Invalid data: missing field: title");
    }
}
