use thiserror::Error;

/// Errors from the object store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AssetError {
    /// Transport or service failure from the underlying object store.
    #[error("object store error: {0}")]
    Service(String),

    /// The store was constructed with unusable configuration.
    #[error("object store configuration error: {0}")]
    Config(String),
}

/// Result type for asset operations.
pub type Result<T> = std::result::Result<T, AssetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_error_display() {
        assert_eq!(
            AssetError::Service("503 from upstream".to_string()).to_string(),
            "object store error: 503 from upstream"
        );
        assert_eq!(
            AssetError::Config("empty bucket name".to_string()).to_string(),
            "object store configuration error: empty bucket name"
        );
    }
}
