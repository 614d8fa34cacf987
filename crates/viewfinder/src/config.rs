use std::env;

/// Adapter configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// DynamoDB table holding gallery records (default: "galleries")
    pub galleries_table: String,
    /// DynamoDB table holding image records (default: "images")
    pub images_table: String,
    /// DynamoDB table holding login sessions (default: "auth-sessions")
    pub sessions_table: String,
    /// S3 bucket for image assets (default: "portfolio-images")
    pub bucket: String,
    /// Base URL of the CDN serving the bucket (default: "")
    pub cdn_base_url: String,
    /// Sender address for login-code email (default: "noreply@example.com")
    pub sender_email: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DYNAMODB_GALLERIES_TABLE` - gallery table name (default: "galleries")
    /// - `DYNAMODB_IMAGES_TABLE` - image table name (default: "images")
    /// - `DYNAMODB_AUTH_SESSIONS_TABLE` - session table name (default: "auth-sessions")
    /// - `S3_BUCKET` - asset bucket name (default: "portfolio-images")
    /// - `CDN_BASE_URL` - public base URL for served assets (default: "")
    /// - `SES_SENDER_EMAIL` - login-code sender address (default: "noreply@example.com")
    pub fn from_env() -> Self {
        Self {
            galleries_table: env::var("DYNAMODB_GALLERIES_TABLE")
                .unwrap_or_else(|_| "galleries".to_string()),
            images_table: env::var("DYNAMODB_IMAGES_TABLE")
                .unwrap_or_else(|_| "images".to_string()),
            sessions_table: env::var("DYNAMODB_AUTH_SESSIONS_TABLE")
                .unwrap_or_else(|_| "auth-sessions".to_string()),
            bucket: env::var("S3_BUCKET").unwrap_or_else(|_| "portfolio-images".to_string()),
            cdn_base_url: env::var("CDN_BASE_URL").unwrap_or_default(),
            sender_email: env::var("SES_SENDER_EMAIL")
                .unwrap_or_else(|_| "noreply@example.com".to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        // Clear environment variables to test defaults
        env::remove_var("DYNAMODB_GALLERIES_TABLE");
        env::remove_var("DYNAMODB_IMAGES_TABLE");
        env::remove_var("DYNAMODB_AUTH_SESSIONS_TABLE");
        env::remove_var("S3_BUCKET");
        env::remove_var("CDN_BASE_URL");
        env::remove_var("SES_SENDER_EMAIL");

        let config = Config::from_env();

        assert_eq!(config.galleries_table, "galleries");
        assert_eq!(config.images_table, "images");
        assert_eq!(config.sessions_table, "auth-sessions");
        assert_eq!(config.bucket, "portfolio-images");
        assert_eq!(config.cdn_base_url, "");
        assert_eq!(config.sender_email, "noreply@example.com");
    }
}
