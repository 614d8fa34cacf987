use thiserror::Error;

/// Errors from the mailer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MailerError {
    /// The message could not be sent. Transport detail is logged at the
    /// adapter, not carried here.
    #[error("failed to send verification email")]
    Send,

    /// The message could not be assembled before sending.
    #[error("invalid message: {0}")]
    Message(String),
}

/// Result type for mailer operations.
pub type Result<T> = std::result::Result<T, MailerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mailer_error_display() {
        assert_eq!(
            MailerError::Send.to_string(),
            "failed to send verification email"
        );
        assert_eq!(
            MailerError::Message("missing subject".to_string()).to_string(),
            "invalid message: missing subject"
        );
    }
}
