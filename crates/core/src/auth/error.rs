use thiserror::Error;

use crate::mailer::MailerError;
use crate::storage::RepositoryError;

/// Errors surfaced by the login-code flow.
#[derive(Debug, Error)]
pub enum LoginError {
    /// No pending session exists for this email.
    #[error("no pending login for this email")]
    NoPendingLogin,

    /// The session's code expired; the session has been deleted.
    #[error("login code expired")]
    CodeExpired,

    /// Too many failed verifications; the session has been deleted.
    #[error("too many failed attempts")]
    TooManyAttempts,

    /// The submitted code did not match.
    #[error("invalid login code")]
    InvalidCode,

    #[error("session storage error: {0}")]
    Store(#[from] RepositoryError),

    #[error(transparent)]
    Mail(#[from] MailerError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_error_display() {
        assert_eq!(
            LoginError::NoPendingLogin.to_string(),
            "no pending login for this email"
        );
        assert_eq!(LoginError::CodeExpired.to_string(), "login code expired");
        assert_eq!(
            LoginError::Store(RepositoryError::QueryFailed("boom".to_string())).to_string(),
            "session storage error: Query failed: boom"
        );
    }
}
