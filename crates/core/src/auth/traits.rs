use async_trait::async_trait;

use crate::storage::Result;

use super::AuthSession;

/// Storage for pending login-code sessions, keyed by email.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Stores a fresh session with `attempts = 0`, overwriting any existing
    /// session for the email, and returns the stored record. `code_hash`
    /// must already be hashed; implementations persist it as given.
    async fn create_session(
        &self,
        email: &str,
        code_hash: &str,
        expires_at: i64,
    ) -> Result<AuthSession>;

    /// Gets the pending session for an email. Absence is `Ok(None)`.
    async fn get_session(&self, email: &str) -> Result<Option<AuthSession>>;

    /// Atomically increments the failed-attempt counter by one. Must be a
    /// single store-level update, not read-modify-write, so concurrent
    /// verification attempts never lose increments.
    async fn increment_attempts(&self, email: &str) -> Result<()>;

    /// Deletes the session unconditionally.
    async fn delete_session(&self, email: &str) -> Result<()>;
}
