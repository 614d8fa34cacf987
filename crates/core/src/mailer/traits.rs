use async_trait::async_trait;

use super::Result;

/// Transactional email delivery for login codes.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Renders and sends the fixed login-code message (plain text + HTML,
    /// one substitution point) to `recipient`.
    async fn send_login_code(&self, recipient: &str, code: &str) -> Result<()>;
}
