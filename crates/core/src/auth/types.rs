use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A pending one-time-code login, keyed by email.
///
/// At most one session exists per email; requesting a new code overwrites
/// the previous session. The code itself is never stored: `code_hash` holds
/// the SHA-256 hex digest produced by the login flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
    pub email: String,
    pub code_hash: String,
    /// Failed verification count. Only ever incremented; reset happens by
    /// deleting and recreating the session.
    pub attempts: u32,
    pub created_at: DateTime<Utc>,
    /// Expiry as epoch seconds.
    pub expires_at: i64,
}
