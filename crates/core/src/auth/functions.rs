use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use sha2::{Digest, Sha256};

use super::AuthSession;

/// How long a login code stays valid.
pub const LOGIN_CODE_TTL_MINUTES: i64 = 10;

/// Generate a random 6-digit login code, zero-padded.
pub fn generate_login_code() -> String {
    let n: u32 = rand::rng().random_range(0..1_000_000);
    format!("{n:06}")
}

/// Hash a login code for storage (SHA-256, lowercase hex).
pub fn hash_login_code(code: &str) -> String {
    let digest = Sha256::digest(code.as_bytes());
    hex::encode(digest)
}

/// Check if a session has expired.
pub fn is_session_expired(session: &AuthSession, now: DateTime<Utc>) -> bool {
    session.expires_at <= now.timestamp()
}

/// Calculate the expiry for a code issued at `now`, as epoch seconds.
pub fn login_code_expiry(now: DateTime<Utc>) -> i64 {
    (now + Duration::minutes(LOGIN_CODE_TTL_MINUTES)).timestamp()
}
