//! The login-code flow: request a code, verify it.
//!
//! This is the one place that handles plaintext codes. Codes are hashed
//! here before they reach a [`SessionStore`], and expiry is enforced here at
//! verification time (there is no background cleanup of expired sessions).

use chrono::Utc;

use crate::mailer::Mailer;

use super::functions::{
    generate_login_code, hash_login_code, is_session_expired, login_code_expiry,
};
use super::{LoginError, SessionStore};

/// Failed verifications tolerated before the session is discarded.
pub const MAX_VERIFY_ATTEMPTS: u32 = 5;

/// Starts a login: generates a 6-digit code, stores its hash with a fresh
/// expiry (overwriting any previous session for the email), and emails the
/// plaintext code to the address.
///
/// The session is written before the email is sent, so a failed send leaves
/// a pending session behind; requesting a new code simply overwrites it.
pub async fn begin_login(
    sessions: &dyn SessionStore,
    mailer: &dyn Mailer,
    email: &str,
) -> Result<(), LoginError> {
    let code = generate_login_code();
    let expires_at = login_code_expiry(Utc::now());

    sessions
        .create_session(email, &hash_login_code(&code), expires_at)
        .await?;
    mailer.send_login_code(email, &code).await?;

    Ok(())
}

/// Verifies a submitted code against the pending session for `email`.
///
/// On success the session is consumed (deleted). Expired sessions and
/// sessions that exhausted [`MAX_VERIFY_ATTEMPTS`] are deleted and rejected;
/// a mismatching code increments the attempt counter atomically and leaves
/// the session in place.
pub async fn verify_login(
    sessions: &dyn SessionStore,
    email: &str,
    code: &str,
) -> Result<(), LoginError> {
    let Some(session) = sessions.get_session(email).await? else {
        return Err(LoginError::NoPendingLogin);
    };

    if is_session_expired(&session, Utc::now()) {
        sessions.delete_session(email).await?;
        return Err(LoginError::CodeExpired);
    }

    if session.attempts >= MAX_VERIFY_ATTEMPTS {
        sessions.delete_session(email).await?;
        return Err(LoginError::TooManyAttempts);
    }

    if hash_login_code(code) != session.code_hash {
        sessions.increment_attempts(email).await?;
        return Err(LoginError::InvalidCode);
    }

    sessions.delete_session(email).await?;
    Ok(())
}
