mod error;
mod flow;
mod functions;
mod traits;
mod types;

pub use error::LoginError;
pub use flow::{begin_login, verify_login, MAX_VERIFY_ATTEMPTS};
pub use functions::{
    generate_login_code, hash_login_code, is_session_expired, login_code_expiry,
    LOGIN_CODE_TTL_MINUTES,
};
pub use traits::SessionStore;
pub use types::AuthSession;
