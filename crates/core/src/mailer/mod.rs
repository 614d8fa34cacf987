mod error;
mod traits;

pub use error::{MailerError, Result};
pub use traits::Mailer;
