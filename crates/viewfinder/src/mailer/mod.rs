//! Mailer implementations.

mod ses;

pub use ses::SesMailer;
