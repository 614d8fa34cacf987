//! AWS adapters for the viewfinder portfolio.
//!
//! Implements the traits from `viewfinder_core` against managed AWS
//! services: DynamoDB for gallery/image/session records, S3 fronted by a
//! CDN for image assets, and SES for login-code email. An in-memory
//! repository is included for tests and local development.
//!
//! Adapters are plain, explicitly constructed values. Build the SDK clients
//! once at process start, construct the adapters you need from a
//! [`config::Config`], and pass them by reference to callers; nothing in
//! this crate holds process-wide state.

pub mod assets;
pub mod config;
pub mod mailer;
pub mod storage;
