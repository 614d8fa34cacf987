//! Core domain types and service traits for the viewfinder portfolio.
//!
//! This crate is deliberately free of AWS SDK types: it defines the domain
//! model (galleries, images, auth sessions), the storage/asset/mailer traits
//! the adapter crate implements, and the pure functions (sorting, object-key
//! generation, login-code handling) that the rest of the workspace builds on.

pub mod assets;
pub mod auth;
pub mod mailer;
pub mod portfolio;
pub mod storage;
