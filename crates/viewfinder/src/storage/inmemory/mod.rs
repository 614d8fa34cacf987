//! In-memory storage backend for tests and local development.
//!
//! Stores everything in HashMaps wrapped in `Arc<RwLock<_>>`. Useful where
//! persistence is not required; the trait semantics are identical to the
//! DynamoDB backend.

mod repository;

pub use repository::InMemoryRepository;
