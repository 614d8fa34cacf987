//! Storage backend implementations.
//!
//! Concrete implementations of the repository traits defined in
//! `viewfinder_core::storage` and `viewfinder_core::auth`. Backends are
//! plain injectable values, not compile-time alternatives: construct a
//! [`dynamodb::DynamoRepository`] for deployments or an
//! [`inmemory::InMemoryRepository`] for tests, and pass it wherever a store
//! trait is expected.

pub mod dynamodb;
pub mod inmemory;

pub use dynamodb::DynamoRepository;
pub use inmemory::InMemoryRepository;
