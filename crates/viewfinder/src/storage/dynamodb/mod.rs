//! DynamoDB storage backend.
//!
//! Implements the repository traits from `viewfinder_core` using
//! `aws-sdk-dynamodb`. Conversions and the dynamic update builder are pure
//! and tested without DynamoDB access; the repository itself is exercised
//! against real (or local) DynamoDB.

mod conversions;
mod error;
mod repository;
mod update;

pub use repository::DynamoRepository;
pub use update::{build_set_expression, SetExpression};
