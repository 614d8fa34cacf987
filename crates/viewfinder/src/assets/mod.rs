//! Asset storage implementations.

mod s3;

pub use s3::S3AssetStore;
