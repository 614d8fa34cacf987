use async_trait::async_trait;
use bytes::Bytes;

use super::Result;

/// A stored object together with its public, CDN-served URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub key: String,
    pub url: String,
}

/// Object storage for image assets.
///
/// Implementations store bytes under caller-chosen keys and derive the
/// public URL from an externally configured delivery base. No hashing,
/// dedup, or multipart handling happens at this seam.
#[async_trait]
pub trait AssetStore: Send + Sync {
    /// Stores the bytes under `key` with a long-lived cache directive and
    /// returns the key plus its public URL.
    async fn upload(&self, key: &str, bytes: Bytes, content_type: &str) -> Result<StoredObject>;

    /// Deletes one object unconditionally.
    async fn delete(&self, key: &str) -> Result<()>;

    /// Deletes several objects, issuing the deletes concurrently. Not
    /// atomic: when one delete fails the others may still have completed,
    /// and the error carries no per-item detail.
    async fn delete_many(&self, keys: &[String]) -> Result<()>;
}
