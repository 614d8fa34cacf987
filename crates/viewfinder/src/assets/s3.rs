//! S3-backed asset store, served through a CDN.

use async_trait::async_trait;
use aws_sdk_s3::error::SdkError;
use aws_sdk_s3::Client;
use bytes::Bytes;
use futures_util::future::join_all;
use tracing::instrument;

use viewfinder_core::assets::{AssetError, AssetStore, Result, StoredObject};

use crate::config::Config;

/// Cache directive applied to every uploaded object (one year). Stored
/// assets never change in place; a re-processed image gets a new key.
const CACHE_CONTROL: &str = "max-age=31536000";

fn map_s3_error<E>(err: SdkError<E>) -> AssetError
where
    E: std::error::Error + Send + Sync + 'static,
{
    AssetError::Service(err.to_string())
}

/// Object store using an S3 bucket behind a CDN.
///
/// Uploads go to the bucket; public URLs are derived from the configured
/// CDN base URL, never from the bucket endpoint.
#[derive(Debug, Clone)]
pub struct S3AssetStore {
    client: Client,
    bucket: String,
    cdn_base_url: String,
}

impl S3AssetStore {
    /// Creates a new asset store with the given client, bucket, and CDN
    /// base URL from the configuration.
    pub fn new(client: Client, config: &Config) -> Self {
        Self {
            client,
            bucket: config.bucket.clone(),
            // Strip trailing slashes so joined URLs never contain "//".
            cdn_base_url: config.cdn_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Creates a new asset store from environment configuration, using the
    /// AWS SDK default credential chain.
    pub async fn from_env() -> Self {
        let sdk_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Self::new(Client::new(&sdk_config), &Config::from_env())
    }

    /// The public URL an uploaded key is served under.
    pub fn public_url(&self, key: &str) -> String {
        format!("{}/{}", self.cdn_base_url, key)
    }
}

#[async_trait]
impl AssetStore for S3AssetStore {
    #[instrument(skip(self, bytes), fields(size = bytes.len()))]
    async fn upload(&self, key: &str, bytes: Bytes, content_type: &str) -> Result<StoredObject> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(bytes.into())
            .content_type(content_type)
            .cache_control(CACHE_CONTROL)
            .send()
            .await
            .map_err(map_s3_error)?;

        Ok(StoredObject {
            key: key.to_string(),
            url: self.public_url(key),
        })
    }

    #[instrument(skip(self))]
    async fn delete(&self, key: &str) -> Result<()> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(map_s3_error)?;

        Ok(())
    }

    #[instrument(skip(self), fields(count = keys.len()))]
    async fn delete_many(&self, keys: &[String]) -> Result<()> {
        let deletes = join_all(keys.iter().map(|key| self.delete(key))).await;
        for result in deletes {
            result?;
        }

        Ok(())
    }
}
