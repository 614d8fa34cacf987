//! Trait mocks for failure injection and capture.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use futures_util::future::join_all;

use viewfinder::storage::InMemoryRepository;
use viewfinder_core::mailer::{Mailer, MailerError};
use viewfinder_core::portfolio::{Image, ImagePatch, NewImage};
use viewfinder_core::storage::{ImageStore, RepositoryError, Result};

/// Image store that fails `delete_image` for one designated id and forwards
/// everything else to an in-memory repository. Used to observe the
/// non-atomic behavior of bulk deletes.
pub struct FlakyImageStore {
    pub inner: InMemoryRepository,
    pub failing_id: String,
}

#[async_trait]
impl ImageStore for FlakyImageStore {
    async fn create_image(&self, draft: NewImage) -> Result<Image> {
        self.inner.create_image(draft).await
    }

    async fn get_image(&self, id: &str) -> Result<Option<Image>> {
        self.inner.get_image(id).await
    }

    async fn get_images_by_gallery(&self, gallery_id: &str) -> Result<Vec<Image>> {
        self.inner.get_images_by_gallery(gallery_id).await
    }

    async fn update_image(&self, id: &str, patch: ImagePatch) -> Result<Option<Image>> {
        self.inner.update_image(id, patch).await
    }

    async fn delete_image(&self, id: &str) -> Result<()> {
        if id == self.failing_id {
            return Err(RepositoryError::QueryFailed(
                "simulated delete failure".to_string(),
            ));
        }
        self.inner.delete_image(id).await
    }

    async fn delete_images_by_gallery(&self, gallery_id: &str) -> Result<()> {
        // Same fan-out shape as the real backends, but routed through the
        // flaky delete above.
        let images = self.get_images_by_gallery(gallery_id).await?;

        let deletes = join_all(images.iter().map(|image| self.delete_image(&image.id))).await;
        for result in deletes {
            result?;
        }

        Ok(())
    }
}

/// Mailer that records every (recipient, code) pair instead of sending.
#[derive(Debug, Clone, Default)]
pub struct RecordingMailer {
    pub sent: Arc<Mutex<Vec<(String, String)>>>,
}

impl RecordingMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The code most recently "sent", if any.
    pub fn last_code(&self) -> Option<String> {
        self.sent
            .lock()
            .unwrap()
            .last()
            .map(|(_, code)| code.clone())
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send_login_code(
        &self,
        recipient: &str,
        code: &str,
    ) -> std::result::Result<(), MailerError> {
        self.sent
            .lock()
            .unwrap()
            .push((recipient.to_string(), code.to_string()));
        Ok(())
    }
}

/// Mailer whose sends always fail.
#[derive(Debug, Clone, Default)]
pub struct FailingMailer;

#[async_trait]
impl Mailer for FailingMailer {
    async fn send_login_code(
        &self,
        _recipient: &str,
        _code: &str,
    ) -> std::result::Result<(), MailerError> {
        Err(MailerError::Send)
    }
}
