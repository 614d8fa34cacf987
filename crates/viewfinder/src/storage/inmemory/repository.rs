//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use futures_util::future::join_all;
use tokio::sync::RwLock;

use viewfinder_core::auth::{AuthSession, SessionStore};
use viewfinder_core::portfolio::{
    self, Gallery, GalleryPatch, Image, ImagePatch, NewGallery, NewImage,
};
use viewfinder_core::storage::{GalleryStore, ImageStore, Result};

/// In-memory storage backend for tests and local development.
///
/// Uses HashMaps wrapped in `Arc<RwLock<_>>` for thread-safe access. Data is
/// not persisted and is lost when the repository is dropped. Semantics match
/// the DynamoDB backend: creates overwrite, lookups return `None` for absent
/// keys, updates return `None` for unknown ids, and the attempt counter is
/// incremented under a single write lock.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    galleries: Arc<RwLock<HashMap<String, Gallery>>>,
    images: Arc<RwLock<HashMap<String, Image>>>,
    sessions: Arc<RwLock<HashMap<String, AuthSession>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GalleryStore for InMemoryRepository {
    async fn create_gallery(&self, draft: NewGallery) -> Result<Gallery> {
        let now = Utc::now();
        let gallery = Gallery {
            id: draft.id,
            title: draft.title,
            year: draft.year,
            location: draft.location,
            cover_image_id: draft.cover_image_id,
            sort_order: draft.sort_order,
            created_at: now,
            updated_at: now,
        };

        let mut galleries = self.galleries.write().await;
        galleries.insert(gallery.id.clone(), gallery.clone());
        Ok(gallery)
    }

    async fn get_gallery(&self, id: &str) -> Result<Option<Gallery>> {
        let galleries = self.galleries.read().await;
        Ok(galleries.get(id).cloned())
    }

    async fn list_galleries(&self) -> Result<Vec<Gallery>> {
        let galleries = self.galleries.read().await;
        let mut all: Vec<Gallery> = galleries.values().cloned().collect();
        portfolio::sort_galleries(&mut all);
        Ok(all)
    }

    async fn update_gallery(&self, id: &str, patch: GalleryPatch) -> Result<Option<Gallery>> {
        let mut galleries = self.galleries.write().await;
        let Some(gallery) = galleries.get_mut(id) else {
            return Ok(None);
        };

        if let Some(title) = patch.title {
            gallery.title = title;
        }
        if let Some(year) = patch.year {
            gallery.year = year;
        }
        if let Some(location) = patch.location {
            gallery.location = location;
        }
        if let Some(cover_image_id) = patch.cover_image_id {
            gallery.cover_image_id = cover_image_id;
        }
        if let Some(sort_order) = patch.sort_order {
            gallery.sort_order = sort_order;
        }
        gallery.updated_at = Utc::now();

        Ok(Some(gallery.clone()))
    }

    async fn delete_gallery(&self, id: &str) -> Result<()> {
        let mut galleries = self.galleries.write().await;
        galleries.remove(id);
        Ok(())
    }
}

#[async_trait]
impl ImageStore for InMemoryRepository {
    async fn create_image(&self, draft: NewImage) -> Result<Image> {
        let image = Image {
            id: draft.id,
            gallery_id: draft.gallery_id,
            original_url: draft.original_url,
            optimized_url: draft.optimized_url,
            thumbnail_url: draft.thumbnail_url,
            caption: draft.caption,
            width: draft.width,
            height: draft.height,
            sort_order: draft.sort_order,
            created_at: Utc::now(),
        };

        let mut images = self.images.write().await;
        images.insert(image.id.clone(), image.clone());
        Ok(image)
    }

    async fn get_image(&self, id: &str) -> Result<Option<Image>> {
        let images = self.images.read().await;
        Ok(images.get(id).cloned())
    }

    async fn get_images_by_gallery(&self, gallery_id: &str) -> Result<Vec<Image>> {
        let images = self.images.read().await;
        let mut matching: Vec<Image> = images
            .values()
            .filter(|image| image.gallery_id == gallery_id)
            .cloned()
            .collect();
        portfolio::sort_images(&mut matching);
        Ok(matching)
    }

    async fn update_image(&self, id: &str, patch: ImagePatch) -> Result<Option<Image>> {
        let mut images = self.images.write().await;
        let Some(image) = images.get_mut(id) else {
            return Ok(None);
        };

        if let Some(original_url) = patch.original_url {
            image.original_url = original_url;
        }
        if let Some(optimized_url) = patch.optimized_url {
            image.optimized_url = optimized_url;
        }
        if let Some(thumbnail_url) = patch.thumbnail_url {
            image.thumbnail_url = thumbnail_url;
        }
        if let Some(caption) = patch.caption {
            image.caption = Some(caption);
        }
        if let Some(width) = patch.width {
            image.width = width;
        }
        if let Some(height) = patch.height {
            image.height = height;
        }
        if let Some(sort_order) = patch.sort_order {
            image.sort_order = sort_order;
        }

        Ok(Some(image.clone()))
    }

    async fn delete_image(&self, id: &str) -> Result<()> {
        let mut images = self.images.write().await;
        images.remove(id);
        Ok(())
    }

    async fn delete_images_by_gallery(&self, gallery_id: &str) -> Result<()> {
        let images = self.get_images_by_gallery(gallery_id).await?;

        let deletes = join_all(images.iter().map(|image| self.delete_image(&image.id))).await;
        for result in deletes {
            result?;
        }

        Ok(())
    }
}

#[async_trait]
impl SessionStore for InMemoryRepository {
    async fn create_session(
        &self,
        email: &str,
        code_hash: &str,
        expires_at: i64,
    ) -> Result<AuthSession> {
        let session = AuthSession {
            email: email.to_string(),
            code_hash: code_hash.to_string(),
            attempts: 0,
            created_at: Utc::now(),
            expires_at,
        };

        let mut sessions = self.sessions.write().await;
        sessions.insert(session.email.clone(), session.clone());
        Ok(session)
    }

    async fn get_session(&self, email: &str) -> Result<Option<AuthSession>> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(email).cloned())
    }

    async fn increment_attempts(&self, email: &str) -> Result<()> {
        // Increment under the write lock, mirroring the store-side atomic
        // update of the DynamoDB backend.
        let mut sessions = self.sessions.write().await;
        if let Some(session) = sessions.get_mut(email) {
            session.attempts += 1;
        }
        Ok(())
    }

    async fn delete_session(&self, email: &str) -> Result<()> {
        let mut sessions = self.sessions.write().await;
        sessions.remove(email);
        Ok(())
    }
}
