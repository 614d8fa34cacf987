use async_trait::async_trait;

use crate::portfolio::{Gallery, GalleryPatch, Image, ImagePatch, NewGallery, NewImage};

use super::Result;

/// Repository for gallery records.
///
/// Creation and update timestamps are stamped by the implementation; callers
/// never supply them.
#[async_trait]
pub trait GalleryStore: Send + Sync {
    /// Persists a new gallery, stamping `created_at`/`updated_at`, and
    /// returns the full record. An existing record with the same id is
    /// overwritten.
    async fn create_gallery(&self, draft: NewGallery) -> Result<Gallery>;

    /// Gets a gallery by id. Absence is `Ok(None)`, never an error.
    async fn get_gallery(&self, id: &str) -> Result<Option<Gallery>>;

    /// Returns every gallery, sorted by year descending then sort_order
    /// ascending.
    async fn list_galleries(&self) -> Result<Vec<Gallery>>;

    /// Applies a partial update, stamping `updated_at`. Only fields present
    /// in the patch are written; everything else is untouched. Returns the
    /// post-update record, or `None` when no gallery has this id.
    async fn update_gallery(&self, id: &str, patch: GalleryPatch) -> Result<Option<Gallery>>;

    /// Deletes a gallery unconditionally. Does not cascade: the caller is
    /// responsible for deleting the gallery's image records and stored
    /// objects separately.
    async fn delete_gallery(&self, id: &str) -> Result<()>;
}

/// Repository for image records.
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Persists a new image, stamping `created_at`, and returns the full
    /// record.
    async fn create_image(&self, draft: NewImage) -> Result<Image>;

    /// Gets an image by id. Absence is `Ok(None)`, never an error.
    async fn get_image(&self, id: &str) -> Result<Option<Image>>;

    /// Returns a gallery's images ordered by sort_order ascending.
    async fn get_images_by_gallery(&self, gallery_id: &str) -> Result<Vec<Image>>;

    /// Applies a partial update. Returns the post-update record, or `None`
    /// when no image has this id.
    async fn update_image(&self, id: &str, patch: ImagePatch) -> Result<Option<Image>>;

    /// Deletes an image record unconditionally.
    async fn delete_image(&self, id: &str) -> Result<()>;

    /// Deletes every image record of a gallery, issuing the deletes
    /// concurrently. Not atomic: when one delete fails the others may still
    /// have completed, and the error carries no per-item detail.
    async fn delete_images_by_gallery(&self, gallery_id: &str) -> Result<()>;
}
