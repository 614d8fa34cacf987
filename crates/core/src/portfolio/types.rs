use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named, dated collection of images with a display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gallery {
    pub id: String,
    pub title: String,
    pub year: i32,
    pub location: String,
    /// Image chosen as the gallery's cover on listing pages.
    pub cover_image_id: String,
    /// Display position among galleries of the same year (ascending).
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Caller-settable fields of a gallery. Timestamps are stamped by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGallery {
    pub id: String,
    pub title: String,
    pub year: i32,
    pub location: String,
    pub cover_image_id: String,
    pub sort_order: i32,
}

impl NewGallery {
    /// Creates a new gallery draft with a generated id.
    pub fn new(title: impl Into<String>, year: i32, location: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            year,
            location: location.into(),
            cover_image_id: String::new(),
            sort_order: 0,
        }
    }

    /// Sets a specific id (useful for testing).
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the cover image id.
    pub fn with_cover_image(mut self, image_id: impl Into<String>) -> Self {
        self.cover_image_id = image_id.into();
        self
    }

    /// Sets the display position.
    pub fn with_sort_order(mut self, sort_order: i32) -> Self {
        self.sort_order = sort_order;
        self
    }
}

/// Partial update for a gallery: only `Some` fields are written.
///
/// The id and creation timestamp are never patchable; `updated_at` is
/// stamped by the store on every update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryPatch {
    pub title: Option<String>,
    pub year: Option<i32>,
    pub location: Option<String>,
    pub cover_image_id: Option<String>,
    pub sort_order: Option<i32>,
}

impl GalleryPatch {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn cover_image(mut self, image_id: impl Into<String>) -> Self {
        self.cover_image_id = Some(image_id.into());
        self
    }

    pub fn sort_order(mut self, sort_order: i32) -> Self {
        self.sort_order = Some(sort_order);
        self
    }
}

/// A single photograph's metadata and its three derived asset URLs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub id: String,
    /// The gallery this image belongs to.
    pub gallery_id: String,
    pub original_url: String,
    pub optimized_url: String,
    pub thumbnail_url: String,
    pub caption: Option<String>,
    pub width: u32,
    pub height: u32,
    /// Display position within the gallery (ascending).
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
}

/// Caller-settable fields of an image. `created_at` is stamped by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewImage {
    pub id: String,
    pub gallery_id: String,
    pub original_url: String,
    pub optimized_url: String,
    pub thumbnail_url: String,
    pub caption: Option<String>,
    pub width: u32,
    pub height: u32,
    pub sort_order: i32,
}

impl NewImage {
    /// Creates a new image draft with a generated id and empty URLs.
    pub fn new(gallery_id: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            gallery_id: gallery_id.into(),
            original_url: String::new(),
            optimized_url: String::new(),
            thumbnail_url: String::new(),
            caption: None,
            width,
            height,
            sort_order: 0,
        }
    }

    /// Sets a specific id (useful for testing).
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the three variant URLs at once.
    pub fn with_urls(
        mut self,
        original: impl Into<String>,
        optimized: impl Into<String>,
        thumbnail: impl Into<String>,
    ) -> Self {
        self.original_url = original.into();
        self.optimized_url = optimized.into();
        self.thumbnail_url = thumbnail.into();
        self
    }

    /// Sets the caption.
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Sets the display position.
    pub fn with_sort_order(mut self, sort_order: i32) -> Self {
        self.sort_order = sort_order;
        self
    }
}

/// Partial update for an image: only `Some` fields are written.
///
/// The id, owning gallery, and creation timestamp are never patchable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagePatch {
    pub original_url: Option<String>,
    pub optimized_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub caption: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub sort_order: Option<i32>,
}

impl ImagePatch {
    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn sort_order(mut self, sort_order: i32) -> Self {
        self.sort_order = Some(sort_order);
        self
    }

    pub fn dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_gallery_generates_unique_ids() {
        let a = NewGallery::new("Iceland", 2024, "Reykjavik");
        let b = NewGallery::new("Iceland", 2024, "Reykjavik");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn new_gallery_builder_sets_fields() {
        let draft = NewGallery::new("Patagonia", 2023, "El Chaltén")
            .with_id("g1")
            .with_cover_image("i1")
            .with_sort_order(3);

        assert_eq!(draft.id, "g1");
        assert_eq!(draft.title, "Patagonia");
        assert_eq!(draft.year, 2023);
        assert_eq!(draft.cover_image_id, "i1");
        assert_eq!(draft.sort_order, 3);
    }

    #[test]
    fn new_image_builder_sets_urls_and_caption() {
        let draft = NewImage::new("g1", 4000, 3000)
            .with_id("i1")
            .with_urls("o.jpg", "opt.jpg", "t.jpg")
            .with_caption("Dawn at the ridge")
            .with_sort_order(2);

        assert_eq!(draft.gallery_id, "g1");
        assert_eq!(draft.original_url, "o.jpg");
        assert_eq!(draft.optimized_url, "opt.jpg");
        assert_eq!(draft.thumbnail_url, "t.jpg");
        assert_eq!(draft.caption.as_deref(), Some("Dawn at the ridge"));
        assert_eq!(draft.sort_order, 2);
    }

    #[test]
    fn default_patches_are_empty() {
        let patch = GalleryPatch::default();
        assert!(patch.title.is_none());
        assert!(patch.year.is_none());
        assert!(patch.location.is_none());
        assert!(patch.cover_image_id.is_none());
        assert!(patch.sort_order.is_none());
    }

    #[test]
    fn patch_builders_set_only_named_fields() {
        let patch = GalleryPatch::default().title("Renamed").sort_order(7);
        assert_eq!(patch.title.as_deref(), Some("Renamed"));
        assert_eq!(patch.sort_order, Some(7));
        assert!(patch.year.is_none());
        assert!(patch.location.is_none());

        let patch = ImagePatch::default().dimensions(800, 600);
        assert_eq!(patch.width, Some(800));
        assert_eq!(patch.height, Some(600));
        assert!(patch.caption.is_none());
    }
}
