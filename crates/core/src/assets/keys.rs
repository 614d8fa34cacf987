//! Object key generation.
//!
//! Pure functions for deriving storage keys from gallery id, image id, and
//! variant. The `{variant}/{gallery_id}/{image_id}.jpg` scheme is the one
//! structural convention shared between stored objects and served URLs, so
//! it must not change.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which processed form of an image is being stored or served.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageVariant {
    Original,
    Optimized,
    Thumbnail,
}

impl ImageVariant {
    /// All variants, in the order they are produced by the upload pipeline.
    pub const ALL: [ImageVariant; 3] = [
        ImageVariant::Original,
        ImageVariant::Optimized,
        ImageVariant::Thumbnail,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ImageVariant::Original => "original",
            ImageVariant::Optimized => "optimized",
            ImageVariant::Thumbnail => "thumbnail",
        }
    }
}

impl fmt::Display for ImageVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Generate the object key for one variant of an image.
///
/// Pattern: `{variant}/{gallery_id}/{image_id}.jpg`
pub fn image_object_key(gallery_id: &str, image_id: &str, variant: ImageVariant) -> String {
    format!("{variant}/{gallery_id}/{image_id}.jpg")
}

/// Generate the object keys for all three variants of an image, in
/// [`ImageVariant::ALL`] order.
pub fn image_object_keys(gallery_id: &str, image_id: &str) -> Vec<String> {
    ImageVariant::ALL
        .iter()
        .map(|variant| image_object_key(gallery_id, image_id, *variant))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_object_key_original() {
        assert_eq!(
            image_object_key("g1", "i1", ImageVariant::Original),
            "original/g1/i1.jpg"
        );
    }

    #[test]
    fn test_image_object_key_optimized() {
        assert_eq!(
            image_object_key("g1", "i1", ImageVariant::Optimized),
            "optimized/g1/i1.jpg"
        );
    }

    #[test]
    fn test_image_object_key_thumbnail() {
        assert_eq!(
            image_object_key("g1", "i1", ImageVariant::Thumbnail),
            "thumbnail/g1/i1.jpg"
        );
    }

    #[test]
    fn test_image_object_keys_covers_all_variants() {
        assert_eq!(
            image_object_keys("g1", "i1"),
            vec![
                "original/g1/i1.jpg".to_string(),
                "optimized/g1/i1.jpg".to_string(),
                "thumbnail/g1/i1.jpg".to_string(),
            ]
        );
    }

    #[test]
    fn test_variant_display() {
        assert_eq!(ImageVariant::Original.to_string(), "original");
        assert_eq!(ImageVariant::Optimized.to_string(), "optimized");
        assert_eq!(ImageVariant::Thumbnail.to_string(), "thumbnail");
    }
}
