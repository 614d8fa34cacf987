mod error;
mod traits;

pub use error::{RepositoryError, Result};
pub use traits::{GalleryStore, ImageStore};

/// Name of the secondary index that serves `get_images_by_gallery`:
/// partition key `galleryId`, sort key `sortOrder`. Shared between the
/// DynamoDB repository and the provisioning tooling.
pub const IMAGES_BY_GALLERY_INDEX: &str = "galleryId-sortOrder-index";
