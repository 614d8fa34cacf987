mod error;
mod keys;
mod traits;

pub use error::{AssetError, Result};
pub use keys::{image_object_key, image_object_keys, ImageVariant};
pub use traits::{AssetStore, StoredObject};
