mod sorting;
mod types;

pub use sorting::{sort_galleries, sort_images};
pub use types::{Gallery, GalleryPatch, Image, ImagePatch, NewGallery, NewImage};
