//! Shared fixtures for integration tests.
//!
//! Note: #[allow(dead_code)] because each test file compiles common/
//! separately and uses a different subset of it.
#![allow(dead_code)]

pub mod mocks;

use viewfinder_core::portfolio::{NewGallery, NewImage};

/// A gallery draft with deterministic fields.
pub fn gallery_draft(id: &str, year: i32, sort_order: i32) -> NewGallery {
    NewGallery::new(format!("Gallery {id}"), year, "Reykjavik")
        .with_id(id)
        .with_sort_order(sort_order)
}

/// An image draft with deterministic fields.
pub fn image_draft(id: &str, gallery_id: &str, sort_order: i32) -> NewImage {
    NewImage::new(gallery_id, 4000, 3000)
        .with_id(id)
        .with_urls(
            format!("https://cdn.test/original/{gallery_id}/{id}.jpg"),
            format!("https://cdn.test/optimized/{gallery_id}/{id}.jpg"),
            format!("https://cdn.test/thumbnail/{gallery_id}/{id}.jpg"),
        )
        .with_sort_order(sort_order)
}
