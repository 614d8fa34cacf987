//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and
//! domain types. Attribute names are camelCase, timestamps are RFC 3339
//! strings, and numbers ride in `N` attributes. All of this is testable in
//! isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use chrono::{DateTime, Utc};
use viewfinder_core::auth::AuthSession;
use viewfinder_core::portfolio::{Gallery, GalleryPatch, Image, ImagePatch};
use viewfinder_core::storage::RepositoryError;

// ============================================================================
// Gallery conversions
// ============================================================================

/// Convert a Gallery to a DynamoDB item.
pub fn gallery_to_item(gallery: &Gallery) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();

    item.insert("id".to_string(), AttributeValue::S(gallery.id.clone()));
    item.insert(
        "title".to_string(),
        AttributeValue::S(gallery.title.clone()),
    );
    item.insert(
        "year".to_string(),
        AttributeValue::N(gallery.year.to_string()),
    );
    item.insert(
        "location".to_string(),
        AttributeValue::S(gallery.location.clone()),
    );
    item.insert(
        "coverImageId".to_string(),
        AttributeValue::S(gallery.cover_image_id.clone()),
    );
    item.insert(
        "sortOrder".to_string(),
        AttributeValue::N(gallery.sort_order.to_string()),
    );
    item.insert(
        "createdAt".to_string(),
        AttributeValue::S(gallery.created_at.to_rfc3339()),
    );
    item.insert(
        "updatedAt".to_string(),
        AttributeValue::S(gallery.updated_at.to_rfc3339()),
    );

    item
}

/// Convert a DynamoDB item to a Gallery.
pub fn item_to_gallery(item: &HashMap<String, AttributeValue>) -> Result<Gallery, RepositoryError> {
    Ok(Gallery {
        id: get_string(item, "id")?,
        title: get_string(item, "title")?,
        year: get_i32(item, "year")?,
        location: get_string(item, "location")?,
        cover_image_id: get_string(item, "coverImageId")?,
        sort_order: get_i32(item, "sortOrder")?,
        created_at: get_datetime(item, "createdAt")?,
        updated_at: get_datetime(item, "updatedAt")?,
    })
}

/// Attribute/value pairs for a gallery patch, including the `updatedAt`
/// stamp. Feeds the dynamic SET-expression builder; order is stable so the
/// generated aliases are deterministic.
pub fn gallery_patch_attrs(
    patch: &GalleryPatch,
    updated_at: DateTime<Utc>,
) -> Vec<(&'static str, AttributeValue)> {
    let mut attrs = Vec::new();

    if let Some(title) = &patch.title {
        attrs.push(("title", AttributeValue::S(title.clone())));
    }
    if let Some(year) = patch.year {
        attrs.push(("year", AttributeValue::N(year.to_string())));
    }
    if let Some(location) = &patch.location {
        attrs.push(("location", AttributeValue::S(location.clone())));
    }
    if let Some(cover_image_id) = &patch.cover_image_id {
        attrs.push(("coverImageId", AttributeValue::S(cover_image_id.clone())));
    }
    if let Some(sort_order) = patch.sort_order {
        attrs.push(("sortOrder", AttributeValue::N(sort_order.to_string())));
    }

    attrs.push(("updatedAt", AttributeValue::S(updated_at.to_rfc3339())));
    attrs
}

// ============================================================================
// Image conversions
// ============================================================================

/// Convert an Image to a DynamoDB item.
pub fn image_to_item(image: &Image) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();

    item.insert("id".to_string(), AttributeValue::S(image.id.clone()));
    item.insert(
        "galleryId".to_string(),
        AttributeValue::S(image.gallery_id.clone()),
    );
    item.insert(
        "originalUrl".to_string(),
        AttributeValue::S(image.original_url.clone()),
    );
    item.insert(
        "optimizedUrl".to_string(),
        AttributeValue::S(image.optimized_url.clone()),
    );
    item.insert(
        "thumbnailUrl".to_string(),
        AttributeValue::S(image.thumbnail_url.clone()),
    );
    if let Some(caption) = &image.caption {
        item.insert("caption".to_string(), AttributeValue::S(caption.clone()));
    }
    item.insert(
        "width".to_string(),
        AttributeValue::N(image.width.to_string()),
    );
    item.insert(
        "height".to_string(),
        AttributeValue::N(image.height.to_string()),
    );
    item.insert(
        "sortOrder".to_string(),
        AttributeValue::N(image.sort_order.to_string()),
    );
    item.insert(
        "createdAt".to_string(),
        AttributeValue::S(image.created_at.to_rfc3339()),
    );

    item
}

/// Convert a DynamoDB item to an Image.
pub fn item_to_image(item: &HashMap<String, AttributeValue>) -> Result<Image, RepositoryError> {
    Ok(Image {
        id: get_string(item, "id")?,
        gallery_id: get_string(item, "galleryId")?,
        original_url: get_string(item, "originalUrl")?,
        optimized_url: get_string(item, "optimizedUrl")?,
        thumbnail_url: get_string(item, "thumbnailUrl")?,
        caption: get_optional_string(item, "caption"),
        width: get_u32(item, "width")?,
        height: get_u32(item, "height")?,
        sort_order: get_i32(item, "sortOrder")?,
        created_at: get_datetime(item, "createdAt")?,
    })
}

/// Attribute/value pairs for an image patch. Images carry no `updatedAt`,
/// so an all-`None` patch yields an empty list.
pub fn image_patch_attrs(patch: &ImagePatch) -> Vec<(&'static str, AttributeValue)> {
    let mut attrs = Vec::new();

    if let Some(original_url) = &patch.original_url {
        attrs.push(("originalUrl", AttributeValue::S(original_url.clone())));
    }
    if let Some(optimized_url) = &patch.optimized_url {
        attrs.push(("optimizedUrl", AttributeValue::S(optimized_url.clone())));
    }
    if let Some(thumbnail_url) = &patch.thumbnail_url {
        attrs.push(("thumbnailUrl", AttributeValue::S(thumbnail_url.clone())));
    }
    if let Some(caption) = &patch.caption {
        attrs.push(("caption", AttributeValue::S(caption.clone())));
    }
    if let Some(width) = patch.width {
        attrs.push(("width", AttributeValue::N(width.to_string())));
    }
    if let Some(height) = patch.height {
        attrs.push(("height", AttributeValue::N(height.to_string())));
    }
    if let Some(sort_order) = patch.sort_order {
        attrs.push(("sortOrder", AttributeValue::N(sort_order.to_string())));
    }

    attrs
}

// ============================================================================
// AuthSession conversions
// ============================================================================

/// Convert an AuthSession to a DynamoDB item.
pub fn session_to_item(session: &AuthSession) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();

    item.insert(
        "email".to_string(),
        AttributeValue::S(session.email.clone()),
    );
    item.insert(
        "codeHash".to_string(),
        AttributeValue::S(session.code_hash.clone()),
    );
    item.insert(
        "attempts".to_string(),
        AttributeValue::N(session.attempts.to_string()),
    );
    item.insert(
        "createdAt".to_string(),
        AttributeValue::S(session.created_at.to_rfc3339()),
    );
    item.insert(
        "expiresAt".to_string(),
        AttributeValue::N(session.expires_at.to_string()),
    );

    item
}

/// Convert a DynamoDB item to an AuthSession.
pub fn item_to_session(
    item: &HashMap<String, AttributeValue>,
) -> Result<AuthSession, RepositoryError> {
    Ok(AuthSession {
        email: get_string(item, "email")?,
        code_hash: get_string(item, "codeHash")?,
        attempts: get_u32(item, "attempts")?,
        created_at: get_datetime(item, "createdAt")?,
        expires_at: get_i64(item, "expiresAt")?,
    })
}

// ============================================================================
// Helper functions
// ============================================================================

/// Get a required string attribute.
fn get_string(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<String, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))
}

/// Get an optional string attribute.
fn get_optional_string(item: &HashMap<String, AttributeValue>, key: &str) -> Option<String> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
}

/// Get a required numeric attribute as a raw string.
fn get_number<'a>(
    item: &'a HashMap<String, AttributeValue>,
    key: &str,
) -> Result<&'a str, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_n().ok())
        .map(|n| n.as_str())
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))
}

/// Get a required i32 attribute.
fn get_i32(item: &HashMap<String, AttributeValue>, key: &str) -> Result<i32, RepositoryError> {
    let n = get_number(item, key)?;
    n.parse()
        .map_err(|e| RepositoryError::InvalidData(format!("Invalid number {}: {}", key, e)))
}

/// Get a required u32 attribute.
fn get_u32(item: &HashMap<String, AttributeValue>, key: &str) -> Result<u32, RepositoryError> {
    let n = get_number(item, key)?;
    n.parse()
        .map_err(|e| RepositoryError::InvalidData(format!("Invalid number {}: {}", key, e)))
}

/// Get a required i64 attribute.
fn get_i64(item: &HashMap<String, AttributeValue>, key: &str) -> Result<i64, RepositoryError> {
    let n = get_number(item, key)?;
    n.parse()
        .map_err(|e| RepositoryError::InvalidData(format!("Invalid number {}: {}", key, e)))
}

/// Get a required datetime attribute (RFC 3339 format).
fn get_datetime(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<DateTime<Utc>, RepositoryError> {
    let s = get_string(item, key)?;
    DateTime::parse_from_rfc3339(&s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::InvalidData(format!("Invalid datetime {}: {}", key, e)))
}
