//! DynamoDB repository implementation.
//!
//! Implements `GalleryStore`, `ImageStore`, and `SessionStore` from
//! `viewfinder_core` against three tables. Every operation is a single
//! request-scoped SDK call with no retries; bulk deletes fan out
//! concurrently and surface the first failure without per-item detail.

use async_trait::async_trait;
use aws_sdk_dynamodb::operation::update_item::UpdateItemError;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};
use aws_sdk_dynamodb::Client;
use chrono::Utc;
use futures_util::future::join_all;

use viewfinder_core::auth::{AuthSession, SessionStore};
use viewfinder_core::portfolio::{
    self, Gallery, GalleryPatch, Image, ImagePatch, NewGallery, NewImage,
};
use viewfinder_core::storage::{GalleryStore, ImageStore, Result, IMAGES_BY_GALLERY_INDEX};

use super::conversions::{
    gallery_patch_attrs, gallery_to_item, image_patch_attrs, image_to_item, item_to_gallery,
    item_to_image, item_to_session, session_to_item,
};
use super::error::{
    map_delete_item_error, map_get_item_error, map_put_item_error, map_query_error,
    map_scan_error, map_update_item_error,
};
use super::update::build_set_expression;
use crate::config::Config;

/// DynamoDB-backed repository for galleries, images, and login sessions.
pub struct DynamoRepository {
    client: Client,
    galleries_table: String,
    images_table: String,
    sessions_table: String,
}

impl DynamoRepository {
    /// Creates a new repository with the given client and table names from
    /// the configuration.
    pub fn new(client: Client, config: &Config) -> Self {
        Self {
            client,
            galleries_table: config.galleries_table.clone(),
            images_table: config.images_table.clone(),
            sessions_table: config.sessions_table.clone(),
        }
    }

    /// Creates a new repository from environment configuration, using the
    /// AWS SDK default credential chain.
    pub async fn from_env() -> Self {
        let sdk_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Self::new(Client::new(&sdk_config), &Config::from_env())
    }
}

// ============================================================================
// GalleryStore implementation
// ============================================================================

#[async_trait]
impl GalleryStore for DynamoRepository {
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

        self.client
            .put_item()
            .table_name(&self.galleries_table)
            .set_item(Some(gallery_to_item(&gallery)))
            .send()
            .await
            .map_err(map_put_item_error)?;

        Ok(gallery)
    }

    async fn get_gallery(&self, id: &str) -> Result<Option<Gallery>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.galleries_table)
            .key("id", AttributeValue::S(id.to_string()))
            .send()
            .await
            .map_err(map_get_item_error)?;

        match result.item {
            Some(item) => Ok(Some(item_to_gallery(&item)?)),
            None => Ok(None),
        }
    }

    async fn list_galleries(&self) -> Result<Vec<Gallery>> {
        let mut galleries = Vec::new();
        let mut exclusive_start_key = None;

        loop {
            let mut request = self.client.scan().table_name(&self.galleries_table);
            if let Some(key) = exclusive_start_key.take() {
                request = request.set_exclusive_start_key(Some(key));
            }

            let output = request.send().await.map_err(map_scan_error)?;

            for item in output.items.unwrap_or_default() {
                galleries.push(item_to_gallery(&item)?);
            }

            match output.last_evaluated_key {
                Some(key) => exclusive_start_key = Some(key),
                None => break,
            }
        }

        // Scan order is not guaranteed stable; listing order is defined
        // client-side.
        portfolio::sort_galleries(&mut galleries);
        Ok(galleries)
    }

    async fn update_gallery(&self, id: &str, patch: GalleryPatch) -> Result<Option<Gallery>> {
        let set = build_set_expression(gallery_patch_attrs(&patch, Utc::now()));

        let result = self
            .client
            .update_item()
            .table_name(&self.galleries_table)
            .key("id", AttributeValue::S(id.to_string()))
            .update_expression(set.expression)
            .set_expression_attribute_names(Some(set.names))
            .set_expression_attribute_values(Some(set.values))
            .condition_expression("attribute_exists(id)")
            .return_values(ReturnValue::AllNew)
            .send()
            .await;

        match result {
            Ok(output) => match output.attributes {
                Some(item) => Ok(Some(item_to_gallery(&item)?)),
                None => Ok(None),
            },
            Err(err) => match err.into_service_error() {
                UpdateItemError::ConditionalCheckFailedException(_) => Ok(None),
                err => Err(map_update_item_error(err)),
            },
        }
    }

    async fn delete_gallery(&self, id: &str) -> Result<()> {
        self.client
            .delete_item()
            .table_name(&self.galleries_table)
            .key("id", AttributeValue::S(id.to_string()))
            .send()
            .await
            .map_err(map_delete_item_error)?;

        Ok(())
    }
}

// ============================================================================
// ImageStore implementation
// ============================================================================

#[async_trait]
impl ImageStore for DynamoRepository {
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

        self.client
            .put_item()
            .table_name(&self.images_table)
            .set_item(Some(image_to_item(&image)))
            .send()
            .await
            .map_err(map_put_item_error)?;

        Ok(image)
    }

    async fn get_image(&self, id: &str) -> Result<Option<Image>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.images_table)
            .key("id", AttributeValue::S(id.to_string()))
            .send()
            .await
            .map_err(map_get_item_error)?;

        match result.item {
            Some(item) => Ok(Some(item_to_image(&item)?)),
            None => Ok(None),
        }
    }

    async fn get_images_by_gallery(&self, gallery_id: &str) -> Result<Vec<Image>> {
        let mut images = Vec::new();
        let mut exclusive_start_key = None;

        loop {
            let mut request = self
                .client
                .query()
                .table_name(&self.images_table)
                .index_name(IMAGES_BY_GALLERY_INDEX)
                .key_condition_expression("galleryId = :galleryId")
                .expression_attribute_values(
                    ":galleryId",
                    AttributeValue::S(gallery_id.to_string()),
                );
            if let Some(key) = exclusive_start_key.take() {
                request = request.set_exclusive_start_key(Some(key));
            }

            let output = request.send().await.map_err(map_query_error)?;

            for item in output.items.unwrap_or_default() {
                images.push(item_to_image(&item)?);
            }

            match output.last_evaluated_key {
                Some(key) => exclusive_start_key = Some(key),
                None => break,
            }
        }

        // The index sort key is sortOrder, so pages already arrive ordered.
        Ok(images)
    }

    async fn update_image(&self, id: &str, patch: ImagePatch) -> Result<Option<Image>> {
        let attrs = image_patch_attrs(&patch);
        if attrs.is_empty() {
            // Nothing to set; an empty SET expression is invalid, so fall
            // back to a read.
            return self.get_image(id).await;
        }
        let set = build_set_expression(attrs);

        let result = self
            .client
            .update_item()
            .table_name(&self.images_table)
            .key("id", AttributeValue::S(id.to_string()))
            .update_expression(set.expression)
            .set_expression_attribute_names(Some(set.names))
            .set_expression_attribute_values(Some(set.values))
            .condition_expression("attribute_exists(id)")
            .return_values(ReturnValue::AllNew)
            .send()
            .await;

        match result {
            Ok(output) => match output.attributes {
                Some(item) => Ok(Some(item_to_image(&item)?)),
                None => Ok(None),
            },
            Err(err) => match err.into_service_error() {
                UpdateItemError::ConditionalCheckFailedException(_) => Ok(None),
                err => Err(map_update_item_error(err)),
            },
        }
    }

    async fn delete_image(&self, id: &str) -> Result<()> {
        self.client
            .delete_item()
            .table_name(&self.images_table)
            .key("id", AttributeValue::S(id.to_string()))
            .send()
            .await
            .map_err(map_delete_item_error)?;

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

// ============================================================================
// SessionStore implementation
// ============================================================================

#[async_trait]
impl SessionStore for DynamoRepository {
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

        // Unconditional put: a second code request replaces the pending
        // session for this email.
        self.client
            .put_item()
            .table_name(&self.sessions_table)
            .set_item(Some(session_to_item(&session)))
            .send()
            .await
            .map_err(map_put_item_error)?;

        Ok(session)
    }

    async fn get_session(&self, email: &str) -> Result<Option<AuthSession>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.sessions_table)
            .key("email", AttributeValue::S(email.to_string()))
            .send()
            .await
            .map_err(map_get_item_error)?;

        match result.item {
            Some(item) => Ok(Some(item_to_session(&item)?)),
            None => Ok(None),
        }
    }

    async fn increment_attempts(&self, email: &str) -> Result<()> {
        // One server-side increment, so concurrent verifications never lose
        // updates.
        self.client
            .update_item()
            .table_name(&self.sessions_table)
            .key("email", AttributeValue::S(email.to_string()))
            .update_expression("SET attempts = attempts + :inc")
            .expression_attribute_values(":inc", AttributeValue::N("1".to_string()))
            .send()
            .await
            .map_err(|err| map_update_item_error(err.into_service_error()))?;

        Ok(())
    }

    async fn delete_session(&self, email: &str) -> Result<()> {
        self.client
            .delete_item()
            .table_name(&self.sessions_table)
            .key("email", AttributeValue::S(email.to_string()))
            .send()
            .await
            .map_err(map_delete_item_error)?;

        Ok(())
    }
}
