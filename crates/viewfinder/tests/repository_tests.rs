//! Repository behavior tests, run against the in-memory backend.

mod common;

use common::mocks::FlakyImageStore;
use common::{gallery_draft, image_draft};

use viewfinder::storage::InMemoryRepository;
use viewfinder_core::auth::SessionStore;
use viewfinder_core::portfolio::{GalleryPatch, ImagePatch};
use viewfinder_core::storage::{GalleryStore, ImageStore, RepositoryError};

#[tokio::test]
async fn list_galleries_sorts_year_desc_then_order_asc() {
    let repo = InMemoryRepository::new();
    repo.create_gallery(gallery_draft("a", 2022, 1)).await.unwrap();
    repo.create_gallery(gallery_draft("b", 2024, 2)).await.unwrap();
    repo.create_gallery(gallery_draft("c", 2024, 0)).await.unwrap();
    repo.create_gallery(gallery_draft("d", 2023, 5)).await.unwrap();

    let galleries = repo.list_galleries().await.unwrap();

    let ids: Vec<&str> = galleries.iter().map(|g| g.id.as_str()).collect();
    assert_eq!(ids, vec!["c", "b", "d", "a"]);
}

#[tokio::test]
async fn create_gallery_stamps_both_timestamps() {
    let repo = InMemoryRepository::new();

    let gallery = repo
        .create_gallery(gallery_draft("g1", 2024, 0))
        .await
        .unwrap();

    assert_eq!(gallery.created_at, gallery.updated_at);

    let stored = repo.get_gallery("g1").await.unwrap().unwrap();
    assert_eq!(stored.created_at, gallery.created_at);
}

#[tokio::test]
async fn update_gallery_changes_only_named_fields() {
    let repo = InMemoryRepository::new();
    let before = repo
        .create_gallery(
            gallery_draft("g1", 2024, 3).with_cover_image("i1"),
        )
        .await
        .unwrap();

    let after = repo
        .update_gallery("g1", GalleryPatch::default().title("Renamed"))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(after.title, "Renamed");
    // Everything not named in the patch is untouched.
    assert_eq!(after.id, before.id);
    assert_eq!(after.year, before.year);
    assert_eq!(after.location, before.location);
    assert_eq!(after.cover_image_id, before.cover_image_id);
    assert_eq!(after.sort_order, before.sort_order);
    assert_eq!(after.created_at, before.created_at);
}

#[tokio::test]
async fn update_gallery_bumps_updated_at() {
    let repo = InMemoryRepository::new();
    let before = repo
        .create_gallery(gallery_draft("g1", 2024, 0))
        .await
        .unwrap();

    let after = repo
        .update_gallery("g1", GalleryPatch::default().year(2025))
        .await
        .unwrap()
        .unwrap();

    assert!(after.updated_at >= before.updated_at);
    assert_eq!(after.created_at, before.created_at);
}

#[tokio::test]
async fn update_missing_gallery_returns_none() {
    let repo = InMemoryRepository::new();

    let result = repo
        .update_gallery("nope", GalleryPatch::default().title("x"))
        .await
        .unwrap();

    assert!(result.is_none());
}

#[tokio::test]
async fn lookups_on_missing_keys_return_none_not_error() {
    let repo = InMemoryRepository::new();

    assert!(repo.get_gallery("missing").await.unwrap().is_none());
    assert!(repo.get_image("missing").await.unwrap().is_none());
    assert!(repo.get_session("missing@example.com").await.unwrap().is_none());
}

#[tokio::test]
async fn images_by_gallery_come_back_in_sort_order() {
    let repo = InMemoryRepository::new();
    repo.create_image(image_draft("i1", "g1", 2)).await.unwrap();
    repo.create_image(image_draft("i2", "g1", 0)).await.unwrap();
    repo.create_image(image_draft("i3", "g1", 1)).await.unwrap();
    repo.create_image(image_draft("other", "g2", 0)).await.unwrap();

    let images = repo.get_images_by_gallery("g1").await.unwrap();

    let ids: Vec<&str> = images.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["i2", "i3", "i1"]);
}

#[tokio::test]
async fn update_image_changes_only_named_fields() {
    let repo = InMemoryRepository::new();
    let before = repo.create_image(image_draft("i1", "g1", 1)).await.unwrap();

    let after = repo
        .update_image("i1", ImagePatch::default().caption("Dusk"))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(after.caption.as_deref(), Some("Dusk"));
    assert_eq!(after.original_url, before.original_url);
    assert_eq!(after.width, before.width);
    assert_eq!(after.height, before.height);
    assert_eq!(after.sort_order, before.sort_order);
    assert_eq!(after.created_at, before.created_at);
}

#[tokio::test]
async fn update_image_with_empty_patch_returns_current_record() {
    let repo = InMemoryRepository::new();
    let before = repo.create_image(image_draft("i1", "g1", 1)).await.unwrap();

    let after = repo
        .update_image("i1", ImagePatch::default())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(after, before);
}

#[tokio::test]
async fn delete_gallery_does_not_cascade_to_images() {
    let repo = InMemoryRepository::new();
    repo.create_gallery(gallery_draft("g1", 2024, 0)).await.unwrap();
    repo.create_image(image_draft("i1", "g1", 0)).await.unwrap();

    repo.delete_gallery("g1").await.unwrap();

    assert!(repo.get_gallery("g1").await.unwrap().is_none());
    // The image record is the caller's responsibility.
    assert!(repo.get_image("i1").await.unwrap().is_some());
}

#[tokio::test]
async fn delete_images_by_gallery_removes_all_records() {
    let repo = InMemoryRepository::new();
    repo.create_image(image_draft("i1", "g1", 0)).await.unwrap();
    repo.create_image(image_draft("i2", "g1", 1)).await.unwrap();
    repo.create_image(image_draft("keep", "g2", 0)).await.unwrap();

    repo.delete_images_by_gallery("g1").await.unwrap();

    assert!(repo.get_image("i1").await.unwrap().is_none());
    assert!(repo.get_image("i2").await.unwrap().is_none());
    assert!(repo.get_image("keep").await.unwrap().is_some());
}

#[tokio::test]
async fn bulk_delete_is_not_atomic_under_partial_failure() {
    let store = FlakyImageStore {
        inner: InMemoryRepository::new(),
        failing_id: "i1".to_string(),
    };
    store.create_image(image_draft("i1", "g1", 0)).await.unwrap();
    store.create_image(image_draft("i2", "g1", 1)).await.unwrap();

    let err = store.delete_images_by_gallery("g1").await.unwrap_err();
    assert!(matches!(err, RepositoryError::QueryFailed(_)));

    // The failing record survives, but the other delete still went through.
    assert!(store.get_image("i1").await.unwrap().is_some());
    assert!(store.get_image("i2").await.unwrap().is_none());
}

#[tokio::test]
async fn create_session_overwrites_and_resets_attempts() {
    let repo = InMemoryRepository::new();
    let email = "admin@example.com";

    repo.create_session(email, "hash-one", 1_900_000_000).await.unwrap();
    repo.increment_attempts(email).await.unwrap();
    repo.increment_attempts(email).await.unwrap();

    let replaced = repo
        .create_session(email, "hash-two", 1_900_000_600)
        .await
        .unwrap();

    assert_eq!(replaced.attempts, 0);
    let stored = repo.get_session(email).await.unwrap().unwrap();
    assert_eq!(stored.code_hash, "hash-two");
    assert_eq!(stored.attempts, 0);
    assert_eq!(stored.expires_at, 1_900_000_600);
}

#[tokio::test(flavor = "multi_thread")]
async fn concurrent_attempt_increments_are_not_lost() {
    let repo = InMemoryRepository::new();
    let email = "admin@example.com";
    repo.create_session(email, "hash", 1_900_000_000).await.unwrap();

    let tasks: Vec<_> = (0..20)
        .map(|_| {
            let repo = repo.clone();
            tokio::spawn(async move { repo.increment_attempts(email).await })
        })
        .collect();
    for task in tasks {
        task.await.unwrap().unwrap();
    }

    let session = repo.get_session(email).await.unwrap().unwrap();
    assert_eq!(session.attempts, 20);
}
