//! Integration tests for file-backed session storage.
//!
//! These tests verify the storage contract against real directories:
//! round-tripping, absence handling, corrupt records, and file naming.

use chrono::{Duration, Utc};
use tempfile::tempdir;

use shopify_admin::storage::{FileSessionStorage, SessionStorage, StorageError};
use shopify_admin::{AuthScopes, Session, ShopDomain};

fn online_session(id: &str) -> Session {
    let mut session = Session::new(
        id.to_string(),
        ShopDomain::new("test-shop").unwrap(),
        Some("shpat_abc123".to_string()),
        "write_products,read_orders".parse().unwrap(),
        true,
        Some(Utc::now() + Duration::hours(12)),
    );
    session.state = Some("nonce-42".to_string());
    session
}

#[tokio::test]
async fn test_store_then_load_round_trips_every_field() {
    let dir = tempdir().unwrap();
    let storage = FileSessionStorage::new(dir.path()).unwrap();

    let session = online_session("online_abc123");
    storage.store_session(&session).await.unwrap();

    let loaded = storage.load_session("online_abc123").await.unwrap();
    assert_eq!(loaded, Some(session));
}

#[tokio::test]
async fn test_offline_session_without_token_round_trips() {
    let dir = tempdir().unwrap();
    let storage = FileSessionStorage::new(dir.path()).unwrap();

    let shop = ShopDomain::new("test-shop").unwrap();
    let session = Session::new(
        Session::generate_offline_id(&shop),
        shop,
        None,
        AuthScopes::new(),
        false,
        None,
    );
    storage.store_session(&session).await.unwrap();

    let loaded = storage.load_session(session.id()).await.unwrap().unwrap();
    assert_eq!(loaded, session);
    assert!(loaded.access_token.is_none());
    assert!(loaded.expires.is_none());
}

#[tokio::test]
async fn test_load_unknown_id_is_none_not_an_error() {
    let dir = tempdir().unwrap();
    let storage = FileSessionStorage::new(dir.path()).unwrap();

    assert!(storage.load_session("never-stored").await.unwrap().is_none());
}

#[tokio::test]
async fn test_store_overwrites_existing_record() {
    let dir = tempdir().unwrap();
    let storage = FileSessionStorage::new(dir.path()).unwrap();

    storage.store_session(&online_session("abc")).await.unwrap();

    let mut updated = online_session("abc");
    updated.access_token = Some("shpat_rotated".to_string());
    storage.store_session(&updated).await.unwrap();

    let loaded = storage.load_session("abc").await.unwrap().unwrap();
    assert_eq!(loaded.access_token.as_deref(), Some("shpat_rotated"));
}

#[tokio::test]
async fn test_delete_then_load_is_none() {
    let dir = tempdir().unwrap();
    let storage = FileSessionStorage::new(dir.path()).unwrap();

    let session = online_session("abc");
    storage.store_session(&session).await.unwrap();

    assert!(storage.delete_session("abc").await.unwrap());
    assert!(storage.load_session("abc").await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_of_absent_record_is_success() {
    let dir = tempdir().unwrap();
    let storage = FileSessionStorage::new(dir.path()).unwrap();

    assert!(!storage.delete_session("never-stored").await.unwrap());
}

#[tokio::test]
async fn test_construction_creates_directory_and_parents_eagerly() {
    let base = tempdir().unwrap();
    let nested = base.path().join("app").join("data").join("sessions");
    assert!(!nested.exists());

    // Created by construction, before any store/load call
    let storage = FileSessionStorage::new(&nested).unwrap();
    assert!(nested.is_dir());

    let session = online_session("abc");
    storage.store_session(&session).await.unwrap();
    assert_eq!(storage.load_session("abc").await.unwrap(), Some(session));
}

#[tokio::test]
async fn test_corrupt_record_is_a_deserialization_error() {
    let dir = tempdir().unwrap();
    let storage = FileSessionStorage::new(dir.path()).unwrap();

    std::fs::write(dir.path().join("broken.json"), b"{ not json").unwrap();

    let result = storage.load_session("broken").await;
    assert!(matches!(
        result,
        Err(StorageError::Deserialization { ref id, .. }) if id == "broken"
    ));
}

#[tokio::test]
async fn test_id_with_path_separators_stays_inside_the_directory() {
    let dir = tempdir().unwrap();
    let storage = FileSessionStorage::new(dir.path()).unwrap();

    let session = online_session("shops/alpha/../session-1");
    storage.store_session(&session).await.unwrap();

    // Exactly one file, directly inside the storage directory
    let entries: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap())
        .collect();
    assert_eq!(entries.len(), 1);
    assert!(entries[0].file_type().unwrap().is_file());

    let loaded = storage.load_session("shops/alpha/../session-1").await.unwrap();
    assert_eq!(loaded, Some(session));
}

#[tokio::test]
async fn test_distinct_ids_do_not_collide() {
    let dir = tempdir().unwrap();
    let storage = FileSessionStorage::new(dir.path()).unwrap();

    let first = online_session("session-1");
    let second = online_session("session-2");
    storage.store_session(&first).await.unwrap();
    storage.store_session(&second).await.unwrap();

    assert_eq!(storage.load_session("session-1").await.unwrap(), Some(first));
    assert_eq!(
        storage.load_session("session-2").await.unwrap(),
        Some(second)
    );
}
