// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for the read path and its fallbacks.

#![allow(clippy::unwrap_used)]

use super::client::RepoClient;
use super::fetch::{load_shelf, ShelfSource};
use super::test_helpers::{seeded_mock, test_session};
use super::transport_tests::Fail;
use crate::error::Error;
use crate::lexicon::{COLLECTION_NSID, ITEM_NSID};
use crate::model::Collection;
use crate::storage::Storage;

#[tokio::test]
async fn signed_in_loads_remote_and_refreshes_snapshot() {
    let mock = seeded_mock();
    let session = test_session();
    let client = RepoClient::new(&mock, &session);
    let storage = Storage::open_in_memory().unwrap();

    let loaded = load_shelf(Some(&client), &storage).await;

    assert_eq!(loaded.source, ShelfSource::Remote);
    assert!(loaded.error.is_none());
    assert_eq!(loaded.shelf.collections()[0].name, "Books");
    let snap = storage.load_snapshot().unwrap().unwrap();
    assert_eq!(snap.collections, loaded.shelf.collections());
}

#[tokio::test]
async fn remote_failure_falls_back_to_snapshot() {
    let mock = seeded_mock();
    mock.fail_list(COLLECTION_NSID, Fail::Malformed);
    let session = test_session();
    let client = RepoClient::new(&mock, &session);
    let storage = Storage::open_in_memory().unwrap();
    storage.save_snapshot(&[Collection::new("Cached")]).unwrap();

    let loaded = load_shelf(Some(&client), &storage).await;

    assert_eq!(loaded.source, ShelfSource::Snapshot);
    assert!(matches!(loaded.error, Some(Error::MalformedResponse(_))));
    assert_eq!(loaded.shelf.collections()[0].name, "Cached");
}

#[tokio::test]
async fn remote_failure_without_snapshot_falls_back_to_demo() {
    let mock = seeded_mock();
    mock.fail_list(ITEM_NSID, Fail::Network);
    let session = test_session();
    let client = RepoClient::new(&mock, &session);
    let storage = Storage::open_in_memory().unwrap();

    let loaded = load_shelf(Some(&client), &storage).await;

    assert_eq!(loaded.source, ShelfSource::Demo);
    assert!(matches!(loaded.error, Some(Error::Network(_))));
    assert!(!loaded.shelf.is_empty());
}

#[tokio::test]
async fn signed_out_uses_demo_data() {
    let storage = Storage::open_in_memory().unwrap();

    let loaded = load_shelf(None, &storage).await;

    assert_eq!(loaded.source, ShelfSource::Demo);
    assert!(loaded.error.is_none());
    assert_eq!(loaded.shelf.active_id(), Some("demo-books"));
}

#[tokio::test]
async fn stored_selection_is_restored() {
    let storage = Storage::open_in_memory().unwrap();
    storage.set_active(Some("demo-links")).unwrap();

    let loaded = load_shelf(None, &storage).await;

    assert_eq!(loaded.shelf.active_id(), Some("demo-links"));
}
