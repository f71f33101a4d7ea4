// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Optimistic mutations with remote reconciliation.
//!
//! Each operation runs in two phases:
//!
//! 1. Apply the change to the local [`Shelf`] unconditionally.
//! 2. If a [`RepoClient`] is supplied, mirror the change remotely and
//!    reconcile: a successful create promotes the temporary id to the
//!    remote record key in place; a failure leaves the local state as is
//!    and yields [`Outcome::Failed`].
//!
//! Only local lookups (unknown collection or item id) return `Err`.
//!
//! A created entry always enters the tree under a temporary id of its own.
//! A draft whose id is already remote, or already present in the tree, is
//! given a fresh one.

use futures_util::future::join_all;

use crate::error::{Result, SyncError};
use crate::model::{Collection, Item, RecordId};

use super::client::RepoClient;
use super::shelf::Shelf;

/// Result of the remote phase of a mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum Outcome<T> {
    /// No remote write was attempted (signed out, or nothing remote to touch).
    LocalOnly,
    /// The remote repository reflects the change.
    Synced(T),
    /// The local change stands but the remote write failed.
    Failed(SyncError),
}

impl<T> Outcome<T> {
    pub fn is_failed(&self) -> bool {
        matches!(self, Outcome::Failed(_))
    }

    /// Banner text for a failed outcome.
    pub fn advisory(&self) -> Option<String> {
        match self {
            Outcome::Failed(e) => Some(e.advisory()),
            _ => None,
        }
    }
}

/// Appends an item to a collection, then writes it remotely.
///
/// On success the outcome carries the record key that replaced the item's
/// temporary id.
pub async fn create_item(
    shelf: &mut Shelf,
    client: Option<&RepoClient<'_>>,
    collection_id: &str,
    mut item: Item,
) -> Result<Outcome<String>> {
    if !item.id.is_temporary() || shelf.find_item(item.id.as_str()).is_some() {
        item.id = RecordId::temporary("item");
    }
    let temp_id = item.id.to_string();
    let draft = item.clone();
    let pos = shelf.push_item(collection_id, item)?;

    let Some(client) = client else {
        return Ok(Outcome::LocalOnly);
    };

    let parent_rkey = shelf
        .collection(collection_id)
        .and_then(|c| c.id.rkey())
        .map(str::to_string);
    let Some(parent_rkey) = parent_rkey else {
        tracing::warn!(collection = collection_id, "parent collection not synced; item kept local");
        return Ok(Outcome::Failed(SyncError::ItemNotSynced {
            reason: "collection has not been synced".to_string(),
        }));
    };

    match client.put_item(&draft, &parent_rkey).await {
        Ok(rkey) => {
            shelf.promote_item_at(collection_id, pos, &rkey)?;
            Ok(Outcome::Synced(rkey))
        }
        Err(e) => {
            tracing::warn!(item = %temp_id, error = %e, "item write failed");
            Ok(Outcome::Failed(SyncError::ItemNotSynced { reason: e.to_string() }))
        }
    }
}

/// Removes an item locally, then deletes its remote record.
///
/// The local removal is never rolled back.
pub async fn delete_item(
    shelf: &mut Shelf,
    client: Option<&RepoClient<'_>>,
    item_id: &str,
) -> Result<Outcome<()>> {
    let removed = shelf.remove_item(item_id)?;

    let (Some(client), Some(rkey)) = (client, removed.id.rkey()) else {
        return Ok(Outcome::LocalOnly);
    };

    match client.delete_item(rkey).await {
        Ok(()) => Ok(Outcome::Synced(())),
        Err(e) => {
            tracing::warn!(item = rkey, error = %e, "item delete failed");
            Ok(Outcome::Failed(SyncError::ItemNotDeleted { reason: e.to_string() }))
        }
    }
}

/// Appends and selects a collection, then writes it remotely.
///
/// The selection follows the collection through its id promotion.
pub async fn create_collection(
    shelf: &mut Shelf,
    client: Option<&RepoClient<'_>>,
    mut collection: Collection,
) -> Result<Outcome<String>> {
    if !collection.id.is_temporary() || shelf.collection(collection.id.as_str()).is_some() {
        collection.id = RecordId::temporary("col");
    }
    let temp_id = collection.id.to_string();
    let draft = collection.clone();
    let pos = shelf.push_collection(collection);

    let Some(client) = client else {
        return Ok(Outcome::LocalOnly);
    };

    match client.put_collection(&draft).await {
        Ok(rkey) => {
            shelf.promote_collection_at(pos, &rkey)?;
            Ok(Outcome::Synced(rkey))
        }
        Err(e) => {
            tracing::warn!(collection = %temp_id, error = %e, "collection write failed");
            Ok(Outcome::Failed(SyncError::CollectionNotSynced { reason: e.to_string() }))
        }
    }
}

/// Removes a collection and its items locally, then deletes them remotely.
///
/// Child item deletes run concurrently and are all attempted; the
/// collection record is deleted afterwards regardless of their results.
/// Any failure is reported once, with counts.
pub async fn delete_collection(
    shelf: &mut Shelf,
    client: Option<&RepoClient<'_>>,
    collection_id: &str,
) -> Result<Outcome<()>> {
    let removed = shelf.remove_collection(collection_id)?;

    let Some(client) = client else {
        return Ok(Outcome::LocalOnly);
    };

    let item_rkeys: Vec<&str> = removed.items.iter().filter_map(|i| i.id.rkey()).collect();
    let own_rkey = removed.id.rkey();
    let attempted = item_rkeys.len() + usize::from(own_rkey.is_some());
    if attempted == 0 {
        return Ok(Outcome::LocalOnly);
    }

    let results = join_all(item_rkeys.iter().map(|rkey| client.delete_item(rkey))).await;
    let mut failed = 0;
    for (rkey, result) in item_rkeys.iter().zip(&results) {
        if let Err(e) = result {
            tracing::warn!(item = rkey, error = %e, "child item delete failed");
            failed += 1;
        }
    }

    if let Some(rkey) = own_rkey {
        if let Err(e) = client.delete_collection(rkey).await {
            tracing::warn!(collection = rkey, error = %e, "collection delete failed");
            failed += 1;
        }
    }

    if failed > 0 {
        Ok(Outcome::Failed(SyncError::CollectionNotDeleted { failed, attempted }))
    } else {
        Ok(Outcome::Synced(()))
    }
}
