// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Initial read path with fallbacks.

use crate::demo;
use crate::error::Error;
use crate::storage::Storage;

use super::client::RepoClient;
use super::shelf::Shelf;

/// Where a loaded shelf came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShelfSource {
    Remote,
    /// Last-known-good tree from durable storage.
    Snapshot,
    /// Bundled sample data.
    Demo,
}

impl ShelfSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShelfSource::Remote => "remote",
            ShelfSource::Snapshot => "snapshot",
            ShelfSource::Demo => "demo",
        }
    }
}

/// A shelf ready to display, plus the remote error that forced a fallback.
#[derive(Debug)]
pub struct LoadedShelf {
    pub shelf: Shelf,
    pub source: ShelfSource,
    pub error: Option<Error>,
}

/// Loads the shelf: remote tree when signed in, else snapshot, else demo data.
///
/// Never fails; a remote error is carried in [`LoadedShelf::error`]. A
/// successful remote read refreshes the stored snapshot.
pub async fn load_shelf(client: Option<&RepoClient<'_>>, storage: &Storage) -> LoadedShelf {
    let active = storage.active().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "could not read selection");
        None
    });

    let mut error = None;
    if let Some(client) = client {
        match client.fetch_collections().await {
            Ok(collections) => {
                if let Err(e) = storage.save_snapshot(&collections) {
                    tracing::warn!(error = %e, "could not store snapshot");
                }
                return LoadedShelf {
                    shelf: Shelf::with_active(collections, active),
                    source: ShelfSource::Remote,
                    error: None,
                };
            }
            Err(e) => {
                tracing::warn!(error = %e, "remote load failed; falling back");
                error = Some(Error::from(e));
            }
        }
    }

    match storage.load_snapshot() {
        Ok(Some(snapshot)) => LoadedShelf {
            shelf: Shelf::with_active(snapshot.collections, active),
            source: ShelfSource::Snapshot,
            error,
        },
        Ok(None) => demo_shelf(active, error),
        Err(e) => {
            tracing::warn!(error = %e, "could not read snapshot");
            demo_shelf(active, error)
        }
    }
}

fn demo_shelf(active: Option<String>, error: Option<Error>) -> LoadedShelf {
    LoadedShelf {
        shelf: Shelf::with_active(demo::sample_collections(), active),
        source: ShelfSource::Demo,
        error,
    }
}
