// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

//! Test infrastructure for command testing without filesystem setup.
//!
//! `TestContext` wraps a signed-out [`Context`] over in-memory storage, so
//! commands run against the demo shelf and never touch the network.
//!
//! ```rust,ignore
//! let ctx = TestContext::new();
//! collection::select_impl(&ctx, "demo-links").unwrap();
//! assert_eq!(ctx.shelf().active_id(), Some("demo-links"));
//! ```

use shelf_core::{Collection, Item, Shelf, Storage};

use super::Context;
use crate::config::Config;

pub struct TestContext {
    pub ctx: Context,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Deref for TestContext {
    type Target = Context;

    fn deref(&self) -> &Context {
        &self.ctx
    }
}

impl TestContext {
    pub fn new() -> Self {
        let storage = Storage::open_in_memory().expect("Failed to open in-memory storage");
        let ctx = Context::new(Config::default(), storage).expect("Failed to build context");
        TestContext { ctx }
    }

    /// Seeds the stored snapshot so the next load starts from `collections`.
    pub fn with_collections(self, collections: Vec<Collection>) -> Self {
        self.ctx.storage.save_snapshot(&collections).unwrap();
        self
    }

    /// Reloads the shelf the way the next command would see it.
    pub fn shelf(&self) -> Shelf {
        self.ctx.load().0
    }

    pub fn collection_names(&self) -> Vec<String> {
        self.shelf()
            .collections()
            .iter()
            .map(|c| c.name.clone())
            .collect()
    }

    pub fn item_titles(&self, collection_id: &str) -> Vec<String> {
        self.shelf()
            .collection(collection_id)
            .map(|c| c.items.iter().map(|i: &Item| i.title.clone()).collect())
            .unwrap_or_default()
    }
}

mod tests {
    use super::*;
    use shelf_core::sync::ShelfSource;

    #[test]
    fn test_fresh_context_is_local_demo() {
        let ctx = TestContext::new();
        assert!(ctx.mode().is_local());
        assert!(ctx.client().is_none());
        let (shelf, source) = ctx.load();
        assert_eq!(source, ShelfSource::Demo);
        assert_eq!(shelf.collections().len(), 3);
    }

    #[test]
    fn test_persist_round_trips_selection() {
        let ctx = TestContext::new();
        let mut shelf = ctx.shelf();
        shelf.select("demo-links").unwrap();
        ctx.persist(&shelf).unwrap();

        let (reloaded, source) = ctx.load();
        assert_eq!(source, ShelfSource::Snapshot);
        assert_eq!(reloaded.active_id(), Some("demo-links"));
    }

    #[test]
    fn test_target_collection_prefers_explicit() {
        let ctx = TestContext::new();
        let shelf = ctx.shelf();
        assert_eq!(
            Context::target_collection(&shelf, Some("demo-links")).unwrap(),
            "demo-links"
        );
        assert_eq!(
            Context::target_collection(&shelf, None).unwrap(),
            "demo-books"
        );
    }

    #[test]
    fn test_target_collection_requires_selection() {
        let shelf = Shelf::new(Vec::new());
        assert!(matches!(
            Context::target_collection(&shelf, None),
            Err(crate::error::Error::NoActiveCollection)
        ));
    }
}
