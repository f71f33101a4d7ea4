// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::commands::testing::TestContext;
use crate::error::Error;

fn fields() -> ItemArgs {
    ItemArgs::default()
}

#[test]
fn test_build_item_applies_fields() {
    let args = ItemArgs {
        note: Some("  worth it  ".to_string()),
        url: Some("https://example.com/dune".to_string()),
        external_ref: Some("https://bsky.app/profile/bob.test/post/3kabc".to_string()),
        tags: vec!["scifi, classic".to_string()],
        rating: Some(0),
    };
    let item = build_item("  Dune ", &args).unwrap();
    assert_eq!(item.title, "Dune");
    assert_eq!(item.note.as_deref(), Some("worth it"));
    assert_eq!(item.url.as_deref(), Some("https://example.com/dune"));
    assert_eq!(
        item.external_ref.as_deref(),
        Some("at://bob.test/app.bsky.feed.post/3kabc")
    );
    assert_eq!(item.tags, vec!["scifi", "classic"]);
    assert_eq!(item.rating, None);
    assert!(item.id.is_temporary());
}

#[test]
fn test_build_item_blank_note_dropped() {
    let args = ItemArgs {
        note: Some("   ".to_string()),
        ..fields()
    };
    assert!(build_item("x", &args).unwrap().note.is_none());
}

#[test]
fn test_build_item_rejects_bad_url() {
    let args = ItemArgs {
        url: Some("javascript:alert(1)".to_string()),
        ..fields()
    };
    assert!(matches!(
        build_item("x", &args),
        Err(Error::InvalidUrl { .. })
    ));
}

#[test]
fn test_add_to_active_collection() {
    let ctx = TestContext::new();
    add_impl(&ctx, "Anathem", None, &fields(), OutputFormat::Text).unwrap();
    let titles = ctx.item_titles("demo-books");
    assert_eq!(titles.len(), 4);
    assert_eq!(titles.last().map(String::as_str), Some("Anathem"));
}

#[test]
fn test_add_to_explicit_collection() {
    let ctx = TestContext::new();
    add_impl(&ctx, "Tapas bar", Some("demo-restaurants"), &fields(), OutputFormat::Json).unwrap();
    assert!(ctx
        .item_titles("demo-restaurants")
        .contains(&"Tapas bar".to_string()));
    assert_eq!(ctx.item_titles("demo-books").len(), 3);
}

#[test]
fn test_add_to_unknown_collection_changes_nothing() {
    let ctx = TestContext::new();
    let err = add_impl(&ctx, "Lost", Some("nope"), &fields(), OutputFormat::Text).unwrap_err();
    assert!(matches!(
        err,
        Error::Core(shelf_core::Error::CollectionNotFound(_))
    ));
    assert_eq!(ctx.shelf().total_items(), 6);
}

#[test]
fn test_rm_removes_item() {
    let ctx = TestContext::new();
    rm_impl(&ctx, "demo-item-3").unwrap();
    assert_eq!(ctx.item_titles("demo-books").len(), 2);
    assert!(ctx.shelf().find_item("demo-item-3").is_none());
}

#[test]
fn test_rm_unknown_item() {
    let ctx = TestContext::new();
    let err = rm_impl(&ctx, "nope").unwrap_err();
    assert!(matches!(
        err,
        Error::Core(shelf_core::Error::ItemNotFound(_))
    ));
}
