// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use shelf_core::lexicon::{COLLECTION_NSID, ITEM_NSID};

#[test]
fn schema_defaults_to_both_records() {
    let docs = documents(None);
    assert_eq!(docs.len(), 2);
    assert_eq!(docs[0]["id"], COLLECTION_NSID);
    assert_eq!(docs[1]["id"], ITEM_NSID);
}

#[test]
fn schema_item_only() {
    let docs = documents(Some(SchemaKind::Item));
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0]["defs"]["main"]["key"], "tid");
}

#[test]
fn schema_run_prints() {
    assert!(run(Some(SchemaKind::Collection)).is_ok());
}
