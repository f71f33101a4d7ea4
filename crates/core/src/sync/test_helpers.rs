// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for sync module tests.

use serde_json::json;

use crate::lexicon::{COLLECTION_NSID, ITEM_NSID};
use crate::session::Session;

use super::transport_tests::MockTransport;

pub const DID: &str = "did:plc:alice";

pub fn test_session() -> Session {
    Session {
        did: DID.into(),
        handle: "alice.test".into(),
        access_jwt: "access-0".into(),
        refresh_jwt: "refresh-0".into(),
    }
}

pub fn col_uri(rkey: &str) -> String {
    format!("at://{DID}/{COLLECTION_NSID}/{rkey}")
}

pub fn item_uri(rkey: &str) -> String {
    format!("at://{DID}/{ITEM_NSID}/{rkey}")
}

/// Mock repository holding one "Books" collection (`c1`) with items `i1` and `i2`,
/// plus an orphan item pointing at a missing collection.
pub fn seeded_mock() -> MockTransport {
    let mock = MockTransport::new();
    mock.insert(col_uri("c1"), json!({"name": "Books", "icon": "📚", "color": "#d97706"}));
    mock.insert(item_uri("i1"), json!({"collection": col_uri("c1"), "title": "Dune"}));
    mock.insert(item_uri("i2"), json!({"collection": col_uri("c1"), "title": "Piranesi"}));
    mock.insert(item_uri("i3"), json!({"collection": col_uri("gone"), "title": "Orphan"}));
    mock
}
