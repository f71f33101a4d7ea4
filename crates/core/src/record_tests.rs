// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use chrono::TimeZone;
use serde_json::json;
use yare::parameterized;

const DID: &str = "did:plc:alice";

fn col_uri(rkey: &str) -> String {
    format!("at://{DID}/{COLLECTION_NSID}/{rkey}")
}

fn item_uri(rkey: &str) -> String {
    format!("at://{DID}/{ITEM_NSID}/{rkey}")
}

fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
}

#[test]
fn decode_empty_lists_is_empty() {
    assert!(decode(&[], &[]).is_empty());
}

#[test]
fn decode_attaches_item_to_parent() {
    let cols = vec![RawRecord::new(col_uri("c1"), json!({"name": "Books"}))];
    let items = vec![RawRecord::new(
        item_uri("i1"),
        json!({"collection": col_uri("c1"), "title": "X"}),
    )];

    let tree = decode(&cols, &items);
    assert_eq!(tree.len(), 1);
    assert_eq!(tree[0].name, "Books");
    assert_eq!(tree[0].id, RecordId::remote("c1"));
    assert_eq!(tree[0].items.len(), 1);
    assert_eq!(tree[0].items[0].title, "X");
    assert_eq!(tree[0].items[0].id, RecordId::remote("i1"));
}

#[test]
fn decode_drops_orphans_silently() {
    let cols = vec![RawRecord::new(col_uri("c1"), json!({"name": "Books"}))];
    let items = vec![
        RawRecord::new(item_uri("i1"), json!({"collection": "at://unknown", "title": "Orphan"})),
        RawRecord::new(item_uri("i2"), json!({"title": "No parent"})),
    ];

    let tree = decode(&cols, &items);
    assert_eq!(tree.len(), 1);
    assert!(tree[0].items.is_empty());
}

#[test]
fn decode_fills_collection_defaults() {
    let cols = vec![RawRecord::new(col_uri("c1"), json!({}))];
    let col = &decode(&cols, &[])[0];
    assert_eq!(col.name, DEFAULT_NAME);
    assert_eq!(col.icon, DEFAULT_ICON);
    assert_eq!(col.color, DEFAULT_COLOR);
    assert_eq!(col.visibility, Visibility::Public);
    assert_eq!(col.description, None);
    assert_eq!(col.created_at, None);
}

#[test]
fn decode_fills_item_defaults() {
    let cols = vec![RawRecord::new(col_uri("c1"), json!({"name": "Books"}))];
    let items = vec![RawRecord::new(item_uri("i1"), json!({"collection": col_uri("c1")}))];
    let item = &decode(&cols, &items)[0].items[0];
    assert_eq!(item.title, "");
    assert!(item.tags.is_empty());
    assert_eq!(item.note, None);
    assert_eq!(item.rating, None);
}

#[test]
fn decode_preserves_remote_order() {
    let cols = vec![
        RawRecord::new(col_uri("c2"), json!({"name": "Second"})),
        RawRecord::new(col_uri("c1"), json!({"name": "First"})),
    ];
    let items: Vec<RawRecord> = ["b", "a", "c"]
        .iter()
        .map(|k| {
            RawRecord::new(item_uri(k), json!({"collection": col_uri("c1"), "title": k}))
        })
        .collect();

    let tree = decode(&cols, &items);
    assert_eq!(tree[0].name, "Second");
    let titles: Vec<&str> = tree[1].items.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, vec!["b", "a", "c"]);
}

#[parameterized(
    zero = { json!(0), None },
    in_range = { json!(4), Some(4) },
    too_high = { json!(9), None },
    not_a_number = { json!("5"), None },
)]
fn decode_rating(raw: Value, expected: Option<u8>) {
    let cols = vec![RawRecord::new(col_uri("c1"), json!({}))];
    let items = vec![RawRecord::new(
        item_uri("i1"),
        json!({"collection": col_uri("c1"), "title": "t", "rating": raw}),
    )];
    assert_eq!(decode(&cols, &items)[0].items[0].rating, expected);
}

#[test]
fn decode_unknown_visibility_falls_back_to_public() {
    let cols = vec![RawRecord::new(col_uri("c1"), json!({"visibility": "friends"}))];
    assert_eq!(decode(&cols, &[])[0].visibility, Visibility::Public);
}

#[test]
fn decode_parses_created_at() {
    let cols = vec![RawRecord::new(
        col_uri("c1"),
        json!({"createdAt": "2024-03-01T12:00:00.000Z"}),
    )];
    assert_eq!(decode(&cols, &[])[0].created_at, Some(fixed_now()));
}

#[test]
fn list_from_value_extracts_records() {
    let body = json!({
        "records": [{"uri": col_uri("c1"), "cid": "bafy", "value": {"name": "Books"}}],
        "cursor": "c1"
    });
    let records = RawRecord::list_from_value(body).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].cid.as_deref(), Some("bafy"));
}

#[parameterized(
    not_an_object = { json!([1, 2]) },
    missing_records = { json!({"cursor": "x"}) },
    records_not_list = { json!({"records": {"uri": "x"}}) },
    entry_without_uri = { json!({"records": [{"value": {}}]}) },
)]
fn list_from_value_rejects_malformed(body: Value) {
    let err = RawRecord::list_from_value(body).unwrap_err();
    assert!(matches!(err, Error::MalformedResponse(_)));
}

#[test]
fn encode_collection_omits_absent_fields() {
    let col = Collection::new("Books");
    let payload = encode_collection_at(&col, fixed_now());
    assert_eq!(payload["$type"], COLLECTION_NSID);
    assert_eq!(payload["createdAt"], "2024-03-01T12:00:00.000Z");
    assert!(payload.get("description").is_none());
    assert!(payload.get("items").is_none());
}

#[test]
fn encode_collection_stamps_fresh_time() {
    let mut col = Collection::new("Books");
    col.created_at = Some(Utc.with_ymd_and_hms(2001, 1, 1, 0, 0, 0).unwrap());
    let payload = encode_collection_at(&col, fixed_now());
    assert_eq!(payload["createdAt"], "2024-03-01T12:00:00.000Z");
}

#[test]
fn encode_item_maps_fields() {
    let mut item = Item::new("Dune");
    item.note = Some("reread".into());
    item.external_ref = Some("at://did:plc:bob/app.bsky.feed.post/3k".into());
    item.tags = vec!["sci-fi".into()];
    item.rating = Some(5);

    let payload = encode_item_at(&item, &col_uri("c1"), fixed_now());
    assert_eq!(
        payload,
        json!({
            "$type": ITEM_NSID,
            "collection": col_uri("c1"),
            "title": "Dune",
            "note": "reread",
            "ref": "at://did:plc:bob/app.bsky.feed.post/3k",
            "tags": ["sci-fi"],
            "rating": 5,
            "createdAt": "2024-03-01T12:00:00.000Z"
        })
    );
}

#[test]
fn encoded_collection_decodes_to_same_fields() {
    let mut col = Collection::new("Restaurants");
    col.icon = "🍽️".into();
    col.color = "#dc2626".into();
    col.visibility = Visibility::Mutuals;
    col.description = Some("Places to eat".into());

    let rec = RawRecord::new(col_uri("3k2xabcdefghi"), encode_collection(&col));
    let back = &decode(&[rec], &[])[0];

    assert_eq!(back.name, col.name);
    assert_eq!(back.icon, col.icon);
    assert_eq!(back.color, col.color);
    assert_eq!(back.visibility, col.visibility);
    assert_eq!(back.description, col.description);
    assert_eq!(back.id, RecordId::remote("3k2xabcdefghi"));
}
