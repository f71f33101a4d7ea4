// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Mapping between remote records and the local collection tree.
//!
//! Decoding reassembles two flat record lists (collections and items) into
//! a tree. Items whose parent reference does not match any fetched
//! collection are dropped. Missing optional fields take defaults; decoding
//! only fails when the list envelope itself is malformed.
//!
//! Encoding produces the record payloads written by `putRecord`. Absent
//! optional fields are omitted, and `createdAt` is always stamped at encode
//! time.

use std::collections::HashMap;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::lexicon::{COLLECTION_NSID, ITEM_NSID, MAX_RATING, MIN_RATING};
use crate::model::{
    Collection, Item, RecordId, Visibility, DEFAULT_COLOR, DEFAULT_ICON, DEFAULT_NAME,
};
use crate::uri::rkey_of;

/// One entry of a `listRecords` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    pub uri: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cid: Option<String>,
    #[serde(default)]
    pub value: Value,
}

impl RawRecord {
    pub fn new(uri: impl Into<String>, value: Value) -> Self {
        RawRecord { uri: uri.into(), cid: None, value }
    }

    /// Extracts the `records` list from a `listRecords` response body.
    pub fn list_from_value(body: Value) -> Result<Vec<RawRecord>> {
        let records = match body {
            Value::Object(mut obj) => obj.remove("records"),
            _ => None,
        };
        match records {
            Some(list @ Value::Array(_)) => serde_json::from_value(list)
                .map_err(|e| Error::MalformedResponse(format!("record entry: {e}"))),
            _ => Err(Error::MalformedResponse("`records` is not a list".to_string())),
        }
    }
}

/// Builds the collection tree from fetched collection and item records.
///
/// Collection order and per-collection item order follow the input order.
pub fn decode(collections: &[RawRecord], items: &[RawRecord]) -> Vec<Collection> {
    let mut tree: Vec<Collection> = collections.iter().map(decode_collection).collect();

    let by_uri: HashMap<&str, usize> =
        collections.iter().enumerate().map(|(i, rec)| (rec.uri.as_str(), i)).collect();

    for rec in items {
        let parent = rec.value.get("collection").and_then(Value::as_str).unwrap_or_default();
        match by_uri.get(parent) {
            Some(&idx) => tree[idx].items.push(decode_item(rec)),
            None => tracing::debug!(item = %rec.uri, parent, "dropping item with unknown parent"),
        }
    }

    tree
}

fn decode_collection(rec: &RawRecord) -> Collection {
    let v = &rec.value;
    Collection {
        id: RecordId::remote(rkey_of(&rec.uri)),
        name: text(v, "name").unwrap_or_else(|| DEFAULT_NAME.to_string()),
        icon: text(v, "icon").unwrap_or_else(|| DEFAULT_ICON.to_string()),
        description: text(v, "description").filter(|s| !s.is_empty()),
        color: text(v, "color").unwrap_or_else(|| DEFAULT_COLOR.to_string()),
        visibility: text(v, "visibility")
            .and_then(|s| s.parse::<Visibility>().ok())
            .unwrap_or_default(),
        items: Vec::new(),
        created_at: timestamp(v),
    }
}

fn decode_item(rec: &RawRecord) -> Item {
    let v = &rec.value;
    let tags = match v.get("tags") {
        Some(Value::Array(list)) => list.iter().filter_map(scalar).collect(),
        _ => Vec::new(),
    };
    Item {
        id: RecordId::remote(rkey_of(&rec.uri)),
        title: text(v, "title").unwrap_or_default(),
        note: text(v, "note").filter(|s| !s.is_empty()),
        url: text(v, "url").filter(|s| !s.is_empty()),
        external_ref: text(v, "ref").filter(|s| !s.is_empty()),
        tags,
        rating: v
            .get("rating")
            .and_then(Value::as_u64)
            .and_then(|r| u8::try_from(r).ok())
            .filter(|r| (MIN_RATING..=MAX_RATING).contains(r)),
        created_at: timestamp(v),
    }
}

/// String form of a scalar JSON value; `None` for null, arrays and objects.
fn scalar(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn text(v: &Value, key: &str) -> Option<String> {
    v.get(key).and_then(scalar)
}

fn timestamp(v: &Value) -> Option<DateTime<Utc>> {
    let raw = v.get("createdAt")?.as_str()?;
    DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.with_timezone(&Utc))
}

fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Encodes a collection payload stamped with the current time.
pub fn encode_collection(collection: &Collection) -> Value {
    encode_collection_at(collection, Utc::now())
}

pub fn encode_collection_at(collection: &Collection, now: DateTime<Utc>) -> Value {
    let mut m = Map::new();
    m.insert("$type".into(), COLLECTION_NSID.into());
    m.insert("name".into(), collection.name.clone().into());
    if let Some(desc) = &collection.description {
        m.insert("description".into(), desc.clone().into());
    }
    m.insert("icon".into(), collection.icon.clone().into());
    m.insert("color".into(), collection.color.clone().into());
    m.insert("visibility".into(), collection.visibility.as_str().into());
    m.insert("createdAt".into(), format_timestamp(now).into());
    Value::Object(m)
}

/// Encodes an item payload pointing at `parent_uri`, stamped with the current time.
pub fn encode_item(item: &Item, parent_uri: &str) -> Value {
    encode_item_at(item, parent_uri, Utc::now())
}

pub fn encode_item_at(item: &Item, parent_uri: &str, now: DateTime<Utc>) -> Value {
    let mut m = Map::new();
    m.insert("$type".into(), ITEM_NSID.into());
    m.insert("collection".into(), parent_uri.into());
    m.insert("title".into(), item.title.clone().into());
    if let Some(note) = &item.note {
        m.insert("note".into(), note.clone().into());
    }
    if let Some(url) = &item.url {
        m.insert("url".into(), url.clone().into());
    }
    if let Some(r) = &item.external_ref {
        m.insert("ref".into(), r.clone().into());
    }
    m.insert("tags".into(), item.tags.clone().into());
    if let Some(rating) = item.rating {
        m.insert("rating".into(), rating.into());
    }
    m.insert("createdAt".into(), format_timestamp(now).into());
    Value::Object(m)
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
