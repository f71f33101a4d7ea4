// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Record type identifiers and field limits for the two owned record types.

use serde_json::{json, Value};

/// NSID of collection records.
pub const COLLECTION_NSID: &str = "social.sharedshelf.collection";
/// NSID of item records.
pub const ITEM_NSID: &str = "social.sharedshelf.item";

pub const MAX_NAME_LEN: usize = 100;
pub const MAX_DESCRIPTION_LEN: usize = 500;
pub const MAX_ICON_LEN: usize = 4;
pub const MAX_TITLE_LEN: usize = 200;
pub const MAX_NOTE_LEN: usize = 2000;
pub const MAX_TAGS: usize = 10;
pub const MAX_TAG_LEN: usize = 50;
pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// Page size used for every `listRecords` call.
pub const LIST_LIMIT: u32 = 100;

/// Schema document for collection records.
pub fn collection_schema() -> Value {
    json!({
        "lexicon": 1,
        "id": COLLECTION_NSID,
        "description": "A curated collection of items: books, places, links, recommendations",
        "defs": {
            "main": {
                "type": "record",
                "key": "tid",
                "record": {
                    "type": "object",
                    "required": ["name", "createdAt"],
                    "properties": {
                        "name": { "type": "string", "maxLength": MAX_NAME_LEN },
                        "description": { "type": "string", "maxLength": MAX_DESCRIPTION_LEN },
                        "icon": { "type": "string", "maxLength": MAX_ICON_LEN },
                        "color": { "type": "string" },
                        "visibility": {
                            "type": "string",
                            "knownValues": ["public", "mutuals", "private"],
                            "default": "public"
                        },
                        "createdAt": { "type": "string", "format": "datetime" }
                    }
                }
            }
        }
    })
}

/// Schema document for item records.
pub fn item_schema() -> Value {
    json!({
        "lexicon": 1,
        "id": ITEM_NSID,
        "description": "An item within a collection; can reference any AT URI",
        "defs": {
            "main": {
                "type": "record",
                "key": "tid",
                "record": {
                    "type": "object",
                    "required": ["collection", "title", "createdAt"],
                    "properties": {
                        "collection": {
                            "type": "string",
                            "format": "at-uri",
                            "description": "AT URI of the parent collection"
                        },
                        "title": { "type": "string", "maxLength": MAX_TITLE_LEN },
                        "note": { "type": "string", "maxLength": MAX_NOTE_LEN },
                        "url": { "type": "string", "format": "uri" },
                        "ref": {
                            "type": "string",
                            "format": "at-uri",
                            "description": "AT URI referencing content from another app"
                        },
                        "tags": {
                            "type": "array",
                            "items": { "type": "string", "maxLength": MAX_TAG_LEN },
                            "maxLength": MAX_TAGS
                        },
                        "rating": { "type": "integer", "minimum": MIN_RATING, "maximum": MAX_RATING },
                        "createdAt": { "type": "string", "format": "datetime" }
                    }
                }
            }
        }
    })
}

#[cfg(test)]
#[path = "lexicon_tests.rs"]
mod tests;
