// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Bundled sample shelf shown when no remote or stored data is available.

use crate::model::{Collection, Item, RecordId, Visibility};

fn item(
    id: &str,
    title: &str,
    note: &str,
    url: Option<&str>,
    tags: &[&str],
    rating: Option<u8>,
) -> Item {
    Item {
        id: RecordId::Temporary(id.to_string()),
        title: title.to_string(),
        note: Some(note.to_string()),
        url: url.map(str::to_string),
        external_ref: None,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        rating,
        created_at: None,
    }
}

fn collection(
    id: &str,
    name: &str,
    icon: &str,
    description: &str,
    color: &str,
    visibility: Visibility,
    items: Vec<Item>,
) -> Collection {
    Collection {
        id: RecordId::Temporary(id.to_string()),
        name: name.to_string(),
        icon: icon.to_string(),
        description: Some(description.to_string()),
        color: color.to_string(),
        visibility,
        items,
        created_at: None,
    }
}

/// Sample collections with stable `demo-*` ids.
pub fn sample_collections() -> Vec<Collection> {
    vec![
        collection(
            "demo-books",
            "Books",
            "📚",
            "Books I've read, want to read, or recommend",
            "#d97706",
            Visibility::Public,
            vec![
                item(
                    "demo-item-1",
                    "The Dispossessed",
                    "Le Guin at her sharpest. An anarchist moon and a capitalist planet.",
                    None,
                    &["sci-fi", "classic"],
                    Some(5),
                ),
                item(
                    "demo-item-2",
                    "Designing Data-Intensive Applications",
                    "The chapter on replication is worth rereading every year.",
                    None,
                    &["tech", "distributed-systems"],
                    Some(5),
                ),
                item(
                    "demo-item-3",
                    "Piranesi",
                    "Short, strange, and lovely.",
                    None,
                    &["fantasy"],
                    Some(4),
                ),
            ],
        ),
        collection(
            "demo-restaurants",
            "Restaurants",
            "🍽️",
            "Places to eat, tried and want to try",
            "#dc2626",
            Visibility::Mutuals,
            vec![
                item(
                    "demo-item-4",
                    "Corner ramen place",
                    "Get the spicy miso. Cash only.",
                    None,
                    &["ramen", "cheap-eats"],
                    Some(4),
                ),
                item(
                    "demo-item-5",
                    "Saturday farmers market",
                    "The dumpling stall by the entrance.",
                    None,
                    &["weekend"],
                    None,
                ),
            ],
        ),
        collection(
            "demo-links",
            "Links",
            "🔗",
            "Articles, tools, and resources worth saving",
            "#0891b2",
            Visibility::Public,
            vec![item(
                "demo-item-6",
                "AT Protocol overview",
                "How repositories, lexicons, and record keys fit together.",
                Some("https://atproto.com/guides/overview"),
                &["atproto", "reference"],
                None,
            )],
        ),
    ]
}
