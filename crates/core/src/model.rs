// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Core data model: collections, items, and their identifiers.

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::tid::{ClockSource, SystemClock};

/// Icon used when a collection record carries none.
pub const DEFAULT_ICON: &str = "📦";
/// Neutral gray used when a collection record carries no color.
pub const DEFAULT_COLOR: &str = "#525252";
/// Name used when a collection record carries none.
pub const DEFAULT_NAME: &str = "Untitled";

static TEMP_SEQ: AtomicU64 = AtomicU64::new(0);

/// Identifier of a collection or item.
///
/// A freshly created entity carries a temporary token until its first
/// successful remote write, after which it carries the remote record key.
/// The transition happens at most once.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "state", content = "id", rename_all = "lowercase")]
pub enum RecordId {
    Temporary(String),
    Remote(String),
}

impl RecordId {
    /// Mints a fresh temporary id such as `item-1718000000000000-4`.
    ///
    /// Temporary ids contain `-` and can never collide with a record key.
    pub fn temporary(kind: &str) -> Self {
        Self::temporary_with(kind, &SystemClock)
    }

    pub fn temporary_with<C: ClockSource>(kind: &str, clock: &C) -> Self {
        let seq = TEMP_SEQ.fetch_add(1, Ordering::Relaxed);
        RecordId::Temporary(format!("{kind}-{}-{seq}", clock.now_micros()))
    }

    pub fn remote(rkey: impl Into<String>) -> Self {
        RecordId::Remote(rkey.into())
    }

    pub fn as_str(&self) -> &str {
        match self {
            RecordId::Temporary(s) | RecordId::Remote(s) => s,
        }
    }

    pub fn is_temporary(&self) -> bool {
        matches!(self, RecordId::Temporary(_))
    }

    /// The remote record key, if this id has been persisted.
    pub fn rkey(&self) -> Option<&str> {
        match self {
            RecordId::Remote(k) => Some(k),
            RecordId::Temporary(_) => None,
        }
    }

    /// Replaces a temporary id with the remote record key.
    pub fn promote(&mut self, rkey: impl Into<String>) -> Result<()> {
        match self {
            RecordId::Temporary(_) => {
                *self = RecordId::Remote(rkey.into());
                Ok(())
            }
            RecordId::Remote(k) => Err(Error::AlreadyPromoted(k.clone())),
        }
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialEq<str> for RecordId {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for RecordId {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

/// Who may see a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Mutuals,
    Private,
}

impl Visibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Mutuals => "mutuals",
            Visibility::Private => "private",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Visibility {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "public" => Ok(Visibility::Public),
            "mutuals" => Ok(Visibility::Mutuals),
            "private" => Ok(Visibility::Private),
            _ => Err(Error::InvalidVisibility(s.to_string())),
        }
    }
}

/// One saved thing inside a collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: RecordId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Opaque pointer to content in another repository.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_ref: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Item {
    /// Creates a local item with a temporary id.
    pub fn new(title: impl Into<String>) -> Self {
        Item {
            id: RecordId::temporary("item"),
            title: title.into(),
            note: None,
            url: None,
            external_ref: None,
            tags: Vec::new(),
            rating: None,
            created_at: Some(Utc::now()),
        }
    }

    /// Whether `needle` (already lowercased) occurs in title, note or tags.
    pub fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.note.as_deref().is_some_and(|n| n.to_lowercase().contains(needle))
            || self.tags.iter().any(|t| t.to_lowercase().contains(needle))
    }
}

/// A named, ordered list of items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    pub id: RecordId,
    pub name: String,
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub color: String,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Collection {
    /// Creates an empty local collection with a temporary id and defaults.
    pub fn new(name: impl Into<String>) -> Self {
        Collection {
            id: RecordId::temporary("col"),
            name: name.into(),
            icon: DEFAULT_ICON.to_string(),
            description: None,
            color: DEFAULT_COLOR.to_string(),
            visibility: Visibility::Public,
            items: Vec::new(),
            created_at: Some(Utc::now()),
        }
    }

    pub fn find_item(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
