// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Input checks against the record lexicon limits.
//!
//! Lengths are UTF-8 bytes, except the icon which is counted in characters
//! so that multi-codepoint emoji fit.

use std::sync::LazyLock;

use regex::Regex;
use shelf_core::crossapp::url_to_at_uri;
use shelf_core::lexicon::{
    MAX_DESCRIPTION_LEN, MAX_ICON_LEN, MAX_NAME_LEN, MAX_NOTE_LEN, MAX_TAGS, MAX_TAG_LEN,
    MAX_TITLE_LEN,
};
use shelf_core::AtUri;

use crate::error::{Error, Result};

static HEX_COLOR_RE: LazyLock<Regex> = LazyLock::new(|| match Regex::new(r"^#[0-9a-fA-F]{6}$") {
    Ok(re) => re,
    Err(_) => unreachable!("static regex pattern"),
});

fn check_len(field: &'static str, value: &str, max: usize) -> Result<()> {
    if value.len() > max {
        return Err(Error::FieldTooLong {
            field,
            actual: value.len(),
            max,
        });
    }
    Ok(())
}

fn required(field: &'static str, value: &str, max: usize) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::FieldEmpty { field });
    }
    check_len(field, trimmed, max)?;
    Ok(trimmed.to_string())
}

/// Trimmed collection name.
pub fn validate_name(name: &str) -> Result<String> {
    required("Name", name, MAX_NAME_LEN)
}

/// Trimmed item title.
pub fn validate_title(title: &str) -> Result<String> {
    required("Title", title, MAX_TITLE_LEN)
}

pub fn validate_description(description: &str) -> Result<()> {
    check_len("Description", description, MAX_DESCRIPTION_LEN)
}

pub fn validate_note(note: &str) -> Result<()> {
    check_len("Note", note, MAX_NOTE_LEN)
}

pub fn validate_icon(icon: &str) -> Result<()> {
    let count = icon.chars().count();
    if count == 0 {
        return Err(Error::FieldEmpty { field: "Icon" });
    }
    if count > MAX_ICON_LEN {
        return Err(Error::FieldTooLong {
            field: "Icon",
            actual: count,
            max: MAX_ICON_LEN,
        });
    }
    Ok(())
}

pub fn validate_color(color: &str) -> Result<()> {
    if HEX_COLOR_RE.is_match(color) {
        Ok(())
    } else {
        Err(Error::InvalidColor(color.to_string()))
    }
}

pub fn validate_url(url: &str) -> Result<()> {
    let lower = url.to_ascii_lowercase();
    let rest = lower
        .strip_prefix("https://")
        .or_else(|| lower.strip_prefix("http://"));
    match rest {
        Some(host) if !host.is_empty() && !url.contains(char::is_whitespace) => Ok(()),
        _ => Err(Error::InvalidUrl {
            field: "URL",
            value: url.to_string(),
        }),
    }
}

/// Splits comma-separated tags, trimming and dropping empties and duplicates.
pub fn parse_tags(raw: &[String]) -> Result<Vec<String>> {
    let mut tags: Vec<String> = Vec::new();
    for tag in raw.iter().flat_map(|s| s.split(',')) {
        let tag = tag.trim();
        if tag.is_empty() || tags.iter().any(|t| t == tag) {
            continue;
        }
        check_len("Tag", tag, MAX_TAG_LEN)?;
        tags.push(tag.to_string());
    }
    if tags.len() > MAX_TAGS {
        return Err(Error::TagLimitExceeded { max: MAX_TAGS });
    }
    Ok(tags)
}

/// Zero means "no rating".
pub fn normalize_rating(rating: Option<u8>) -> Option<u8> {
    rating.filter(|r| *r != 0)
}

/// Resolves a reference argument to an AT URI.
///
/// Accepts an `at://` URI or a web URL of a recognised app.
pub fn parse_target(target: &str) -> Result<AtUri> {
    let target = target.trim();
    if target.starts_with("at://") {
        return AtUri::parse(target).map_err(|_| Error::InvalidTarget(target.to_string()));
    }
    url_to_at_uri(target).ok_or_else(|| Error::InvalidTarget(target.to_string()))
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
