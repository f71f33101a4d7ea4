// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use shelf_core::crossapp::PostSummary;
use shelf_core::{Collection, Item, RecordId};

use crate::colors;

/// Maximum line width for wrapped text content (excluding indent).
const WRAP_WIDTH: usize = 96;

/// Wrap a single-line text at word boundaries.
///
/// Multi-line content is returned as-is to preserve user formatting.
pub fn wrap_text(content: &str, width: usize) -> String {
    if content.contains('\n') || content.chars().count() <= width {
        return content.to_string();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    for word in content.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines.join("\n")
}

/// Five-star bar for a 1-5 rating.
pub fn stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

fn local_marker(id: &RecordId) -> &'static str {
    if id.is_temporary() {
        " (local)"
    } else {
        ""
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}

/// One line per collection for `list`.
///
/// The active collection is marked with `*`; unsynced ones with `(local)`.
pub fn format_collection_line(collection: &Collection, active: bool) -> String {
    let count = collection.items.len();
    format!(
        "{} {} {} ({} item{}) {}{}",
        if active { "*" } else { " " },
        collection.icon,
        collection.name,
        count,
        plural(count),
        collection.id,
        local_marker(&collection.id),
    )
}

/// Heading block for `show`.
pub fn format_collection_header(collection: &Collection) -> Vec<String> {
    let mut lines = vec![format!(
        "{} {} {}",
        colors::swatch(&collection.color),
        collection.icon,
        collection.name
    )];
    if let Some(description) = &collection.description {
        lines.push(format!("  {}", description));
    }
    let mut meta = format!("  {} · {}", collection.visibility, collection.id);
    if let Some(created) = collection.created_at {
        meta.push_str(&format!(" · created {}", created.format("%Y-%m-%d")));
    }
    meta.push_str(local_marker(&collection.id));
    lines.push(meta);
    lines
}

/// Single-line summary of an item.
pub fn format_item_line(item: &Item) -> String {
    let mut line = format!("- {}", item.title);
    if let Some(rating) = item.rating {
        line.push(' ');
        line.push_str(&stars(rating));
    }
    for tag in &item.tags {
        line.push_str(&format!(" #{tag}"));
    }
    line.push_str(&format!("  {}{}", item.id, local_marker(&item.id)));
    line
}

/// Item line followed by its note, link and reference, indented.
pub fn format_item_details(item: &Item) -> Vec<String> {
    let mut lines = vec![format_item_line(item)];
    if let Some(note) = &item.note {
        for line in wrap_text(note, WRAP_WIDTH).lines() {
            lines.push(format!("    {}", line));
        }
    }
    if let Some(url) = &item.url {
        lines.push(format!("    {}", url));
    }
    if let Some(external_ref) = &item.external_ref {
        lines.push(format!("    ref: {}", external_ref));
    }
    lines
}

/// A numbered search result: author line, then the post text.
pub fn format_post(index: usize, post: &PostSummary) -> Vec<String> {
    let mut lines = vec![format!(
        "{}. {} (@{}) ♥ {} ↻ {} 💬 {}",
        index,
        post.author_name(),
        post.handle,
        post.like_count,
        post.repost_count,
        post.reply_count
    )];
    for line in wrap_text(&post.text, WRAP_WIDTH).lines() {
        lines.push(format!("   {}", line));
    }
    lines.push(format!("   {}", post.web_url()));
    lines
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
