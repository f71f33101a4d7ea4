// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! References to content owned by other AT Protocol apps.
//!
//! Items can point at posts, blog entries, or links from other apps. This
//! module recognises their web URLs, searches public posts, and resolves
//! AT URIs through the public API.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::error::Result;
use crate::model::Item;
use crate::sync::Transport;
use crate::uri::{rkey_of, AtUri};

/// Result count used by post search.
pub const SEARCH_LIMIT: u32 = 6;

const TITLE_SNIPPET_CHARS: usize = 60;
const BARE_TITLE_CHARS: usize = 80;

static BSKY_POST_RE: LazyLock<Regex> =
    LazyLock::new(|| match Regex::new(r"bsky\.app/profile/([^/]+)/post/([^/?#]+)") {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    });
static WHTWND_RE: LazyLock<Regex> =
    LazyLock::new(|| match Regex::new(r"whtwnd\.com/([^/]+)/entries/([^/?#]+)") {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    });
static FRONTPAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| match Regex::new(r"frontpage\.fyi/post/([^/?#]+)") {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    });

/// Maps a known app URL to the AT URI of the record it shows.
///
/// Recognises Bluesky posts, WhiteWind entries and Frontpage posts.
pub fn url_to_at_uri(url: &str) -> Option<AtUri> {
    if let Some(caps) = BSKY_POST_RE.captures(url) {
        return Some(AtUri::new(&caps[1], "app.bsky.feed.post", &caps[2]));
    }
    if let Some(caps) = WHTWND_RE.captures(url) {
        return Some(AtUri::new(&caps[1], "com.whtwnd.blog.entry", &caps[2]));
    }
    if let Some(caps) = FRONTPAGE_RE.captures(url) {
        return Some(AtUri::new("frontpage.fyi", "fyi.unravel.frontpage.post", &caps[1]));
    }
    None
}

/// A public post as returned by `searchPosts`.
#[derive(Debug, Clone, PartialEq)]
pub struct PostSummary {
    pub uri: String,
    pub handle: String,
    pub display_name: Option<String>,
    pub text: String,
    pub created_at: Option<String>,
    pub like_count: u64,
    pub reply_count: u64,
    pub repost_count: u64,
}

impl PostSummary {
    /// Reads a post view; `None` if it lacks a URI.
    pub fn from_value(v: &Value) -> Option<Self> {
        let uri = v.get("uri")?.as_str()?.to_string();
        let author = v.get("author");
        let record = v.get("record");
        let str_at = |parent: Option<&Value>, key: &str| {
            parent.and_then(|p| p.get(key)).and_then(Value::as_str).map(str::to_string)
        };
        let count = |key: &str| v.get(key).and_then(Value::as_u64).unwrap_or(0);
        Some(PostSummary {
            uri,
            handle: str_at(author, "handle").unwrap_or_default(),
            display_name: str_at(author, "displayName").filter(|s| !s.is_empty()),
            text: str_at(record, "text").unwrap_or_default(),
            created_at: str_at(record, "createdAt"),
            like_count: count("likeCount"),
            reply_count: count("replyCount"),
            repost_count: count("repostCount"),
        })
    }

    /// Display name, falling back to the handle.
    pub fn author_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.handle)
    }

    /// Web address of the post on bsky.app.
    pub fn web_url(&self) -> String {
        format!("https://bsky.app/profile/{}/post/{}", self.handle, rkey_of(&self.uri))
    }
}

fn truncate_chars(s: &str, n: usize) -> (&str, bool) {
    match s.char_indices().nth(n) {
        Some((idx, _)) => (&s[..idx], true),
        None => (s, false),
    }
}

/// Title for an imported post: `Author: "first 60 chars…"`.
pub fn post_title(post: &PostSummary) -> String {
    let author = post.author_name();
    if author.is_empty() {
        return truncate_chars(&post.text, BARE_TITLE_CHARS).0.to_string();
    }
    let (snippet, cut) = truncate_chars(&post.text, TITLE_SNIPPET_CHARS);
    format!("{author}: \"{snippet}{}\"", if cut { "…" } else { "" })
}

/// Drafts an item that saves a post: full text as the note and a reference
/// back to the post.
pub fn import_post(post: &PostSummary) -> Item {
    let url = post.web_url();
    let mut item = Item::new(post_title(post));
    item.note = Some(post.text.clone()).filter(|t| !t.is_empty());
    item.external_ref = url_to_at_uri(&url).map(|u| u.to_string());
    item.url = Some(url);
    item
}

/// Searches public posts. Entries without a URI are skipped.
pub async fn search_posts(
    transport: &dyn Transport,
    query: &str,
    limit: u32,
) -> Result<Vec<PostSummary>> {
    let posts = transport.search_posts(query, limit).await?;
    Ok(posts.iter().filter_map(PostSummary::from_value).collect())
}

/// Fetches any public record by AT URI.
pub async fn resolve(transport: &dyn Transport, uri: &AtUri) -> Result<Value> {
    tracing::debug!(%uri, "resolving record");
    Ok(transport.get_record(uri).await?)
}

#[cfg(test)]
#[path = "crossapp_tests.rs"]
mod tests;
