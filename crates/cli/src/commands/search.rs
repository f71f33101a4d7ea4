// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use serde::Serialize;
use shelf_core::crossapp::{self, import_post, PostSummary};

use crate::cli::OutputFormat;
use crate::display::format_post;
use crate::error::{Error, Result};

use super::item::save_item;
use super::Context;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PostJson<'a> {
    uri: &'a str,
    url: String,
    handle: &'a str,
    author: &'a str,
    text: &'a str,
    like_count: u64,
    reply_count: u64,
    repost_count: u64,
}

impl<'a> From<&'a PostSummary> for PostJson<'a> {
    fn from(post: &'a PostSummary) -> Self {
        PostJson {
            uri: &post.uri,
            url: post.web_url(),
            handle: &post.handle,
            author: post.author_name(),
            text: &post.text,
            like_count: post.like_count,
            reply_count: post.reply_count,
            repost_count: post.repost_count,
        }
    }
}

pub fn run(
    query: &str,
    limit: u32,
    import: Option<usize>,
    collection: Option<&str>,
    output: OutputFormat,
) -> Result<()> {
    let ctx = if import.is_some() {
        Context::open_resumed()?
    } else {
        Context::open()?
    };
    let posts = ctx.block_on(crossapp::search_posts(ctx.transport(), query, limit))?;
    match import {
        Some(n) => {
            let post = pick(&posts, n)?;
            save_item(&ctx, import_post(post), collection, output)
        }
        None => print_posts(&posts, output),
    }
}

/// The 1-based `n`th result.
pub(crate) fn pick(posts: &[PostSummary], n: usize) -> Result<&PostSummary> {
    n.checked_sub(1)
        .and_then(|i| posts.get(i))
        .ok_or(Error::ResultOutOfRange {
            index: n,
            count: posts.len(),
        })
}

pub(crate) fn print_posts(posts: &[PostSummary], output: OutputFormat) -> Result<()> {
    match output {
        OutputFormat::Json => {
            let json: Vec<PostJson> = posts.iter().map(PostJson::from).collect();
            println!("{}", serde_json::to_string(&json)?);
        }
        OutputFormat::Text => {
            if posts.is_empty() {
                println!("No posts found.");
            }
            for (i, post) in posts.iter().enumerate() {
                for line in format_post(i + 1, post) {
                    println!("{}", line);
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
