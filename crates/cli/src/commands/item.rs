// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use shelf_core::{create_item, delete_item, Item, Outcome};

use crate::cli::{ItemArgs, OutputFormat};
use crate::display::format_item_line;
use crate::error::Result;
use crate::validate;

use super::{report, Context};

/// Builds a validated local item from a title and flags.
pub(crate) fn build_item(title: &str, fields: &ItemArgs) -> Result<Item> {
    let mut item = Item::new(validate::validate_title(title)?);
    if let Some(note) = fields.note.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
        validate::validate_note(note)?;
        item.note = Some(note.to_string());
    }
    if let Some(url) = &fields.url {
        validate::validate_url(url)?;
        item.url = Some(url.clone());
    }
    if let Some(target) = &fields.external_ref {
        item.external_ref = Some(validate::parse_target(target)?.to_string());
    }
    item.tags = validate::parse_tags(&fields.tags)?;
    item.rating = validate::normalize_rating(fields.rating);
    Ok(item)
}

pub fn add(
    title: &str,
    collection: Option<&str>,
    fields: &ItemArgs,
    output: OutputFormat,
) -> Result<()> {
    let ctx = Context::open_resumed()?;
    add_impl(&ctx, title, collection, fields, output)
}

pub(crate) fn add_impl(
    ctx: &Context,
    title: &str,
    collection: Option<&str>,
    fields: &ItemArgs,
    output: OutputFormat,
) -> Result<()> {
    let draft = build_item(title, fields)?;
    save_item(ctx, draft, collection, output)
}

/// Adds `draft` to a collection, syncing it when signed in.
pub(crate) fn save_item(
    ctx: &Context,
    draft: Item,
    collection: Option<&str>,
    output: OutputFormat,
) -> Result<()> {
    let (mut shelf, _) = ctx.load();
    let collection_id = Context::target_collection(&shelf, collection)?;
    let temp_id = draft.id.to_string();
    let client = ctx.client();
    let outcome = ctx.block_on(create_item(&mut shelf, client.as_ref(), &collection_id, draft))?;
    ctx.persist(&shelf)?;
    report(&outcome);

    let id = match &outcome {
        Outcome::Synced(rkey) => rkey.as_str(),
        _ => temp_id.as_str(),
    };
    if let Some((col, item)) = shelf.find_item(id) {
        match output {
            OutputFormat::Json => println!("{}", serde_json::to_string(item)?),
            OutputFormat::Text => {
                println!("Added to {} {}", col.icon, col.name);
                println!("{}", format_item_line(item));
            }
        }
    }
    Ok(())
}

pub fn rm(id: &str) -> Result<()> {
    let ctx = Context::open_resumed()?;
    rm_impl(&ctx, id)
}

pub(crate) fn rm_impl(ctx: &Context, id: &str) -> Result<()> {
    let (mut shelf, _) = ctx.load();
    let title = shelf.find_item(id).map(|(_, item)| item.title.clone());
    let client = ctx.client();
    let outcome = ctx.block_on(delete_item(&mut shelf, client.as_ref(), id))?;
    ctx.persist(&shelf)?;
    report(&outcome);
    if let Some(title) = title {
        println!("Removed {}", title);
    }
    Ok(())
}

#[cfg(test)]
#[path = "item_tests.rs"]
mod tests;
