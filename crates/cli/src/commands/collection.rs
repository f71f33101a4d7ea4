// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Collection commands: list, show, select, new, drop, templates.

use serde::Serialize;
use shelf_core::template::{self, TEMPLATES};
use shelf_core::{create_collection, delete_collection, Collection, Item, Visibility};

use crate::cli::{CollectionArgs, OutputFormat};
use crate::display::{format_collection_header, format_collection_line, format_item_details};
use crate::error::{Error, Result};
use crate::validate;

use super::{report, Context};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CollectionSummary<'a> {
    id: &'a str,
    name: &'a str,
    icon: &'a str,
    color: &'a str,
    visibility: Visibility,
    item_count: usize,
    active: bool,
    synced: bool,
}

impl<'a> CollectionSummary<'a> {
    fn new(collection: &'a Collection, active: bool) -> Self {
        CollectionSummary {
            id: collection.id.as_str(),
            name: &collection.name,
            icon: &collection.icon,
            color: &collection.color,
            visibility: collection.visibility,
            item_count: collection.items.len(),
            active,
            synced: !collection.id.is_temporary(),
        }
    }
}

pub fn list(output: OutputFormat) -> Result<()> {
    let ctx = Context::open_resumed()?;
    list_impl(&ctx, output)
}

pub(crate) fn list_impl(ctx: &Context, output: OutputFormat) -> Result<()> {
    let (shelf, _) = ctx.load();
    let active = shelf.active_id();
    match output {
        OutputFormat::Json => {
            let summaries: Vec<_> = shelf
                .collections()
                .iter()
                .map(|c| CollectionSummary::new(c, active == Some(c.id.as_str())))
                .collect();
            println!("{}", serde_json::to_string(&summaries)?);
        }
        OutputFormat::Text => {
            if shelf.is_empty() {
                println!("No collections. Create one with 'shelf new <name>'.");
            }
            for c in shelf.collections() {
                println!("{}", format_collection_line(c, active == Some(c.id.as_str())));
            }
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct CollectionView<'a> {
    #[serde(flatten)]
    summary: CollectionSummary<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    items: Vec<&'a Item>,
}

pub fn show(collection: Option<&str>, search: Option<&str>, output: OutputFormat) -> Result<()> {
    let ctx = Context::open_resumed()?;
    show_impl(&ctx, collection, search, output)
}

pub(crate) fn show_impl(
    ctx: &Context,
    collection: Option<&str>,
    search: Option<&str>,
    output: OutputFormat,
) -> Result<()> {
    let (shelf, _) = ctx.load();
    let id = Context::target_collection(&shelf, collection)?;
    let items = shelf.filter_items(&id, search.unwrap_or(""))?;
    let col = shelf
        .collection(&id)
        .ok_or_else(|| shelf_core::Error::CollectionNotFound(id.clone()))?;

    match output {
        OutputFormat::Json => {
            let view = CollectionView {
                summary: CollectionSummary::new(col, shelf.active_id() == Some(id.as_str())),
                description: col.description.as_deref(),
                items,
            };
            println!("{}", serde_json::to_string(&view)?);
        }
        OutputFormat::Text => {
            for line in format_collection_header(col) {
                println!("{}", line);
            }
            println!();
            if items.is_empty() {
                match search {
                    Some(q) => println!("No items match \"{}\".", q),
                    None => println!("No items yet. Add one with 'shelf add <title>'."),
                }
            }
            for item in items {
                for line in format_item_details(item) {
                    println!("{}", line);
                }
            }
        }
    }
    Ok(())
}

pub fn select(id: &str) -> Result<()> {
    let ctx = Context::open_resumed()?;
    select_impl(&ctx, id)
}

pub(crate) fn select_impl(ctx: &Context, id: &str) -> Result<()> {
    let (mut shelf, _) = ctx.load();
    shelf.select(id)?;
    ctx.persist(&shelf)?;
    if let Some(col) = shelf.active() {
        println!("Selected {} {}", col.icon, col.name);
    }
    Ok(())
}

/// Builds a validated local collection from a template and/or flags.
pub(crate) fn build_collection(
    name: Option<&str>,
    template_name: Option<&str>,
    fields: &CollectionArgs,
) -> Result<Collection> {
    let mut col = match template_name {
        Some(t) => template::find(t)
            .ok_or_else(|| Error::TemplateNotFound(t.to_string()))?
            .instantiate(None),
        None => Collection::new(""),
    };
    if let Some(name) = name {
        col.name = name.to_string();
    }
    col.name = validate::validate_name(&col.name)?;

    if let Some(description) = &fields.description {
        validate::validate_description(description)?;
        col.description = Some(description.clone()).filter(|d| !d.trim().is_empty());
    }
    if let Some(icon) = &fields.icon {
        validate::validate_icon(icon)?;
        col.icon = icon.clone();
    }
    if let Some(color) = &fields.color {
        validate::validate_color(color)?;
        col.color = color.to_lowercase();
    }
    if let Some(visibility) = &fields.visibility {
        col.visibility = visibility.parse()?;
    }
    Ok(col)
}

pub fn new(
    name: Option<&str>,
    template_name: Option<&str>,
    fields: &CollectionArgs,
    output: OutputFormat,
) -> Result<()> {
    let ctx = Context::open_resumed()?;
    new_impl(&ctx, name, template_name, fields, output)
}

pub(crate) fn new_impl(
    ctx: &Context,
    name: Option<&str>,
    template_name: Option<&str>,
    fields: &CollectionArgs,
    output: OutputFormat,
) -> Result<()> {
    let draft = build_collection(name, template_name, fields)?;
    let (mut shelf, _) = ctx.load();
    let client = ctx.client();
    let outcome = ctx.block_on(create_collection(&mut shelf, client.as_ref(), draft))?;
    ctx.persist(&shelf)?;
    report(&outcome);

    if let Some(col) = shelf.active() {
        match output {
            OutputFormat::Json => println!("{}", serde_json::to_string(col)?),
            OutputFormat::Text => println!("Created {} {} {}", col.icon, col.name, col.id),
        }
    }
    Ok(())
}

pub fn drop(id: &str) -> Result<()> {
    let ctx = Context::open_resumed()?;
    drop_impl(&ctx, id)
}

pub(crate) fn drop_impl(ctx: &Context, id: &str) -> Result<()> {
    let (mut shelf, _) = ctx.load();
    let label = shelf
        .collection(id)
        .map(|c| format!("{} {} ({} items)", c.icon, c.name, c.items.len()));
    let client = ctx.client();
    let outcome = ctx.block_on(delete_collection(&mut shelf, client.as_ref(), id))?;
    ctx.persist(&shelf)?;
    report(&outcome);
    if let Some(label) = label {
        println!("Deleted {}", label);
    }
    Ok(())
}

pub fn templates() -> Result<()> {
    for t in TEMPLATES {
        println!("{} {:<12} {}", t.icon, t.name, t.description);
    }
    Ok(())
}

#[cfg(test)]
#[path = "collection_tests.rs"]
mod tests;
