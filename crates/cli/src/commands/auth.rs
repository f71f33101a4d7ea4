// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::config;
use crate::env;
use crate::error::{Error, Result};

use super::Context;

pub fn login(handle: &str, password: Option<String>) -> Result<()> {
    let ctx = Context::open()?;
    let password = password.or_else(env::app_password).ok_or(Error::PasswordRequired)?;
    login_impl(&ctx, handle, &password)
}

pub(crate) fn login_impl(ctx: &Context, handle: &str, password: &str) -> Result<()> {
    let session = ctx
        .block_on(ctx.sessions().login(handle, password))
        .map_err(|e| match e {
            shelf_core::Error::Auth(_)
            | shelf_core::Error::Network(_)
            | shelf_core::Error::Remote { .. } => Error::SignInFailed(e.advisory()),
            other => other.into(),
        })?;
    // The new account's shelf starts from its own repository.
    ctx.storage.clear_local()?;
    println!("Signed in as @{} ({})", session.handle, session.did);
    Ok(())
}

pub fn logout() -> Result<()> {
    let ctx = Context::open()?;
    logout_impl(&ctx)
}

pub(crate) fn logout_impl(ctx: &Context) -> Result<()> {
    let had_session = ctx.sessions().load().is_some();
    ctx.sessions().clear()?;
    ctx.storage.clear_local()?;
    if had_session {
        println!("Signed out");
    } else {
        println!("Not signed in; local data cleared");
    }
    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StatusReport {
    mode: String,
    handle: Option<String>,
    did: Option<String>,
    source: String,
    collections: usize,
    items: usize,
    active: Option<String>,
    state_dir: String,
}

pub fn status(output: OutputFormat) -> Result<()> {
    let ctx = Context::open_resumed()?;
    status_impl(&ctx, output)
}

pub(crate) fn status_impl(ctx: &Context, output: OutputFormat) -> Result<()> {
    let (shelf, source) = ctx.load();
    let report = StatusReport {
        mode: ctx.mode().to_string(),
        handle: ctx.session().map(|s| s.handle.clone()),
        did: ctx.session().map(|s| s.did.clone()),
        source: source.as_str().to_string(),
        collections: shelf.collections().len(),
        items: shelf.total_items(),
        active: shelf.active_id().map(str::to_string),
        state_dir: config::state_dir().display().to_string(),
    };

    match output {
        OutputFormat::Json => println!("{}", serde_json::to_string(&report)?),
        OutputFormat::Text => {
            match (&report.handle, &report.did) {
                (Some(handle), Some(did)) => println!("Signed in as @{handle} ({did})"),
                _ => println!("Not signed in"),
            }
            println!("Mode: {}", report.mode);
            println!(
                "Shelf: {} collections, {} items (from {})",
                report.collections, report.items, report.source
            );
            if let Some(active) = shelf.active() {
                println!("Active: {} {} {}", active.icon, active.name, active.id);
            }
            println!("State: {}", report.state_dir);
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "auth_tests.rs"]
mod tests;
