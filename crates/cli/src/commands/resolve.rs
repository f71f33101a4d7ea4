// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use shelf_core::crossapp;

use crate::error::Result;
use crate::validate::parse_target;

use super::Context;

/// Prints a public record as pretty JSON.
pub fn run(target: &str) -> Result<()> {
    let uri = parse_target(target)?;
    let ctx = Context::open()?;
    let record = ctx.block_on(crossapp::resolve(ctx.transport(), &uri))?;
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}
