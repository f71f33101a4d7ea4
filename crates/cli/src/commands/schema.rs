// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema command implementation.
//!
//! Outputs the lexicon documents of the two record types written to the
//! repository.

use serde_json::Value;
use shelf_core::lexicon::{collection_schema, item_schema};

use crate::cli::SchemaKind;
use crate::error::Result;

/// Lexicon documents for `kind`, or both when absent.
pub(crate) fn documents(kind: Option<SchemaKind>) -> Vec<Value> {
    match kind {
        Some(SchemaKind::Collection) => vec![collection_schema()],
        Some(SchemaKind::Item) => vec![item_schema()],
        None => vec![collection_schema(), item_schema()],
    }
}

pub fn run(kind: Option<SchemaKind>) -> Result<()> {
    for doc in documents(kind) {
        let json = serde_json::to_string_pretty(&doc)?;
        println!("{}", json);
    }
    Ok(())
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
