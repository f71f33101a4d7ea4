// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// Errors surfaced by the shelf CLI.
///
/// Messages carry a `hint:` line where the fix is known.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] shelf_core::Error),

    #[error("sign in failed\n  hint: {0}")]
    SignInFailed(String),

    #[error("app password required\n  hint: pass --password or set SHELF_APP_PASSWORD")]
    PasswordRequired,

    #[error("no collection selected\n  hint: create one with 'shelf new <name>' or pick one with 'shelf select <id>'")]
    NoActiveCollection,

    #[error("unknown template: '{0}'\n  hint: run 'shelf templates' to see the available templates")]
    TemplateNotFound(String),

    #[error("{field} must be an http or https URL: '{value}'")]
    InvalidUrl { field: &'static str, value: String },

    #[error("invalid color: '{0}'\n  hint: use a hex color like #2563eb")]
    InvalidColor(String),

    #[error("'{0}' is not an AT URI or a recognised app URL\n  hint: expected at://repo/collection/rkey or a bsky.app, whtwnd.com or frontpage.fyi link")]
    InvalidTarget(String),

    #[error("no search result {index} (got {count})")]
    ResultOutOfRange { index: usize, count: usize },

    #[error("{field} too long ({actual} chars, max {max})")]
    FieldTooLong {
        field: &'static str,
        actual: usize,
        max: usize,
    },

    #[error("{field} cannot be empty")]
    FieldEmpty { field: &'static str },

    #[error("too many tags (max {max} per item)")]
    TagLimitExceeded { max: usize },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
