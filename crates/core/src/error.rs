// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for shelf-core operations.

use thiserror::Error;

/// All possible errors that can occur in shelf-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("authentication failed: {0}")]
    Auth(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("remote returned {status}: {message}")]
    Remote { status: u16, message: String },

    #[error("record not found: {0}")]
    NotFound(String),

    #[error("collection not found: {0}")]
    CollectionNotFound(String),

    #[error("item not found: {0}")]
    ItemNotFound(String),

    #[error("invalid record key: '{0}'\n  hint: record keys are 13 characters of 2-7 and a-z")]
    InvalidTid(String),

    #[error("invalid AT URI: '{0}'\n  hint: expected at://repo/collection/rkey")]
    InvalidAtUri(String),

    #[error("invalid visibility: '{0}'\n  hint: valid values are: public, mutuals, private")]
    InvalidVisibility(String),

    #[error("record id {0} is already a remote record key")]
    AlreadyPromoted(String),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("corrupted data: {0}")]
    CorruptedData(String),
}

impl Error {
    /// User-facing advisory text for errors that reach the sign-in or load path.
    pub fn advisory(&self) -> String {
        match self {
            Error::Auth(_) => {
                "Handle or app password is incorrect. Double-check and try again.".to_string()
            }
            Error::Network(_) => "Network error: check your connection and try again.".to_string(),
            Error::MalformedResponse(_) => {
                "The server sent a response we could not read. Showing local data instead."
                    .to_string()
            }
            Error::Remote { .. } => {
                "Sign in failed. Make sure you're using an App Password, not your account password."
                    .to_string()
            }
            other => other.to_string(),
        }
    }
}

/// A remote write or delete failed after the local mutation was applied.
///
/// Never fatal: the local tree keeps the optimistic change.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyncError {
    #[error("item saved locally but not synced: {reason}")]
    ItemNotSynced { reason: String },

    #[error("collection saved locally but not synced: {reason}")]
    CollectionNotSynced { reason: String },

    #[error("item removed locally but not deleted remotely: {reason}")]
    ItemNotDeleted { reason: String },

    #[error(
        "collection removed locally but not deleted remotely ({failed} of {attempted} deletes failed)"
    )]
    CollectionNotDeleted { failed: usize, attempted: usize },
}

impl SyncError {
    /// Banner text shown to the user. Dismissible, never blocks interaction.
    pub fn advisory(&self) -> String {
        match self {
            SyncError::ItemNotSynced { .. } => {
                "Item saved locally but not synced to your repository.".to_string()
            }
            SyncError::CollectionNotSynced { .. } => {
                "Collection saved locally but not synced to your repository.".to_string()
            }
            SyncError::ItemNotDeleted { .. } => {
                "Item removed locally but not deleted from your repository.".to_string()
            }
            SyncError::CollectionNotDeleted { .. } => {
                "Collection removed locally but not deleted from your repository.".to_string()
            }
        }
    }
}

/// A specialized Result type for shelf-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
