// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Operating mode detection for the shelf CLI.
//!
//! Signed out, every change stays in local storage. Signed in, changes are
//! mirrored to the account's repository.

use shelf_core::Session;

/// Operating mode for the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatingMode {
    /// No session: local snapshot or demo data, no network writes.
    Local,
    /// Resumed session: mutations sync to the repository.
    Synced,
}

impl OperatingMode {
    /// Detect the operating mode from the resumed session, if any.
    pub fn detect(session: Option<&Session>) -> Self {
        match session {
            Some(_) => OperatingMode::Synced,
            None => OperatingMode::Local,
        }
    }

    #[cfg(test)]
    pub fn is_local(&self) -> bool {
        *self == OperatingMode::Local
    }

    #[cfg(test)]
    pub fn is_synced(&self) -> bool {
        *self == OperatingMode::Synced
    }
}

impl std::fmt::Display for OperatingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OperatingMode::Local => write!(f, "local"),
            OperatingMode::Synced => write!(f, "synced"),
        }
    }
}

#[cfg(test)]
#[path = "mode_tests.rs"]
mod tests;
