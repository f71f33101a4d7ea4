// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! AT URIs: the remote address of a record, `at://repo/collection/rkey`.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

const SCHEME: &str = "at://";

/// Remote address of one record in a user's repository.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AtUri {
    /// Repository id (a DID or handle).
    pub repo: String,
    /// Record type NSID.
    pub collection: String,
    /// Record key within the (repo, collection) namespace.
    pub rkey: String,
}

impl AtUri {
    pub fn new(
        repo: impl Into<String>,
        collection: impl Into<String>,
        rkey: impl Into<String>,
    ) -> Self {
        AtUri { repo: repo.into(), collection: collection.into(), rkey: rkey.into() }
    }

    pub fn parse(s: &str) -> Result<Self> {
        s.parse()
    }
}

/// Returns the record key portion of an AT URI string (its last segment).
pub fn rkey_of(uri: &str) -> &str {
    uri.rsplit('/').next().unwrap_or(uri)
}

impl fmt::Display for AtUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{SCHEME}{}/{}/{}", self.repo, self.collection, self.rkey)
    }
}

impl FromStr for AtUri {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let rest = s.strip_prefix(SCHEME).ok_or_else(|| Error::InvalidAtUri(s.to_string()))?;
        let parts: Vec<&str> = rest.split('/').collect();
        match parts.as_slice() {
            [repo, collection, rkey]
                if !repo.is_empty() && !collection.is_empty() && !rkey.is_empty() =>
            {
                Ok(AtUri::new(*repo, *collection, *rkey))
            }
            _ => Err(Error::InvalidAtUri(s.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "uri_tests.rs"]
mod tests;
