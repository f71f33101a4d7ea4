// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! shelf-core: Sync layer for Shared Shelf
//!
//! This crate provides the data model, record key generation, remote record
//! mapping, session handling, and the optimistic sync coordinator used by
//! the shelf CLI.

pub mod crossapp;
pub mod demo;
pub mod error;
pub mod lexicon;
pub mod model;
pub mod record;
pub mod session;
pub mod storage;
pub mod sync;
pub mod template;
pub mod tid;
pub mod uri;

pub use error::{Error, Result, SyncError};
pub use model::{Collection, Item, RecordId, Visibility};
pub use record::RawRecord;
pub use session::{Session, SessionProvider, SessionStore};
pub use storage::{Snapshot, Storage};
pub use sync::{
    create_collection, create_item, delete_collection, delete_item, load_shelf, LoadedShelf,
    Outcome, RepoClient, Shelf, ShelfSource, Transport, TransportError, XrpcTransport,
};
pub use tid::{ClockSource, SystemClock, Tid};
pub use uri::AtUri;
