// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Synchronization between the local shelf and the remote repository.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ Coordinator  │────►│ RepoClient  │────►│  Transport  │────►│  Remote     │
//! │ (4 mutations)│◄────│ (session)   │◄────│   (trait)   │◄────│  Repository │
//! └──────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//!        │
//!        ▼
//! ┌──────────────┐
//! │    Shelf     │  (local tree, mutated first)
//! └──────────────┘
//! ```
//!
//! Every mutation is applied to the [`Shelf`] before any remote call. A
//! remote failure never reverts the local change; it is reported as an
//! [`Outcome::Failed`] carrying a [`SyncError`](crate::SyncError).
//! Without a [`RepoClient`] (signed out) mutations are local only.

mod client;
mod coordinator;
mod fetch;
mod shelf;
mod transport;

pub use client::RepoClient;
pub use coordinator::{
    create_collection, create_item, delete_collection, delete_item, Outcome,
};
pub use fetch::{load_shelf, LoadedShelf, ShelfSource};
pub use shelf::Shelf;
pub use transport::{
    Transport, TransportError, TransportFuture, TransportResult, XrpcTransport,
    DEFAULT_PDS_URL, DEFAULT_PUBLIC_API_URL,
};

#[cfg(test)]
pub(crate) mod test_helpers;



#[cfg(test)]
mod fetch_tests;


#[cfg(test)]
pub(crate) mod transport_tests;
