// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod auth;
pub mod collection;
pub mod item;
pub mod resolve;
pub mod schema;
pub mod search;
#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;

use std::future::Future;

use shelf_core::sync::ShelfSource;
use shelf_core::{load_shelf, Outcome, RepoClient, Session, SessionProvider, Shelf, Storage};
use shelf_core::{Transport, XrpcTransport};
use tokio::runtime::Runtime;

use crate::config::{self, Config};
use crate::error::{Error, Result};
use crate::mode::OperatingMode;

/// Everything a command needs for one invocation.
///
/// Holds the client store, the network transport and, once resumed, the
/// signed-in session. Async core calls run on a current-thread runtime.
pub struct Context {
    pub config: Config,
    pub storage: Storage,
    transport: XrpcTransport,
    session: Option<Session>,
    runtime: Runtime,
}

impl Context {
    /// Opens storage at the configured location. No session is resumed.
    pub fn open() -> Result<Self> {
        let config = Config::load_default()?;
        let storage = Storage::open(&config::db_path())?;
        Context::new(config, storage)
    }

    /// Opens storage and resumes the stored session, if any.
    pub fn open_resumed() -> Result<Self> {
        let mut ctx = Context::open()?;
        ctx.resume();
        Ok(ctx)
    }

    pub fn new(config: Config, storage: Storage) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        let transport = config.transport();
        Ok(Context {
            config,
            storage,
            transport,
            session: None,
            runtime,
        })
    }

    pub fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }

    pub fn transport(&self) -> &dyn Transport {
        &self.transport
    }

    pub fn sessions(&self) -> SessionProvider<'_, Storage> {
        SessionProvider::new(&self.transport, &self.storage)
    }

    /// Refreshes the stored session. A failed refresh signs the user out.
    pub fn resume(&mut self) {
        self.session = self.block_on(self.sessions().restore());
        tracing::debug!(mode = %self.mode(), "session resumed");
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn mode(&self) -> OperatingMode {
        OperatingMode::detect(self.session.as_ref())
    }

    /// Session-scoped client; `None` when signed out.
    pub fn client(&self) -> Option<RepoClient<'_>> {
        self.session.as_ref().map(|session| {
            RepoClient::new(&self.transport, session).with_list_limit(self.config.list_limit)
        })
    }

    /// Loads the shelf, warning on stderr when a remote read fell back.
    pub fn load(&self) -> (Shelf, ShelfSource) {
        let client = self.client();
        let loaded = self.block_on(load_shelf(client.as_ref(), &self.storage));
        if let Some(err) = &loaded.error {
            eprintln!(
                "warning: {} (showing {} data)",
                err.advisory(),
                loaded.source.as_str()
            );
        }
        (loaded.shelf, loaded.source)
    }

    /// Stores the shelf as the last-known-good snapshot, with its selection.
    pub fn persist(&self, shelf: &Shelf) -> Result<()> {
        self.storage.save_snapshot(shelf.collections())?;
        self.storage.set_active(shelf.active_id())?;
        Ok(())
    }

    /// The collection a command targets: the explicit id, else the active one.
    pub fn target_collection(shelf: &Shelf, explicit: Option<&str>) -> Result<String> {
        match explicit {
            Some(id) => Ok(id.to_string()),
            None => shelf
                .active_id()
                .map(str::to_string)
                .ok_or(Error::NoActiveCollection),
        }
    }
}

/// Prints the advisory of a failed sync to stderr. Never an error.
pub fn report<T>(outcome: &Outcome<T>) {
    if let Some(advisory) = outcome.advisory() {
        eprintln!("warning: {}", advisory);
    }
}
