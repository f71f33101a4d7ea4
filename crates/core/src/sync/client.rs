// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Session-scoped repository client.
//!
//! A [`RepoClient`] pairs a transport with the signed-in session. It is
//! passed explicitly into every coordinator call; there is no global client.

use crate::lexicon::{COLLECTION_NSID, ITEM_NSID, LIST_LIMIT};
use crate::model::{Collection, Item};
use crate::record::{self, RawRecord};
use crate::session::Session;
use crate::tid;
use crate::uri::AtUri;

use super::transport::{Transport, TransportResult};

/// Remote operations on the signed-in account's repository.
pub struct RepoClient<'a> {
    transport: &'a dyn Transport,
    session: &'a Session,
    list_limit: u32,
}

impl<'a> RepoClient<'a> {
    pub fn new(transport: &'a dyn Transport, session: &'a Session) -> Self {
        RepoClient { transport, session, list_limit: LIST_LIMIT }
    }

    /// Overrides the page size used for record listing.
    pub fn with_list_limit(mut self, limit: u32) -> Self {
        self.list_limit = limit;
        self
    }

    pub fn session(&self) -> &Session {
        self.session
    }

    pub fn collection_uri(&self, rkey: &str) -> AtUri {
        AtUri::new(&self.session.did, COLLECTION_NSID, rkey)
    }

    pub fn item_uri(&self, rkey: &str) -> AtUri {
        AtUri::new(&self.session.did, ITEM_NSID, rkey)
    }

    /// Fetches collection and item records concurrently.
    ///
    /// Either list failing fails the whole read.
    pub async fn fetch_records(&self) -> TransportResult<(Vec<RawRecord>, Vec<RawRecord>)> {
        let token = &self.session.access_jwt;
        let repo = &self.session.did;
        tracing::debug!(%repo, limit = self.list_limit, "listing records");
        tokio::try_join!(
            self.transport.list_records(token, repo, COLLECTION_NSID, self.list_limit),
            self.transport.list_records(token, repo, ITEM_NSID, self.list_limit),
        )
    }

    /// Fetches and decodes the full collection tree.
    pub async fn fetch_collections(&self) -> TransportResult<Vec<Collection>> {
        let (cols, items) = self.fetch_records().await?;
        if cols.len() as u32 >= self.list_limit || items.len() as u32 >= self.list_limit {
            tracing::warn!(
                collections = cols.len(),
                items = items.len(),
                limit = self.list_limit,
                "record listing hit the page limit; some records may be missing"
            );
        }
        Ok(record::decode(&cols, &items))
    }

    /// Writes a collection under a fresh record key and returns the key.
    pub async fn put_collection(&self, collection: &Collection) -> TransportResult<String> {
        let rkey = tid::generate();
        let target = self.collection_uri(&rkey);
        tracing::debug!(%target, "writing collection");
        self.transport
            .put_record(&self.session.access_jwt, &target, record::encode_collection(collection))
            .await?;
        Ok(rkey)
    }

    /// Writes an item under a fresh record key, pointing at its parent collection.
    pub async fn put_item(&self, item: &Item, collection_rkey: &str) -> TransportResult<String> {
        let rkey = tid::generate();
        let target = self.item_uri(&rkey);
        let parent = self.collection_uri(collection_rkey).to_string();
        tracing::debug!(%target, %parent, "writing item");
        self.transport
            .put_record(&self.session.access_jwt, &target, record::encode_item(item, &parent))
            .await?;
        Ok(rkey)
    }

    pub async fn delete_item(&self, rkey: &str) -> TransportResult<()> {
        let target = self.item_uri(rkey);
        tracing::debug!(%target, "deleting item");
        self.transport.delete_record(&self.session.access_jwt, &target).await
    }

    pub async fn delete_collection(&self, rkey: &str) -> TransportResult<()> {
        let target = self.collection_uri(rkey);
        tracing::debug!(%target, "deleting collection");
        self.transport.delete_record(&self.session.access_jwt, &target).await
    }
}
