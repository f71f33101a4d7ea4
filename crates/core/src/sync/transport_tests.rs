// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for the transport module.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::transport::{Transport, TransportError, TransportFuture};
use crate::record::RawRecord;
use crate::session::Session;
use crate::uri::AtUri;
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

/// Failure a mock call should produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fail {
    Network,
    Status(u16),
    Malformed,
}

impl Fail {
    fn to_error(self) -> TransportError {
        match self {
            Fail::Network => TransportError::Network("mock network failure".into()),
            Fail::Status(status) => TransportError::Status {
                status,
                error: Some("MockError".into()),
                message: format!("mock status {status}"),
            },
            Fail::Malformed => TransportError::Malformed("mock malformed body".into()),
        }
    }
}

#[derive(Default)]
struct MockState {
    /// Stored records keyed by AT URI, in insertion order per collection.
    records: Vec<RawRecord>,
    list_fail: HashMap<String, Fail>,
    login_fail: Option<Fail>,
    refresh_fail: Option<Fail>,
    put_fail: Option<Fail>,
    delete_fail_all: Option<Fail>,
    delete_fail_rkeys: HashSet<String>,
    posts: Vec<Value>,
    /// Every call, as `method target`.
    calls: Vec<String>,
    puts: Vec<(AtUri, Value)>,
    deletes: Vec<AtUri>,
}

/// In-memory repository standing in for a remote server.
#[derive(Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<MockState>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a record that list/get calls will return.
    pub fn insert(&self, uri: impl Into<String>, value: Value) {
        self.state.lock().unwrap().records.push(RawRecord::new(uri, value));
    }

    pub fn fail_list(&self, collection: &str, fail: Fail) {
        self.state.lock().unwrap().list_fail.insert(collection.to_string(), fail);
    }

    pub fn fail_login(&self, fail: Fail) {
        self.state.lock().unwrap().login_fail = Some(fail);
    }

    pub fn fail_refresh(&self, fail: Fail) {
        self.state.lock().unwrap().refresh_fail = Some(fail);
    }

    pub fn fail_puts(&self, fail: Fail) {
        self.state.lock().unwrap().put_fail = Some(fail);
    }

    /// Let later puts succeed again.
    pub fn allow_puts(&self) {
        self.state.lock().unwrap().put_fail = None;
    }

    pub fn fail_all_deletes(&self, fail: Fail) {
        self.state.lock().unwrap().delete_fail_all = Some(fail);
    }

    pub fn fail_delete_of(&self, rkey: &str) {
        self.state.lock().unwrap().delete_fail_rkeys.insert(rkey.to_string());
    }

    pub fn set_posts(&self, posts: Vec<Value>) {
        self.state.lock().unwrap().posts = posts;
    }

    pub fn calls(&self) -> Vec<String> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn puts(&self) -> Vec<(AtUri, Value)> {
        self.state.lock().unwrap().puts.clone()
    }

    pub fn deletes(&self) -> Vec<AtUri> {
        self.state.lock().unwrap().deletes.clone()
    }

    pub fn records(&self) -> Vec<RawRecord> {
        self.state.lock().unwrap().records.clone()
    }

    fn session_for(handle: &str, generation: u32) -> Session {
        Session {
            did: "did:plc:alice".into(),
            handle: handle.into(),
            access_jwt: format!("access-{generation}"),
            refresh_jwt: format!("refresh-{generation}"),
        }
    }
}

impl Transport for MockTransport {
    fn create_session(&self, identifier: &str, _password: &str) -> TransportFuture<'_, Session> {
        let identifier = identifier.to_string();
        Box::pin(async move {
            let mut state = self.state.lock().unwrap();
            state.calls.push(format!("createSession {identifier}"));
            match state.login_fail {
                Some(fail) => Err(fail.to_error()),
                None => Ok(Self::session_for(&identifier, 1)),
            }
        })
    }

    fn refresh_session(&self, refresh_jwt: &str) -> TransportFuture<'_, Session> {
        let refresh_jwt = refresh_jwt.to_string();
        Box::pin(async move {
            let mut state = self.state.lock().unwrap();
            state.calls.push(format!("refreshSession {refresh_jwt}"));
            match state.refresh_fail {
                Some(fail) => Err(fail.to_error()),
                None => Ok(Self::session_for("alice.test", 2)),
            }
        })
    }

    fn list_records(
        &self,
        _access_jwt: &str,
        repo: &str,
        collection: &str,
        limit: u32,
    ) -> TransportFuture<'_, Vec<RawRecord>> {
        let prefix = format!("at://{repo}/{collection}/");
        let collection = collection.to_string();
        Box::pin(async move {
            let mut state = self.state.lock().unwrap();
            state.calls.push(format!("listRecords {collection}"));
            if let Some(fail) = state.list_fail.get(&collection) {
                return Err(fail.to_error());
            }
            Ok(state
                .records
                .iter()
                .filter(|r| r.uri.starts_with(&prefix))
                .take(limit as usize)
                .cloned()
                .collect())
        })
    }

    fn put_record(
        &self,
        _access_jwt: &str,
        target: &AtUri,
        record: Value,
    ) -> TransportFuture<'_, ()> {
        let target = target.clone();
        Box::pin(async move {
            let mut state = self.state.lock().unwrap();
            state.calls.push(format!("putRecord {target}"));
            if let Some(fail) = state.put_fail {
                return Err(fail.to_error());
            }
            state.records.push(RawRecord::new(target.to_string(), record.clone()));
            state.puts.push((target, record));
            Ok(())
        })
    }

    fn delete_record(&self, _access_jwt: &str, target: &AtUri) -> TransportFuture<'_, ()> {
        let target = target.clone();
        Box::pin(async move {
            let mut state = self.state.lock().unwrap();
            state.calls.push(format!("deleteRecord {target}"));
            state.deletes.push(target.clone());
            if let Some(fail) = state.delete_fail_all {
                return Err(fail.to_error());
            }
            if state.delete_fail_rkeys.contains(&target.rkey) {
                return Err(Fail::Status(500).to_error());
            }
            let uri = target.to_string();
            state.records.retain(|r| r.uri != uri);
            Ok(())
        })
    }

    fn get_record(&self, target: &AtUri) -> TransportFuture<'_, Value> {
        let uri = target.to_string();
        Box::pin(async move {
            let mut state = self.state.lock().unwrap();
            state.calls.push(format!("getRecord {uri}"));
            state
                .records
                .iter()
                .find(|r| r.uri == uri)
                .map(|r| serde_json::json!({"uri": r.uri, "value": r.value}))
                .ok_or(TransportError::NotFound(uri))
        })
    }

    fn search_posts(&self, query: &str, limit: u32) -> TransportFuture<'_, Vec<Value>> {
        let query = query.to_string();
        Box::pin(async move {
            let mut state = self.state.lock().unwrap();
            state.calls.push(format!("searchPosts {query}"));
            Ok(state.posts.iter().take(limit as usize).cloned().collect())
        })
    }
}

#[tokio::test]
async fn mock_put_then_list_returns_record() {
    let mock = MockTransport::new();
    let target = AtUri::new("did:plc:alice", "social.sharedshelf.item", "3k2x");
    mock.put_record("tok", &target, serde_json::json!({"title": "X"})).await.unwrap();

    let listed = mock.list_records("tok", "did:plc:alice", "social.sharedshelf.item", 100).await;
    assert_eq!(listed.unwrap().len(), 1);
}

#[tokio::test]
async fn mock_get_missing_is_not_found() {
    let mock = MockTransport::new();
    let target = AtUri::new("did:plc:alice", "social.sharedshelf.item", "nope");
    let err = mock.get_record(&target).await.unwrap_err();
    assert!(matches!(err, TransportError::NotFound(_)));
}

#[test]
fn transport_errors_map_into_core_errors() {
    use crate::error::Error;

    assert!(matches!(Error::from(Fail::Network.to_error()), Error::Network(_)));
    assert!(matches!(Error::from(Fail::Malformed.to_error()), Error::MalformedResponse(_)));
    assert!(matches!(
        Error::from(Fail::Status(502).to_error()),
        Error::Remote { status: 502, .. }
    ));
    assert!(matches!(
        Error::from(TransportError::NotFound("at://x".into())),
        Error::NotFound(_)
    ));
}
