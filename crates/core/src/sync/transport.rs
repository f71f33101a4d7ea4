// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Transport abstraction for the remote record repository.
//!
//! Provides a trait-based transport layer that enables:
//! - Real XRPC calls over HTTP for production
//! - Mock transports for unit testing

use std::future::Future;
use std::pin::Pin;

use reqwest::{Client, RequestBuilder, Response};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::Error;
use crate::record::RawRecord;
use crate::session::Session;
use crate::uri::AtUri;

/// Default personal data server endpoint.
pub const DEFAULT_PDS_URL: &str = "https://bsky.social/xrpc";
/// Default unauthenticated AppView endpoint.
pub const DEFAULT_PUBLIC_API_URL: &str = "https://public.api.bsky.app/xrpc";

/// Error type for transport operations.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// Server answered with a non-success status.
    #[error("server returned {status}: {message}")]
    Status { status: u16, error: Option<String>, message: String },

    /// Response body could not be parsed.
    #[error("malformed response: {0}")]
    Malformed(String),

    /// Requested record does not exist.
    #[error("not found: {0}")]
    NotFound(String),
}

impl From<TransportError> for Error {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Network(m) => Error::Network(m),
            TransportError::Status { status, message, .. } => Error::Remote { status, message },
            TransportError::Malformed(m) => Error::MalformedResponse(m),
            TransportError::NotFound(m) => Error::NotFound(m),
        }
    }
}

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Boxed future returned by every transport call.
pub type TransportFuture<'a, T> = Pin<Box<dyn Future<Output = TransportResult<T>> + Send + 'a>>;

/// Remote repository operations.
///
/// This trait abstracts over the actual wire protocol, allowing
/// for easy testing with mock implementations.
pub trait Transport: Send + Sync {
    /// Exchange an identifier and app password for a session.
    fn create_session(&self, identifier: &str, password: &str) -> TransportFuture<'_, Session>;

    /// Exchange a refresh token for a fresh session.
    fn refresh_session(&self, refresh_jwt: &str) -> TransportFuture<'_, Session>;

    /// List up to `limit` records of one type in a repository.
    fn list_records(
        &self,
        access_jwt: &str,
        repo: &str,
        collection: &str,
        limit: u32,
    ) -> TransportFuture<'_, Vec<RawRecord>>;

    /// Create or overwrite the record at `target`.
    fn put_record(
        &self,
        access_jwt: &str,
        target: &AtUri,
        record: Value,
    ) -> TransportFuture<'_, ()>;

    /// Delete the record at `target`.
    fn delete_record(&self, access_jwt: &str, target: &AtUri) -> TransportFuture<'_, ()>;

    /// Fetch any public record. Fails with [`TransportError::NotFound`] on 404.
    fn get_record(&self, target: &AtUri) -> TransportFuture<'_, Value>;

    /// Full-text search over public posts.
    fn search_posts(&self, query: &str, limit: u32) -> TransportFuture<'_, Vec<Value>>;
}

/// XRPC error body.
#[derive(Debug, Deserialize)]
struct XrpcErrorBody {
    error: Option<String>,
    message: Option<String>,
}

/// HTTP transport speaking XRPC.
pub struct XrpcTransport {
    http: Client,
    pds_url: String,
    public_api_url: String,
}

impl XrpcTransport {
    pub fn new(pds_url: impl Into<String>, public_api_url: impl Into<String>) -> Self {
        XrpcTransport {
            http: Client::new(),
            pds_url: pds_url.into().trim_end_matches('/').to_string(),
            public_api_url: public_api_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn pds(&self, method: &str) -> String {
        format!("{}/{}", self.pds_url, method)
    }

    fn public(&self, method: &str) -> String {
        format!("{}/{}", self.public_api_url, method)
    }
}

impl Default for XrpcTransport {
    fn default() -> Self {
        Self::new(DEFAULT_PDS_URL, DEFAULT_PUBLIC_API_URL)
    }
}

/// Sends a request and turns non-success statuses into [`TransportError::Status`].
async fn send(req: RequestBuilder) -> TransportResult<Response> {
    let response = req.send().await.map_err(|e| TransportError::Network(e.to_string()))?;
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    let body: Option<XrpcErrorBody> = serde_json::from_str(&text).ok();
    let (error, message) = match body {
        Some(b) => (b.error, b.message.unwrap_or_else(|| text.clone())),
        None => (None, text),
    };
    Err(TransportError::Status { status: status.as_u16(), error, message })
}

async fn read_json<T: serde::de::DeserializeOwned>(response: Response) -> TransportResult<T> {
    response.json::<T>().await.map_err(|e| TransportError::Malformed(e.to_string()))
}

impl Transport for XrpcTransport {
    fn create_session(&self, identifier: &str, password: &str) -> TransportFuture<'_, Session> {
        let body = json!({ "identifier": identifier, "password": password });
        Box::pin(async move {
            let req = self.http.post(self.pds("com.atproto.server.createSession")).json(&body);
            read_json(send(req).await?).await
        })
    }

    fn refresh_session(&self, refresh_jwt: &str) -> TransportFuture<'_, Session> {
        let refresh_jwt = refresh_jwt.to_string();
        Box::pin(async move {
            let req = self
                .http
                .post(self.pds("com.atproto.server.refreshSession"))
                .bearer_auth(&refresh_jwt);
            read_json(send(req).await?).await
        })
    }

    fn list_records(
        &self,
        access_jwt: &str,
        repo: &str,
        collection: &str,
        limit: u32,
    ) -> TransportFuture<'_, Vec<RawRecord>> {
        let access_jwt = access_jwt.to_string();
        let query = [
            ("repo", repo.to_string()),
            ("collection", collection.to_string()),
            ("limit", limit.to_string()),
        ];
        Box::pin(async move {
            let req = self
                .http
                .get(self.pds("com.atproto.repo.listRecords"))
                .query(&query)
                .bearer_auth(&access_jwt);
            let body: Value = read_json(send(req).await?).await?;
            RawRecord::list_from_value(body).map_err(|e| TransportError::Malformed(e.to_string()))
        })
    }

    fn put_record(
        &self,
        access_jwt: &str,
        target: &AtUri,
        record: Value,
    ) -> TransportFuture<'_, ()> {
        let access_jwt = access_jwt.to_string();
        let body = json!({
            "repo": target.repo,
            "collection": target.collection,
            "rkey": target.rkey,
            "record": record,
        });
        Box::pin(async move {
            let req = self
                .http
                .post(self.pds("com.atproto.repo.putRecord"))
                .bearer_auth(&access_jwt)
                .json(&body);
            send(req).await?;
            Ok(())
        })
    }

    fn delete_record(&self, access_jwt: &str, target: &AtUri) -> TransportFuture<'_, ()> {
        let access_jwt = access_jwt.to_string();
        let body = json!({
            "repo": target.repo,
            "collection": target.collection,
            "rkey": target.rkey,
        });
        Box::pin(async move {
            let req = self
                .http
                .post(self.pds("com.atproto.repo.deleteRecord"))
                .bearer_auth(&access_jwt)
                .json(&body);
            send(req).await?;
            Ok(())
        })
    }

    fn get_record(&self, target: &AtUri) -> TransportFuture<'_, Value> {
        let uri = target.to_string();
        let query = [
            ("repo", target.repo.clone()),
            ("collection", target.collection.clone()),
            ("rkey", target.rkey.clone()),
        ];
        Box::pin(async move {
            let req = self.http.get(self.public("com.atproto.repo.getRecord")).query(&query);
            match send(req).await {
                Ok(response) => read_json(response).await,
                Err(TransportError::Status { status: 400 | 404, .. }) => {
                    Err(TransportError::NotFound(uri))
                }
                Err(e) => Err(e),
            }
        })
    }

    fn search_posts(&self, query: &str, limit: u32) -> TransportFuture<'_, Vec<Value>> {
        let params = [("q", query.to_string()), ("limit", limit.to_string())];
        Box::pin(async move {
            let req = self.http.get(self.public("app.bsky.feed.searchPosts")).query(&params);
            let mut body: Value = read_json(send(req).await?).await?;
            match body.get_mut("posts").map(Value::take) {
                Some(Value::Array(posts)) => Ok(posts),
                Some(Value::Null) | None => Ok(Vec::new()),
                Some(_) => Err(TransportError::Malformed("`posts` is not a list".to_string())),
            }
        })
    }
}
