//! Transmission RPC transport: capability trait and HTTP implementation.
//!
//! The daemon speaks JSON envelopes over a single POST endpoint and guards
//! every call with a CSRF token: the first request is answered with HTTP 409
//! carrying `X-Transmission-Session-Id`, which must be echoed on all
//! subsequent requests. The implementation caches the token and retries a
//! conflicted request exactly once; everything else propagates immediately.

use std::path::Path;

use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tokio::sync::Mutex;
use url::Url;

use crate::error::{RpcError, RpcResult};
use crate::raw::{
    FreeSpaceResponse, RawSessionArguments, RawSessionStats, RawTorrent, TorrentGetResponse,
    TorrentOptions,
};

/// Header carrying the daemon's CSRF token.
pub const SESSION_ID_HEADER: &str = "x-transmission-session-id";

/// Result string the daemon uses for successful calls.
const RESULT_SUCCESS: &str = "success";

/// Capability surface the adapter consumes from the daemon.
#[async_trait]
pub trait RpcTransport: Send + Sync {
    /// Start the torrents with the given identifiers.
    async fn torrent_start(&self, ids: &[i64]) -> RpcResult<()>;

    /// Stop the torrents with the given identifiers.
    async fn torrent_stop(&self, ids: &[i64]) -> RpcResult<()>;

    /// Add a torrent from a remote link or magnet locator.
    async fn torrent_add(&self, locator: &str) -> RpcResult<()>;

    /// Add a torrent by uploading the metainfo file at `path`.
    async fn torrent_add_file(&self, path: &Path) -> RpcResult<()>;

    /// Remove torrents, optionally deleting their local data.
    async fn torrent_remove(&self, ids: &[i64], delete_local_data: bool) -> RpcResult<()>;

    /// Apply per-torrent options.
    async fn torrent_set(&self, ids: &[i64], options: TorrentOptions) -> RpcResult<()>;

    /// Fetch the named fields for all torrents, or for `ids` when given.
    async fn torrent_get(
        &self,
        fields: &[&str],
        ids: Option<&[i64]>,
    ) -> RpcResult<Vec<RawTorrent>>;

    /// Fetch the named session arguments.
    async fn session_arguments(&self, fields: &[&str]) -> RpcResult<RawSessionArguments>;

    /// Fetch daemon-wide transfer statistics.
    async fn session_stats(&self) -> RpcResult<RawSessionStats>;

    /// Query free space at `path`; the daemon reports the value in bits.
    async fn free_space(&self, path: &str) -> RpcResult<u64>;
}

#[derive(Serialize)]
struct RequestEnvelope<'a> {
    method: &'a str,
    #[serde(skip_serializing_if = "argument_omitted")]
    arguments: &'a Value,
}

#[allow(
    clippy::trivially_copy_pass_by_ref,
    reason = "serde skip_serializing_if passes a reference to the field type"
)]
fn argument_omitted(arguments: &&Value) -> bool {
    arguments.is_null()
}

#[derive(Deserialize)]
struct ResponseEnvelope {
    result: String,
    #[serde(default)]
    arguments: Option<Value>,
}

/// HTTP implementation of [`RpcTransport`] backed by reqwest.
pub struct HttpTransport {
    client: Client,
    endpoint: Url,
    username: String,
    password: String,
    session_id: Mutex<Option<String>>,
}

impl HttpTransport {
    /// Build a transport for the given endpoint; credentials embedded in the
    /// URL are extracted and sent as basic auth instead.
    #[must_use]
    pub fn new(endpoint: Url) -> Self {
        let username = endpoint.username().to_string();
        let password = endpoint.password().unwrap_or_default().to_string();
        let mut endpoint = endpoint;
        let _ = endpoint.set_username("");
        let _ = endpoint.set_password(None);

        Self {
            client: Client::new(),
            endpoint,
            username,
            password,
            session_id: Mutex::new(None),
        }
    }

    async fn post(
        &self,
        method: &'static str,
        arguments: &Value,
        session_id: Option<String>,
    ) -> RpcResult<Response> {
        let envelope = RequestEnvelope { method, arguments };
        let mut request = self.client.post(self.endpoint.clone()).json(&envelope);
        if !self.username.is_empty() {
            request = request.basic_auth(&self.username, Some(&self.password));
        }
        if let Some(token) = session_id {
            request = request.header(SESSION_ID_HEADER, token);
        }
        request
            .send()
            .await
            .map_err(|source| RpcError::Http { method, source })
    }

    async fn call_raw(&self, method: &'static str, arguments: Value) -> RpcResult<Option<Value>> {
        let cached = self.session_id.lock().await.clone();
        let mut response = self.post(method, &arguments, cached).await?;

        if response.status() == StatusCode::CONFLICT {
            let token = response
                .headers()
                .get(SESSION_ID_HEADER)
                .and_then(|value| value.to_str().ok())
                .map(str::to_string)
                .ok_or(RpcError::Handshake { method })?;
            *self.session_id.lock().await = Some(token.clone());
            response = self.post(method, &arguments, Some(token)).await?;
        }

        let status = response.status();
        if !status.is_success() {
            return Err(RpcError::Status {
                method,
                status: status.as_u16(),
            });
        }

        let envelope: ResponseEnvelope = response
            .json()
            .await
            .map_err(|source| RpcError::Decode { method, source })?;
        if envelope.result != RESULT_SUCCESS {
            return Err(RpcError::Daemon {
                method,
                result: envelope.result,
            });
        }
        Ok(envelope.arguments)
    }

    async fn call<R: DeserializeOwned>(
        &self,
        method: &'static str,
        arguments: Value,
    ) -> RpcResult<R> {
        let payload = self.call_raw(method, arguments).await?.ok_or_else(|| {
            RpcError::Daemon {
                method,
                result: "missing response arguments".to_string(),
            }
        })?;
        serde_json::from_value(payload).map_err(|source| RpcError::Parse { method, source })
    }

    async fn invoke(&self, method: &'static str, arguments: Value) -> RpcResult<()> {
        self.call_raw(method, arguments).await.map(|_| ())
    }
}

#[derive(Serialize)]
struct TorrentSetArgs<'a> {
    ids: &'a [i64],
    #[serde(flatten)]
    options: &'a TorrentOptions,
}

#[async_trait]
impl RpcTransport for HttpTransport {
    async fn torrent_start(&self, ids: &[i64]) -> RpcResult<()> {
        self.invoke("torrent-start", json!({ "ids": ids })).await
    }

    async fn torrent_stop(&self, ids: &[i64]) -> RpcResult<()> {
        self.invoke("torrent-stop", json!({ "ids": ids })).await
    }

    async fn torrent_add(&self, locator: &str) -> RpcResult<()> {
        self.invoke("torrent-add", json!({ "filename": locator }))
            .await
    }

    async fn torrent_add_file(&self, path: &Path) -> RpcResult<()> {
        let metainfo = tokio::fs::read(path).await.map_err(|source| RpcError::Io {
            operation: "read_metainfo",
            path: path.to_path_buf(),
            source,
        })?;
        self.invoke("torrent-add", json!({ "metainfo": BASE64.encode(metainfo) }))
            .await
    }

    async fn torrent_remove(&self, ids: &[i64], delete_local_data: bool) -> RpcResult<()> {
        self.invoke(
            "torrent-remove",
            json!({ "ids": ids, "delete-local-data": delete_local_data }),
        )
        .await
    }

    async fn torrent_set(&self, ids: &[i64], options: TorrentOptions) -> RpcResult<()> {
        let arguments = serde_json::to_value(TorrentSetArgs {
            ids,
            options: &options,
        })
        .map_err(|source| RpcError::Parse {
            method: "torrent-set",
            source,
        })?;
        self.invoke("torrent-set", arguments).await
    }

    async fn torrent_get(
        &self,
        fields: &[&str],
        ids: Option<&[i64]>,
    ) -> RpcResult<Vec<RawTorrent>> {
        let arguments = ids.map_or_else(
            || json!({ "fields": fields }),
            |ids| json!({ "fields": fields, "ids": ids }),
        );
        let listing: TorrentGetResponse = self.call("torrent-get", arguments).await?;
        Ok(listing.torrents)
    }

    async fn session_arguments(&self, fields: &[&str]) -> RpcResult<RawSessionArguments> {
        self.call("session-get", json!({ "fields": fields })).await
    }

    async fn session_stats(&self) -> RpcResult<RawSessionStats> {
        self.call("session-stats", Value::Null).await
    }

    async fn free_space(&self, path: &str) -> RpcResult<u64> {
        let response: FreeSpaceResponse = self.call("free-space", json!({ "path": path })).await?;
        Ok(response
            .size
            .map_or(0, |value| u64::try_from(value).unwrap_or(0)))
    }
}
