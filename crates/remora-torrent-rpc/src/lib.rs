#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Transmission RPC adapter producing the UI-ready torrent domain model.
//!
//! The daemon reports some quantities in bits and others in bytes, omits
//! fields it was not asked for, and spreads lifecycle information across a
//! numeric status code and a completion fraction. This crate owns all of
//! that normalization so nothing downstream converts units or handles
//! absent fields again.
//!
//! Layout: `transport.rs` (capability trait + HTTP implementation),
//! `raw.rs` (wire records), `convert.rs` (status resolution, extraction,
//! normalization), `files.rs` (file/statistics reconciliation),
//! `session.rs` (session aggregation), `ingest.rs` (base64 staging),
//! `endpoint.rs` (endpoint construction), `error.rs` (adapter errors).

mod convert;
pub mod endpoint;
pub mod error;
mod files;
mod format;
mod ingest;
pub mod raw;
mod session;
#[cfg(test)]
mod testing;
pub mod transport;

pub use endpoint::DaemonSettings;
pub use error::{RpcError, RpcResult, op_failed};
pub use transport::{HttpTransport, RpcTransport};

use std::path::Path;
use std::sync::Arc;

use remora_torrent_core::{
    SessionStats, Torrent, TorrentCommander, TorrentError, TorrentFile, TorrentInspector,
    TorrentResult,
};

use crate::raw::TorrentOptions;

/// Scheme marker identifying a base64 torrent payload locator.
const DATA_URL_PREFIX: &str = "data:";

/// Field set requested for the torrent listing.
const TORRENT_LIST_FIELDS: [&str; 15] = [
    "id",
    "name",
    "status",
    "percentDone",
    "uploadRatio",
    "peersConnected",
    "trackerStats",
    "uploadedEver",
    "leftUntilDone",
    "desiredAvailable",
    "haveValid",
    "sizeWhenDone",
    "rateDownload",
    "rateUpload",
    "downloadedEver",
];

/// Field set requested for one torrent's file listing.
const TORRENT_FILE_FIELDS: [&str; 3] = ["files", "fileStats", "name"];

/// Transmission-backed implementation of the core torrent services.
#[derive(Clone)]
pub struct TransmissionEngine {
    transport: Arc<dyn RpcTransport>,
}

impl TransmissionEngine {
    /// Connect to the daemon described by the settings.
    ///
    /// # Errors
    ///
    /// Returns an error when the configured host cannot form a valid
    /// endpoint.
    pub fn connect(settings: &DaemonSettings) -> TorrentResult<Self> {
        let endpoint = settings
            .endpoint()
            .map_err(|err| op_failed("connect", None, err))?;
        Ok(Self::with_transport(Arc::new(HttpTransport::new(endpoint))))
    }

    /// Build an engine over a custom transport.
    #[must_use]
    pub fn with_transport(transport: Arc<dyn RpcTransport>) -> Self {
        Self { transport }
    }
}

#[async_trait::async_trait]
impl TorrentCommander for TransmissionEngine {
    async fn start(&self, ids: &[i64]) -> anyhow::Result<()> {
        self.transport
            .torrent_start(ids)
            .await
            .map_err(|err| op_failed("torrent_start", None, err))?;
        Ok(())
    }

    async fn stop(&self, ids: &[i64]) -> anyhow::Result<()> {
        self.transport
            .torrent_stop(ids)
            .await
            .map_err(|err| op_failed("torrent_stop", None, err))?;
        Ok(())
    }

    async fn add(&self, locator: &str) -> anyhow::Result<()> {
        let outcome = if locator.starts_with(DATA_URL_PREFIX) {
            ingest::add_from_data_url(self.transport.as_ref(), locator).await
        } else {
            self.transport.torrent_add(locator).await
        };
        outcome.map_err(|err| op_failed("torrent_add", None, err))?;
        Ok(())
    }

    async fn add_file(&self, path: &Path) -> anyhow::Result<()> {
        self.transport
            .torrent_add_file(path)
            .await
            .map_err(|err| op_failed("torrent_add_file", None, err))?;
        Ok(())
    }

    async fn remove(&self, id: i64, delete_local_data: bool) -> anyhow::Result<()> {
        self.transport
            .torrent_remove(&[id], delete_local_data)
            .await
            .map_err(|err| op_failed("torrent_remove", Some(id), err))?;
        Ok(())
    }

    async fn set_files_wanted(&self, id: i64, files: &[u32], wanted: bool) -> anyhow::Result<()> {
        let mut options = TorrentOptions::default();
        if wanted {
            options.files_wanted = Some(files.to_vec());
        } else {
            options.files_unwanted = Some(files.to_vec());
        }
        self.transport
            .torrent_set(&[id], options)
            .await
            .map_err(|err| op_failed("torrent_set_files", Some(id), err))?;
        Ok(())
    }

    async fn set_speed_limit(
        &self,
        ids: &[i64],
        download_limit: i64,
        upload_limit: i64,
    ) -> anyhow::Result<()> {
        let options = TorrentOptions {
            download_limited: Some(download_limit > 0),
            upload_limited: Some(upload_limit > 0),
            download_limit: (download_limit > 0).then_some(download_limit),
            upload_limit: (upload_limit > 0).then_some(upload_limit),
            ..TorrentOptions::default()
        };
        self.transport
            .torrent_set(ids, options)
            .await
            .map_err(|err| op_failed("torrent_set_limits", None, err))?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl TorrentInspector for TransmissionEngine {
    async fn list(&self) -> anyhow::Result<Vec<Torrent>> {
        let listing = self
            .transport
            .torrent_get(&TORRENT_LIST_FIELDS, None)
            .await
            .map_err(|err| op_failed("torrent_get", None, err))?;
        Ok(listing.iter().map(convert::normalize).collect())
    }

    async fn files(&self, id: i64) -> anyhow::Result<Vec<TorrentFile>> {
        let listing = self
            .transport
            .torrent_get(&TORRENT_FILE_FIELDS, Some(&[id]))
            .await
            .map_err(|err| op_failed("torrent_files", Some(id), err))?;
        let torrent = listing
            .into_iter()
            .next()
            .ok_or(TorrentError::NotFound { torrent_id: id })?;
        let files = files::reconcile_files(torrent.files.as_deref(), torrent.file_stats.as_deref())
            .map_err(|err| op_failed("torrent_files", Some(id), err))?;
        Ok(files)
    }

    async fn session_stats(&self) -> anyhow::Result<SessionStats> {
        let stats = session::build_session_stats(self.transport.as_ref())
            .await
            .map_err(|err| op_failed("session_stats", None, err))?;
        Ok(stats)
    }
}
