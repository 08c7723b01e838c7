//! Commander and inspector traits implemented by daemon adapters.

use std::path::Path;

use async_trait::async_trait;

use crate::model::{SessionStats, Torrent, TorrentFile};

/// Mutating operations dispatched to the daemon.
#[async_trait]
pub trait TorrentCommander: Send + Sync {
    /// Start the torrents with the given identifiers.
    async fn start(&self, ids: &[i64]) -> anyhow::Result<()>;

    /// Stop the torrents with the given identifiers.
    async fn stop(&self, ids: &[i64]) -> anyhow::Result<()>;

    /// Add a torrent from a magnet link, remote URL, or `data:` URL payload.
    async fn add(&self, locator: &str) -> anyhow::Result<()>;

    /// Add a torrent from a metainfo file already on local disk.
    async fn add_file(&self, path: &Path) -> anyhow::Result<()>;

    /// Remove one torrent, optionally deleting its downloaded data.
    async fn remove(&self, id: i64, delete_local_data: bool) -> anyhow::Result<()>;

    /// Mark the given file indices as wanted or unwanted for one torrent.
    async fn set_files_wanted(&self, id: i64, files: &[u32], wanted: bool) -> anyhow::Result<()>;

    /// Apply per-torrent speed limits; non-positive values disable the
    /// corresponding limit.
    async fn set_speed_limit(
        &self,
        ids: &[i64],
        download_limit: i64,
        upload_limit: i64,
    ) -> anyhow::Result<()>;
}

/// Read-only snapshot queries against the daemon.
#[async_trait]
pub trait TorrentInspector: Send + Sync {
    /// Retrieve a fresh snapshot of every torrent on the daemon.
    async fn list(&self) -> anyhow::Result<Vec<Torrent>>;

    /// Retrieve the reconciled file list for one torrent.
    async fn files(&self, id: i64) -> anyhow::Result<Vec<TorrentFile>>;

    /// Retrieve daemon-wide session statistics.
    async fn session_stats(&self) -> anyhow::Result<SessionStats>;
}
