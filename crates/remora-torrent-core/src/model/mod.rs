//! UI-ready torrent domain types shared across the workspace.
//!
//! Every quantity in these types is post-normalization: byte-denominated
//! fields are bytes and rate fields are bytes per second, regardless of the
//! unit the daemon reported. Optionality never reaches these types; absent
//! protocol fields are resolved to definite values at the adapter boundary.

use serde::{Deserialize, Serialize};

/// Closed lifecycle vocabulary derived from the daemon's raw status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TorrentStatus {
    /// Torrent is stopped and not fully downloaded.
    Stopped,
    /// Torrent is actively downloading payload data.
    Downloading,
    /// Torrent is complete and uploading to peers.
    Seeding,
    /// Torrent is stopped with all payload data present.
    Completed,
    /// Torrent data is being hash-checked or waiting for a check slot.
    Checking,
    /// Torrent is waiting for a download or seed slot.
    Queued,
}

impl TorrentStatus {
    #[must_use]
    /// Render the status as its lowercase string representation.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stopped => "stopped",
            Self::Downloading => "downloading",
            Self::Seeding => "seeding",
            Self::Completed => "completed",
            Self::Checking => "checking",
            Self::Queued => "queued",
        }
    }
}

/// Immutable snapshot of one daemon torrent, rebuilt on every listing call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Torrent {
    /// Daemon-assigned identifier, stable for the torrent's lifetime.
    pub id: i64,
    /// Display name reported by the daemon.
    pub name: String,
    /// Resolved lifecycle status.
    pub status: TorrentStatus,
    /// Completion percentage in `[0, 100]`, trusted from the daemon.
    pub progress: f64,
    /// Total payload size in bytes.
    pub size_bytes: u64,
    /// Human-readable size, `"<downloaded> / <total>"` while downloading.
    pub size_display: String,
    /// Share ratio (uploaded over downloaded) reported by the daemon.
    pub upload_ratio: f64,
    /// Peers currently connected to this torrent.
    pub peers_connected: u64,
    /// Seeders known across all trackers.
    pub seeds_total: u64,
    /// Leechers known across all trackers.
    pub peers_total: u64,
    /// Total bytes uploaded over the torrent's lifetime.
    pub uploaded_bytes: u64,
    /// Human-readable uploaded total.
    pub uploaded_display: String,
    /// Current download rate in bytes per second.
    pub download_bps: u64,
    /// Current upload rate in bytes per second.
    pub upload_bps: u64,
    /// Human-readable download rate with a `/s` suffix.
    pub download_rate_display: String,
    /// Human-readable upload rate with a `/s` suffix.
    pub upload_rate_display: String,
}

/// Individual file inside a torrent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TorrentFile {
    /// Zero-based position within one listing; the identifier used by
    /// later selection calls.
    pub index: u32,
    /// Basename of the file for display purposes.
    pub name: String,
    /// Full path as reported by the daemon.
    pub path: String,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Download progress for this file in `[0, 100]`.
    pub progress: f64,
    /// Whether the file is selected for download.
    pub wanted: bool,
}

/// Point-in-time snapshot of daemon-wide transfer state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SessionStats {
    /// Aggregate download rate in bytes per second.
    pub download_bps: u64,
    /// Aggregate upload rate in bytes per second.
    pub upload_bps: u64,
    /// Free space in bytes at the daemon's download directory; zero when
    /// the lookup degraded.
    pub free_space_bytes: u64,
    /// Daemon version string, `"unknown"` when unreported.
    pub daemon_version: String,
}
