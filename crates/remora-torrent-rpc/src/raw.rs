//! Wire-level records exchanged with the Transmission RPC endpoint.
//!
//! Every numeric field the daemon may omit is an `Option`; absence is
//! resolved to definite values in `convert`, never downstream. Units here
//! are daemon-native and are not safe to surface without conversion.

use serde::{Deserialize, Serialize};

/// Raw torrent record as returned by `torrent-get`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct RawTorrent {
    /// Daemon-assigned torrent identifier.
    pub id: Option<i64>,
    /// Display name.
    pub name: Option<String>,
    /// Numeric status code, resolved via [`RawStatus`].
    pub status: Option<i64>,
    /// Completion fraction in `[0, 1]`.
    pub percent_done: Option<f64>,
    /// Share ratio reported by the daemon.
    pub upload_ratio: Option<f64>,
    /// Peers currently connected.
    pub peers_connected: Option<i64>,
    /// Per-tracker peer counts.
    pub tracker_stats: Option<Vec<RawTrackerStat>>,
    /// Lifetime uploaded total in bytes.
    pub uploaded_ever: Option<i64>,
    /// Bytes left until the download completes.
    pub left_until_done: Option<i64>,
    /// Bytes available from connected peers.
    pub desired_available: Option<i64>,
    /// Verified payload on disk, reported in bits.
    pub have_valid: Option<i64>,
    /// Wanted payload size, reported in bits.
    pub size_when_done: Option<i64>,
    /// Download rate in bytes per second.
    pub rate_download: Option<i64>,
    /// Upload rate in bytes per second.
    pub rate_upload: Option<i64>,
    /// Lifetime downloaded total in bytes.
    pub downloaded_ever: Option<i64>,
    /// File descriptors, present only when requested.
    pub files: Option<Vec<RawFile>>,
    /// File statistics parallel to `files`.
    pub file_stats: Option<Vec<RawFileStat>>,
}

/// Per-tracker peer counts attached to a torrent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct RawTrackerStat {
    /// Seeders known to this tracker.
    pub seeder_count: Option<i64>,
    /// Leechers known to this tracker.
    pub leecher_count: Option<i64>,
}

/// File descriptor inside a torrent listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct RawFile {
    /// Full path of the file within the torrent payload.
    pub name: Option<String>,
    /// File size in bytes.
    pub length: Option<i64>,
    /// Bytes of this file downloaded so far.
    pub bytes_completed: Option<i64>,
}

/// File statistics entry parallel to the descriptor list.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct RawFileStat {
    /// Bytes of this file downloaded so far.
    pub bytes_completed: Option<i64>,
    /// Whether the file is selected for download.
    pub wanted: Option<bool>,
    /// Daemon-side priority value.
    pub priority: Option<i64>,
}

/// Session arguments subset fetched by the adapter.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RawSessionArguments {
    /// Configured download directory.
    #[serde(rename = "download-dir")]
    pub download_dir: Option<String>,
    /// Daemon version string.
    pub version: Option<String>,
}

/// Aggregate transfer rates returned by `session-stats`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct RawSessionStats {
    /// Aggregate download rate in bytes per second.
    pub download_speed: Option<i64>,
    /// Aggregate upload rate in bytes per second.
    pub upload_speed: Option<i64>,
}

/// Options accepted by `torrent-set`; unset fields are omitted on the wire.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct TorrentOptions {
    /// File indices to mark as wanted.
    #[serde(rename = "files-wanted", skip_serializing_if = "Option::is_none")]
    pub files_wanted: Option<Vec<u32>>,
    /// File indices to mark as unwanted.
    #[serde(rename = "files-unwanted", skip_serializing_if = "Option::is_none")]
    pub files_unwanted: Option<Vec<u32>>,
    /// Whether the download limit is enforced.
    #[serde(rename = "downloadLimited", skip_serializing_if = "Option::is_none")]
    pub download_limited: Option<bool>,
    /// Whether the upload limit is enforced.
    #[serde(rename = "uploadLimited", skip_serializing_if = "Option::is_none")]
    pub upload_limited: Option<bool>,
    /// Download limit value in the daemon's native unit.
    #[serde(rename = "downloadLimit", skip_serializing_if = "Option::is_none")]
    pub download_limit: Option<i64>,
    /// Upload limit value in the daemon's native unit.
    #[serde(rename = "uploadLimit", skip_serializing_if = "Option::is_none")]
    pub upload_limit: Option<i64>,
}

/// Raw daemon status codes attached to a torrent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawStatus {
    /// Torrent is stopped.
    Stopped,
    /// Torrent is queued for a hash check.
    CheckWait,
    /// Torrent data is being hash-checked.
    Check,
    /// Torrent is queued for download.
    DownloadWait,
    /// Torrent is downloading.
    Download,
    /// Torrent is queued for seeding.
    SeedWait,
    /// Torrent is seeding.
    Seed,
    /// Status code this adapter does not recognize.
    Unknown(i64),
}

impl RawStatus {
    #[must_use]
    /// Resolve a numeric daemon status code; unknown codes are preserved.
    pub const fn from_code(code: i64) -> Self {
        match code {
            0 => Self::Stopped,
            1 => Self::CheckWait,
            2 => Self::Check,
            3 => Self::DownloadWait,
            4 => Self::Download,
            5 => Self::SeedWait,
            6 => Self::Seed,
            other => Self::Unknown(other),
        }
    }
}

/// Response payload of `torrent-get`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct TorrentGetResponse {
    pub(crate) torrents: Vec<RawTorrent>,
}

/// Response payload of `free-space`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct FreeSpaceResponse {
    #[serde(rename = "size-bytes")]
    pub(crate) size: Option<i64>,
}
