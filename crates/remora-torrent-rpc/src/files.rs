//! Positional reconciliation of file descriptors with their statistics.
//!
//! The daemon returns two parallel lists for one torrent; positional index
//! is the only correspondence it offers, so unequal populated lengths are a
//! hard failure rather than a best-effort merge.

use remora_torrent_core::TorrentFile;

use crate::convert::non_negative;
use crate::error::{RpcError, RpcResult};
use crate::format::to_f64;
use crate::raw::{RawFile, RawFileStat};

/// Merge a torrent's file descriptors with the parallel statistics list.
///
/// An absent list means the daemon provided no file information, which is
/// distinguishable from a legitimate zero-file torrent (both lists present
/// and empty).
pub(crate) fn reconcile_files(
    files: Option<&[RawFile]>,
    stats: Option<&[RawFileStat]>,
) -> RpcResult<Vec<TorrentFile>> {
    let (Some(files), Some(stats)) = (files, stats) else {
        return Err(RpcError::MissingFileInfo);
    };
    if files.is_empty() || stats.is_empty() {
        return Ok(Vec::new());
    }
    if files.len() != stats.len() {
        return Err(RpcError::FileListMismatch {
            files: files.len(),
            stats: stats.len(),
        });
    }

    Ok(files
        .iter()
        .zip(stats)
        .enumerate()
        .map(|(index, (file, stat))| reconcile_entry(index, file, stat))
        .collect())
}

fn reconcile_entry(index: usize, file: &RawFile, stat: &RawFileStat) -> TorrentFile {
    let size_bytes = non_negative(file.length);
    let completed = non_negative(stat.bytes_completed);
    let progress = if size_bytes == 0 {
        0.0
    } else {
        (to_f64(completed) / to_f64(size_bytes)) * 100.0
    };
    let path = file.name.clone().unwrap_or_default();
    let name = path.rsplit('/').next().unwrap_or(&path).to_string();

    TorrentFile {
        index: u32::try_from(index).unwrap_or(u32::MAX),
        name,
        path,
        size_bytes,
        progress,
        wanted: stat.wanted.unwrap_or_default(),
    }
}
