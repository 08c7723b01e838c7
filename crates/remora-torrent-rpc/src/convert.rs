//! Conversions from raw daemon records to domain snapshots.
//!
//! This is the unit boundary of the adapter: every quantity leaving this
//! module is byte-denominated (or bytes per second), and every optional
//! protocol field has been resolved to a definite value.

use remora_torrent_core::{Torrent, TorrentStatus};
use tracing::debug;

use crate::format::{Unit, format_rate, format_size};
use crate::raw::{RawStatus, RawTorrent};

/// Resolve the domain status from the raw code and completion fraction.
///
/// A stopped torrent with all payload present reads as completed; every
/// unrecognized code falls back to stopped rather than failing.
pub(crate) fn resolve_status(raw: RawStatus, percent_done: f64) -> TorrentStatus {
    if raw == RawStatus::Stopped && (percent_done - 1.0).abs() < f64::EPSILON {
        return TorrentStatus::Completed;
    }

    match raw {
        RawStatus::Stopped => TorrentStatus::Stopped,
        RawStatus::CheckWait | RawStatus::Check => TorrentStatus::Checking,
        RawStatus::DownloadWait | RawStatus::SeedWait => TorrentStatus::Queued,
        RawStatus::Download => TorrentStatus::Downloading,
        RawStatus::Seed => TorrentStatus::Seeding,
        RawStatus::Unknown(code) => {
            debug!(code, "unknown raw torrent status reported by the daemon");
            TorrentStatus::Stopped
        }
    }
}

/// Resolve an optional daemon count to a non-negative value.
pub(crate) fn non_negative(value: Option<i64>) -> u64 {
    value.map_or(0, |count| u64::try_from(count).unwrap_or(0))
}

/// Total and downloaded payload sizes in bytes.
///
/// The daemon reports `sizeWhenDone` and `haveValid` in bits; the lifetime
/// `downloadedEver` counter is preferred for the downloaded total because it
/// is already byte-denominated and survives re-checks.
pub(crate) fn torrent_sizes(raw: &RawTorrent) -> (u64, u64) {
    let total = non_negative(raw.size_when_done) / 8;
    let downloaded = raw.downloaded_ever.map_or_else(
        || non_negative(raw.have_valid) / 8,
        |bytes| u64::try_from(bytes).unwrap_or(0),
    );
    (total, downloaded)
}

/// Connected peers plus seed/peer totals accumulated across trackers.
pub(crate) fn peer_info(raw: &RawTorrent) -> (u64, u64, u64) {
    let connected = non_negative(raw.peers_connected);
    let (seeds, peers) = raw.tracker_stats.as_deref().map_or((0, 0), |trackers| {
        trackers.iter().fold((0, 0), |(seeds, peers), tracker| {
            (
                seeds + non_negative(tracker.seeder_count),
                peers + non_negative(tracker.leecher_count),
            )
        })
    });
    (connected, seeds, peers)
}

/// Upload ratio and lifetime uploaded bytes.
pub(crate) fn upload_info(raw: &RawTorrent) -> (f64, u64) {
    (
        raw.upload_ratio.unwrap_or(0.0),
        non_negative(raw.uploaded_ever),
    )
}

/// Current transfer rates, already bytes per second on the wire.
pub(crate) fn transfer_rates(raw: &RawTorrent) -> (u64, u64) {
    (non_negative(raw.rate_download), non_negative(raw.rate_upload))
}

/// Build one domain snapshot from one raw record.
pub(crate) fn normalize(raw: &RawTorrent) -> Torrent {
    let percent_done = raw.percent_done.unwrap_or(0.0);
    let status = resolve_status(RawStatus::from_code(raw.status.unwrap_or(0)), percent_done);
    let (size_bytes, downloaded_bytes) = torrent_sizes(raw);
    let (upload_ratio, uploaded_bytes) = upload_info(raw);
    let (peers_connected, seeds_total, peers_total) = peer_info(raw);
    let (download_bps, upload_bps) = transfer_rates(raw);

    let size_display = if status == TorrentStatus::Downloading {
        format!(
            "{} / {}",
            format_size(downloaded_bytes, Unit::Bytes),
            format_size(size_bytes, Unit::Bytes)
        )
    } else {
        format_size(size_bytes, Unit::Bytes)
    };

    Torrent {
        id: raw.id.unwrap_or(0),
        name: raw.name.clone().unwrap_or_default(),
        status,
        progress: percent_done * 100.0,
        size_bytes,
        size_display,
        upload_ratio,
        peers_connected,
        seeds_total,
        peers_total,
        uploaded_bytes,
        uploaded_display: format_size(uploaded_bytes, Unit::Bytes),
        download_bps,
        upload_bps,
        download_rate_display: format_rate(download_bps),
        upload_rate_display: format_rate(upload_bps),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raw::RawTrackerStat;

    #[test]
    fn stopped_and_fully_downloaded_reads_as_completed() {
        assert_eq!(
            resolve_status(RawStatus::Stopped, 1.0),
            TorrentStatus::Completed
        );
        assert_eq!(
            resolve_status(RawStatus::Stopped, 0.5),
            TorrentStatus::Stopped
        );
    }

    #[test]
    fn every_raw_code_resolves_to_a_domain_status() {
        let expectations = [
            (0, TorrentStatus::Stopped),
            (1, TorrentStatus::Checking),
            (2, TorrentStatus::Checking),
            (3, TorrentStatus::Queued),
            (4, TorrentStatus::Downloading),
            (5, TorrentStatus::Queued),
            (6, TorrentStatus::Seeding),
            (7, TorrentStatus::Stopped),
            (-1, TorrentStatus::Stopped),
        ];
        for (code, expected) in expectations {
            assert_eq!(
                resolve_status(RawStatus::from_code(code), 0.25),
                expected,
                "code {code}"
            );
        }
    }

    #[test]
    fn queued_checks_resolve_regardless_of_fraction() {
        assert_eq!(
            resolve_status(RawStatus::CheckWait, 1.0),
            TorrentStatus::Checking
        );
        assert_eq!(
            resolve_status(RawStatus::DownloadWait, 1.0),
            TorrentStatus::Queued
        );
    }

    #[test]
    fn total_size_converts_bits_to_bytes() {
        let raw = RawTorrent {
            size_when_done: Some(8000),
            ..RawTorrent::default()
        };
        let (total, downloaded) = torrent_sizes(&raw);
        assert_eq!(total, 1000);
        assert_eq!(downloaded, 0);
    }

    #[test]
    fn downloaded_prefers_lifetime_counter_over_verified_bits() {
        let with_counter = RawTorrent {
            downloaded_ever: Some(500),
            have_valid: Some(8000),
            ..RawTorrent::default()
        };
        assert_eq!(torrent_sizes(&with_counter).1, 500);

        let fallback = RawTorrent {
            have_valid: Some(8000),
            ..RawTorrent::default()
        };
        assert_eq!(torrent_sizes(&fallback).1, 1000);
    }

    #[test]
    fn peer_totals_accumulate_across_trackers() {
        let raw = RawTorrent {
            peers_connected: Some(4),
            tracker_stats: Some(vec![
                RawTrackerStat {
                    seeder_count: Some(10),
                    leecher_count: Some(3),
                },
                RawTrackerStat {
                    seeder_count: Some(7),
                    leecher_count: Some(-1),
                },
            ]),
            ..RawTorrent::default()
        };
        assert_eq!(peer_info(&raw), (4, 17, 3));
    }

    #[test]
    fn missing_fields_resolve_to_zero() {
        let raw = RawTorrent::default();
        assert_eq!(torrent_sizes(&raw), (0, 0));
        assert_eq!(peer_info(&raw), (0, 0, 0));
        assert_eq!(transfer_rates(&raw), (0, 0));
        let (ratio, uploaded) = upload_info(&raw);
        assert!(ratio.abs() < f64::EPSILON);
        assert_eq!(uploaded, 0);
    }

    #[test]
    fn downloading_torrents_show_downloaded_over_total() {
        let raw = RawTorrent {
            id: Some(5),
            name: Some("distro.iso".to_string()),
            status: Some(4),
            percent_done: Some(0.5),
            size_when_done: Some(16_384),
            downloaded_ever: Some(1024),
            ..RawTorrent::default()
        };
        let torrent = normalize(&raw);
        assert_eq!(torrent.status, TorrentStatus::Downloading);
        assert_eq!(torrent.size_display, "1.00 KiB / 2.00 KiB");
        assert!((torrent.progress - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn idle_torrents_show_the_total_alone() {
        let raw = RawTorrent {
            status: Some(6),
            percent_done: Some(1.0),
            size_when_done: Some(16_384),
            rate_upload: Some(2048),
            ..RawTorrent::default()
        };
        let torrent = normalize(&raw);
        assert_eq!(torrent.status, TorrentStatus::Seeding);
        assert_eq!(torrent.size_display, "2.00 KiB");
        assert_eq!(torrent.upload_rate_display, "2.00 KiB/s");
        assert_eq!(torrent.download_rate_display, "0 B/s");
    }
}
