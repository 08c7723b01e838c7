//! Daemon-wide session statistics aggregation.

use remora_torrent_core::SessionStats;
use tracing::warn;

use crate::convert::non_negative;
use crate::error::RpcResult;
use crate::transport::RpcTransport;

/// Session arguments the aggregator depends on.
pub(crate) const SESSION_FIELDS: [&str; 2] = ["download-dir", "version"];

/// Version string reported when the daemon does not provide one.
const FALLBACK_VERSION: &str = "unknown";

/// Build a session snapshot from session arguments, transfer statistics,
/// and a best-effort free-space lookup.
///
/// The two session calls are both required; the free-space query degrades
/// to zero on failure because the remaining statistics stay useful.
pub(crate) async fn build_session_stats(transport: &dyn RpcTransport) -> RpcResult<SessionStats> {
    let session = transport.session_arguments(&SESSION_FIELDS).await?;
    let stats = transport.session_stats().await?;

    let mut free_space_bytes = 0;
    if let Some(directory) = session.download_dir.as_deref() {
        free_space_bytes = resolve_free_space(transport, directory).await;
    }

    Ok(SessionStats {
        download_bps: non_negative(stats.download_speed),
        upload_bps: non_negative(stats.upload_speed),
        free_space_bytes,
        daemon_version: session
            .version
            .unwrap_or_else(|| FALLBACK_VERSION.to_string()),
    })
}

/// The daemon reports free space in bits; failures degrade to zero.
async fn resolve_free_space(transport: &dyn RpcTransport, directory: &str) -> u64 {
    transport.free_space(directory).await.map_or_else(
        |err| {
            warn!(error = %err, directory, "failed to query free space");
            0
        },
        |bits| bits / 8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raw::{RawSessionArguments, RawSessionStats};
    use crate::testing::StubTransport;

    fn stub_with_session() -> StubTransport {
        StubTransport {
            session: RawSessionArguments {
                download_dir: Some("/data/downloads".to_string()),
                version: Some("4.0.5".to_string()),
            },
            stats: RawSessionStats {
                download_speed: Some(4096),
                upload_speed: Some(1024),
            },
            free_space_bits: Some(8_000_000),
            ..StubTransport::default()
        }
    }

    #[tokio::test]
    async fn aggregates_speeds_version_and_free_space() {
        let stub = stub_with_session();
        let stats = build_session_stats(&stub).await.expect("session stats");
        assert_eq!(stats.download_bps, 4096);
        assert_eq!(stats.upload_bps, 1024);
        assert_eq!(stats.free_space_bytes, 1_000_000);
        assert_eq!(stats.daemon_version, "4.0.5");
    }

    #[tokio::test]
    async fn free_space_failure_degrades_to_zero() {
        let stub = StubTransport {
            free_space_bits: None,
            ..stub_with_session()
        };
        let stats = build_session_stats(&stub).await.expect("session stats");
        assert_eq!(stats.free_space_bytes, 0);
        assert_eq!(stats.download_bps, 4096);
    }

    #[tokio::test]
    async fn missing_download_directory_skips_the_lookup() {
        let mut stub = stub_with_session();
        stub.session.download_dir = None;
        let stats = build_session_stats(&stub).await.expect("session stats");
        assert_eq!(stats.free_space_bytes, 0);
        assert!(
            !stub
                .calls()
                .iter()
                .any(|call| matches!(call, crate::testing::RecordedCall::FreeSpace(_)))
        );
    }

    #[tokio::test]
    async fn missing_version_falls_back_to_unknown() {
        let mut stub = stub_with_session();
        stub.session.version = None;
        let stats = build_session_stats(&stub).await.expect("session stats");
        assert_eq!(stats.daemon_version, "unknown");
    }

    #[tokio::test]
    async fn required_session_calls_fail_the_aggregate() {
        let arguments_down = StubTransport {
            fail: Some("session-get"),
            ..stub_with_session()
        };
        assert!(build_session_stats(&arguments_down).await.is_err());

        let stats_down = StubTransport {
            fail: Some("session-stats"),
            ..stub_with_session()
        };
        assert!(build_session_stats(&stats_down).await.is_err());
    }
}
