//! Base64 torrent ingestion through a scoped temporary file.
//!
//! The UI hands over `.torrent` payloads as `data:` URLs. The payload is
//! decoded and staged on disk because the upload path speaks files; the
//! staging directory is owned by a guard so it is removed on every exit
//! path, including a failed upload.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use tracing::debug;

use crate::error::{RpcError, RpcResult};
use crate::transport::RpcTransport;

/// File name used for the staged metainfo payload.
const UPLOAD_FILE_NAME: &str = "upload.torrent";

/// Prefix for the staging directory.
const TEMP_DIR_PREFIX: &str = "remora-";

/// Decode a `data:` URL payload and add it through the file-upload path.
pub(crate) async fn add_from_data_url(
    transport: &dyn RpcTransport,
    data_url: &str,
) -> RpcResult<()> {
    let payload = decode_data_url(data_url)?;
    debug!(bytes = payload.len(), "staging base64 torrent payload");

    let staging = tempfile::Builder::new()
        .prefix(TEMP_DIR_PREFIX)
        .tempdir()
        .map_err(|source| RpcError::Io {
            operation: "create_staging_dir",
            path: std::env::temp_dir(),
            source,
        })?;
    let path = staging.path().join(UPLOAD_FILE_NAME);
    tokio::fs::write(&path, &payload)
        .await
        .map_err(|source| RpcError::Io {
            operation: "write_metainfo",
            path: path.clone(),
            source,
        })?;

    // `staging` removes the directory when it drops, on success and failure.
    transport.torrent_add_file(&path).await
}

/// Split a `data:` URL into header and payload and decode the base64
/// payload. Exactly one comma delimiter is required.
fn decode_data_url(data_url: &str) -> RpcResult<Vec<u8>> {
    let parts: Vec<&str> = data_url.split(',').collect();
    if parts.len() != 2 {
        return Err(RpcError::InvalidDataUrl {
            reason: "expected exactly one comma delimiter",
        });
    }
    BASE64
        .decode(parts[1])
        .map_err(|source| RpcError::Base64 { source })
}
