//! # Design
//!
//! - Centralize RPC adapter error context without using `anyhow`.
//! - Keep error messages constant; store operational context in fields.
//! - Provide a helper to lift adapter failures into `TorrentError` with the
//!   attempted operation attached.

use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::path::PathBuf;

use remora_torrent_core::TorrentError;

/// Convenience alias for adapter-internal results.
pub type RpcResult<T> = Result<T, RpcError>;

#[derive(Debug)]
/// Internal error details used by the Transmission RPC adapter.
pub enum RpcError {
    /// The HTTP request to the daemon could not be completed.
    Http {
        /// RPC method that was being invoked.
        method: &'static str,
        /// Underlying client error.
        source: reqwest::Error,
    },
    /// The daemon answered with an unexpected HTTP status.
    Status {
        /// RPC method that was being invoked.
        method: &'static str,
        /// HTTP status code received.
        status: u16,
    },
    /// The daemon processed the request but reported a failure result.
    Daemon {
        /// RPC method that was being invoked.
        method: &'static str,
        /// Result string returned by the daemon.
        result: String,
    },
    /// The daemon response body could not be read.
    Decode {
        /// RPC method that was being invoked.
        method: &'static str,
        /// Underlying client error.
        source: reqwest::Error,
    },
    /// The daemon response payload did not match the expected shape.
    Parse {
        /// RPC method that was being invoked.
        method: &'static str,
        /// Underlying JSON error.
        source: serde_json::Error,
    },
    /// The CSRF handshake did not yield a session identifier.
    Handshake {
        /// RPC method that was being invoked.
        method: &'static str,
    },
    /// The configured host could not form a valid endpoint.
    InvalidEndpoint {
        /// Host string as configured.
        host: String,
        /// Static reason describing the invalid value.
        reason: &'static str,
    },
    /// A torrent `data:` URL payload was structurally malformed.
    InvalidDataUrl {
        /// Static reason describing the invalid value.
        reason: &'static str,
    },
    /// A torrent payload failed base64 decoding.
    Base64 {
        /// Underlying decode error.
        source: base64::DecodeError,
    },
    /// The daemon provided no file or statistics listing for a torrent.
    MissingFileInfo,
    /// File descriptors and statistics had populated but unequal lengths.
    FileListMismatch {
        /// Number of file descriptors received.
        files: usize,
        /// Number of statistics entries received.
        stats: usize,
    },
    /// A temporary-file IO operation failed.
    Io {
        /// Operation that triggered the IO failure.
        operation: &'static str,
        /// Path involved in the IO failure.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
}

impl Display for RpcError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http { method, .. } => {
                let _ = method;
                formatter.write_str("daemon request failed")
            }
            Self::Status { method, status } => {
                let _ = (method, status);
                formatter.write_str("daemon returned unexpected http status")
            }
            Self::Daemon { method, result } => {
                let _ = (method, result);
                formatter.write_str("daemon reported failure")
            }
            Self::Decode { method, .. } => {
                let _ = method;
                formatter.write_str("daemon response body unreadable")
            }
            Self::Parse { method, .. } => {
                let _ = method;
                formatter.write_str("daemon response malformed")
            }
            Self::Handshake { method } => {
                let _ = method;
                formatter.write_str("daemon session handshake failed")
            }
            Self::InvalidEndpoint { host, reason } => {
                let _ = (host, reason);
                formatter.write_str("invalid daemon endpoint")
            }
            Self::InvalidDataUrl { reason } => {
                let _ = reason;
                formatter.write_str("invalid torrent data url")
            }
            Self::Base64 { .. } => formatter.write_str("invalid base64 torrent payload"),
            Self::MissingFileInfo => formatter.write_str("no file information available"),
            Self::FileListMismatch { files, stats } => {
                let _ = (files, stats);
                formatter.write_str("file and statistics counts mismatch")
            }
            Self::Io {
                operation, path, ..
            } => {
                let _ = (operation, path);
                formatter.write_str("temporary file operation failed")
            }
        }
    }
}

impl Error for RpcError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Http { source, .. } | Self::Decode { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::Base64 { source } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Build a torrent error with structured operation context.
pub fn op_failed(
    operation: &'static str,
    torrent_id: Option<i64>,
    source: impl Error + Send + Sync + 'static,
) -> TorrentError {
    TorrentError::OperationFailed {
        operation,
        torrent_id,
        source: Box::new(source),
    }
}
