//! Error types for torrent operations.

use std::error::Error;

use thiserror::Error;

/// Primary error type for torrent operations.
#[derive(Debug, Error)]
pub enum TorrentError {
    /// Operation is not supported by the underlying daemon.
    #[error("torrent operation not supported")]
    Unsupported {
        /// Operation identifier.
        operation: &'static str,
    },
    /// Operation failed in the underlying daemon or transport.
    #[error("torrent operation failed")]
    OperationFailed {
        /// Operation identifier.
        operation: &'static str,
        /// Torrent identifier when available.
        torrent_id: Option<i64>,
        /// Underlying failure.
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },
    /// Torrent was not found on the daemon.
    #[error("torrent not found")]
    NotFound {
        /// Missing torrent identifier.
        torrent_id: i64,
    },
}

/// Convenience alias for torrent operation results.
pub type TorrentResult<T> = Result<T, TorrentError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn operation_failed_keeps_cause_and_context() {
        let err = TorrentError::OperationFailed {
            operation: "torrent_get",
            torrent_id: Some(7),
            source: Box::new(io::Error::other("connection reset")),
        };
        assert_eq!(err.to_string(), "torrent operation failed");
        let source = err.source().expect("source missing");
        assert_eq!(source.to_string(), "connection reset");
    }

    #[test]
    fn simple_variants_have_constant_messages() {
        let unsupported = TorrentError::Unsupported {
            operation: "reannounce",
        };
        assert_eq!(unsupported.to_string(), "torrent operation not supported");
        assert!(unsupported.source().is_none());

        let missing = TorrentError::NotFound { torrent_id: 42 };
        assert_eq!(missing.to_string(), "torrent not found");
        assert!(missing.source().is_none());
    }
}
