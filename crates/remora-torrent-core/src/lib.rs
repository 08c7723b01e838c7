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

//! Daemon-agnostic torrent domain types and the traits adapters implement.
//!
//! Layout: `model/` (UI-ready snapshot DTOs), `service/` (commander and
//! inspector traits), `error.rs` (shared error taxonomy).

pub mod error;
pub mod model;
pub mod service;

pub use error::{TorrentError, TorrentResult};
pub use model::{SessionStats, Torrent, TorrentFile, TorrentStatus};
pub use service::{TorrentCommander, TorrentInspector};
