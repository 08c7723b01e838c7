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

//! Typed settings for the Remora desktop application.
//!
//! Layout: `model.rs` (settings models and presentation enums),
//! `error.rs` (validation errors). Pure data carriers: persistence and UI
//! wiring live in the host application, and the daemon adapter reads only
//! the connection fields.

pub mod error;
pub mod model;

pub use error::{ConfigError, ConfigResult};
pub use model::{Config, SpeedUnit, Theme};
