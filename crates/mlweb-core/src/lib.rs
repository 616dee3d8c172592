//! MLWeb Core
//!
//! Shared building blocks for the site enhancement runtime:
//! - Site configuration (timings, storage keys, success messages)
//! - Key/value storage standing in for browser local storage
//! - Error types shared across crates
//! - Tracing subscriber setup
//!
//! # Example
//!
//! ```rust,ignore
//! use mlweb_core::{KeyValueStore, MemoryStore, SiteConfig};
//!
//! let config = SiteConfig::new().with_namespace("mlweb");
//! let store = MemoryStore::new();
//! store.set(&config.draft_key("audit"), "{}")?;
//! ```

#![warn(unreachable_pub)]

pub mod config;
pub mod error;
pub mod storage;
pub mod telemetry;

pub use config::{NotificationTimings, SiteConfig};
pub use error::{ConfigError, StorageError};
pub use storage::{FileStore, KeyValueStore, MemoryStore};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
