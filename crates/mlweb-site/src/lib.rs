//! MLWeb Site - page initialization
//!
//! `Site::init` wires configuration, storage, clipboard, backend and toast
//! sink into the page collaborators:
//!
//! ```rust,ignore
//! use mlweb_core::{MemoryStore, SiteConfig};
//! use mlweb_site::{Site, SiteDeps};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), mlweb_site::SiteError> {
//! let site = Site::init(SiteConfig::default(), SiteDeps::new(Arc::new(MemoryStore::new())))?;
//! site.copy_contact("tel:+48600100200").await;
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]

pub mod catalog;
pub mod error;
pub mod site;

pub use catalog::{categories, load_portfolio};
pub use error::SiteError;
pub use site::{Site, SiteDeps};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
