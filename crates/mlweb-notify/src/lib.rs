//! MLWeb Notify - transient notification toasts
//!
//! One shared manager for every UI collaborator:
//! - Success / error / warning / info kinds with a fixed icon and colour table
//! - Last-write-wins display (a new toast replaces the old one)
//! - Auto-dismiss after 5s, 300ms exit animation, idempotent removal
//!
//! # Example
//!
//! ```rust,ignore
//! use mlweb_notify::{Kind, NotificationCenter, TracingSink};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let center = NotificationCenter::new(Default::default(), Arc::new(TracingSink))?;
//! let id = center.notify("Skopiowano do schowka!", Kind::Success);
//! center.close(id);
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]

pub mod center;
pub mod error;
pub mod kind;
pub mod sink;
pub mod toast;

pub use center::{DismissReason, NotificationCenter};
pub use error::NotifyError;
pub use kind::{Kind, Palette, UnknownKind};
pub use sink::{NotificationSink, TracingSink};
pub use toast::{Toast, ToastId, ToastPhase};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
