//! MLWeb UI - presentational collaborators
//!
//! Headless state for the page widgets:
//! - Mobile menu, tabs, FAQ accordion and language switcher
//! - Portfolio filters, search, keyboard focus and project modal
//! - Anchor scrolling, scroll spy, parallax and stat counters
//! - Clipboard copy of contact links
//!
//! Time-dependent pieces schedule on tokio; everything else is plain state
//! that a renderer reads back.

#![warn(unreachable_pub)]

pub mod clipboard;
pub mod counter;
pub mod debounce;
pub mod error;
pub mod keyboard;
pub mod language;
pub mod menu;
pub mod modal;
pub mod parallax;
pub mod portfolio;
pub mod scroll;
pub mod selection;

pub use clipboard::{copy_contact, copy_text, Clipboard, ContactLink, MemoryClipboard};
pub use counter::{CountUp, CounterTarget};
pub use debounce::Debouncer;
pub use error::{ClipboardError, UiError};
pub use keyboard::{shortcut, KeyEvent, Shortcut};
pub use language::LanguagePreference;
pub use menu::NavMenu;
pub use modal::{ModalPhase, ProjectDetails, ProjectModal};
pub use parallax::{Parallax, ParallaxLayer};
pub use portfolio::{Filter, ItemTransition, Portfolio, PortfolioItem, Visibility};
pub use scroll::{AnchorAction, Section};
pub use selection::{Accordion, Selection};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
