//! Copy-to-clipboard for contact links
//!
//! Right-clicking a `mailto:` or `tel:` link copies the bare address and
//! reports the result through the notification center.

use crate::error::ClipboardError;
use async_trait::async_trait;
use mlweb_notify::{NotificationCenter, ToastId};

/// Failure message shown for any clipboard error
pub const COPY_FAILED: &str = "Nie udało się skopiować";

/// Success message for text that is not a contact link
pub const COPIED: &str = "Skopiowano do schowka!";

/// System clipboard
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Clipboard: Send + Sync {
    /// Replace the clipboard contents
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// In-process clipboard for headless runs
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: parking_lot::Mutex<Option<String>>,
}

impl MemoryClipboard {
    /// Empty clipboard
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last copied text
    #[must_use]
    pub fn contents(&self) -> Option<String> {
        self.contents.lock().clone()
    }
}

#[async_trait]
impl Clipboard for MemoryClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        *self.contents.lock() = Some(text.to_string());
        Ok(())
    }
}

/// Copyable contact link
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactLink {
    /// `mailto:` address
    Email(String),
    /// `tel:` number
    Phone(String),
}

impl ContactLink {
    /// Parse an `href`; other schemes are not copyable
    #[must_use]
    pub fn parse(href: &str) -> Option<Self> {
        if let Some(address) = href.strip_prefix("mailto:") {
            let address = address.split('?').next().unwrap_or_default();
            (!address.is_empty()).then(|| ContactLink::Email(address.to_string()))
        } else {
            href.strip_prefix("tel:")
                .filter(|n| !n.is_empty())
                .map(|n| ContactLink::Phone(n.to_string()))
        }
    }

    /// Text placed in the clipboard
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            ContactLink::Email(s) | ContactLink::Phone(s) => s,
        }
    }

    /// Success toast text
    #[must_use]
    pub fn copied_message(&self) -> &'static str {
        match self {
            ContactLink::Email(_) => "Email skopiowany do schowka!",
            ContactLink::Phone(_) => "Telefon skopiowany do schowka!",
        }
    }
}

/// Copy a contact link and notify; `None` for non-contact links
pub async fn copy_contact(
    clipboard: &dyn Clipboard,
    center: &NotificationCenter,
    href: &str,
) -> Option<ToastId> {
    let link = ContactLink::parse(href)?;
    Some(copy_with_message(clipboard, center, link.text(), link.copied_message()).await)
}

/// Copy arbitrary text and notify
pub async fn copy_text(
    clipboard: &dyn Clipboard,
    center: &NotificationCenter,
    text: &str,
) -> ToastId {
    copy_with_message(clipboard, center, text, COPIED).await
}

async fn copy_with_message(
    clipboard: &dyn Clipboard,
    center: &NotificationCenter,
    text: &str,
    success: &str,
) -> ToastId {
    match clipboard.write_text(text).await {
        Ok(()) => center.success(success),
        Err(e) => {
            tracing::warn!(error = %e, "clipboard write failed");
            center.error(COPY_FAILED)
        }
    }
}
