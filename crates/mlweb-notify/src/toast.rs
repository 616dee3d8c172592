//! Toast value types

use crate::kind::Kind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Unique toast identifier (ULID for sortability)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ToastId(pub Ulid);

impl ToastId {
    /// Generate new toast ID
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ToastId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A notification shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    /// Identifier
    pub id: ToastId,
    /// Text shown to the user
    pub message: String,
    /// Kind, drives icon and colours
    pub kind: Kind,
    /// Creation time
    pub created_at: DateTime<Utc>,
}

impl Toast {
    /// Create a toast stamped with the current time
    #[must_use]
    pub fn new(message: impl Into<String>, kind: Kind) -> Self {
        Self {
            id: ToastId::new(),
            message: message.into(),
            kind,
            created_at: Utc::now(),
        }
    }

    /// CSS class list of the rendered element
    #[must_use]
    pub fn css_class(&self) -> String {
        format!("notification notification-{}", self.kind.as_str())
    }

    /// Icon plus message, as a plain-text renderer would show it
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} {}", self.kind.icon(), self.message)
    }
}

/// Where a toast is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    /// Attached and idle
    Visible,
    /// Exit animation running, detaches when it ends
    Exiting,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_class_carries_kind() {
        let toast = Toast::new("Zapisano", Kind::Warning);
        assert_eq!(toast.css_class(), "notification notification-warning");
        assert!(toast.label().starts_with("⚠️"));
    }

    #[test]
    fn ids_are_unique() {
        let a = Toast::new("a", Kind::Info);
        let b = Toast::new("a", Kind::Info);
        assert_ne!(a.id, b.id);
    }
}
