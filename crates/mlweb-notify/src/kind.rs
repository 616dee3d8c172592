//! Notification kinds and their visual table

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Notification kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// Operation succeeded
    Success,
    /// Operation failed
    Error,
    /// Something needs attention
    Warning,
    /// Neutral message
    #[default]
    Info,
}

/// Colours of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Background colour
    pub background: &'static str,
    /// Text colour
    pub text: &'static str,
    /// Border colour
    pub border: &'static str,
}

impl Kind {
    /// All kinds, in display order
    pub const ALL: [Kind; 4] = [Kind::Success, Kind::Error, Kind::Warning, Kind::Info];

    /// Lowercase name used in CSS classes
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Success => "success",
            Kind::Error => "error",
            Kind::Warning => "warning",
            Kind::Info => "info",
        }
    }

    /// Icon shown before the message
    #[inline]
    #[must_use]
    pub fn icon(&self) -> &'static str {
        match self {
            Kind::Success => "✅",
            Kind::Error => "❌",
            Kind::Warning => "⚠️",
            Kind::Info => "ℹ️",
        }
    }

    /// Colour table
    #[must_use]
    pub fn palette(&self) -> Palette {
        match self {
            Kind::Success => Palette {
                background: "var(--sand-primary)",
                text: "var(--dark-primary)",
                border: "var(--sand-light)",
            },
            Kind::Error => Palette {
                background: "#ff6b6b",
                text: "white",
                border: "#ff6b6b",
            },
            Kind::Warning => Palette {
                background: "#ffa726",
                text: "var(--dark-primary)",
                border: "#ffa726",
            },
            Kind::Info => Palette {
                background: "var(--dark-secondary)",
                text: "var(--text-light)",
                border: "var(--dark-secondary)",
            },
        }
    }

    /// Parse a kind name, falling back to `Info` for anything unknown
    #[must_use]
    pub fn parse_or_info(name: &str) -> Self {
        name.parse().unwrap_or(Kind::Info)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown kind name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown notification kind: {0}")]
pub struct UnknownKind(pub String);

impl FromStr for Kind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "success" => Ok(Kind::Success),
            "error" => Ok(Kind::Error),
            "warning" => Ok(Kind::Warning),
            "info" => Ok(Kind::Info),
            other => Err(UnknownKind(other.to_string())),
        }
    }
}
