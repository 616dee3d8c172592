//! Form fields

use serde::{Deserialize, Serialize};

/// Input type of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Free text
    #[default]
    Text,
    /// E-mail address
    Email,
    /// Absolute URL
    Url,
    /// Phone number
    Tel,
    /// Choice from a fixed list
    Select,
    /// Multi-line text
    Textarea,
}

/// A single form field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Name, key of the submitted data
    pub name: String,
    /// Input type
    pub kind: FieldKind,
    /// Must be non-empty after trimming
    pub required: bool,
    /// Current value
    pub value: String,
    /// Character limit shown by the counter
    pub max_length: Option<usize>,
    /// Hint shown while empty
    pub placeholder: Option<String>,
    /// Marked as failing validation
    pub flagged: bool,
}

impl Field {
    /// Create an optional field
    #[must_use]
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            required: false,
            value: String::new(),
            max_length: None,
            placeholder: None,
            flagged: false,
        }
    }

    /// Optional text field
    #[inline]
    #[must_use]
    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Text)
    }

    /// Optional e-mail field
    #[inline]
    #[must_use]
    pub fn email(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Email)
    }

    /// Optional URL field
    #[inline]
    #[must_use]
    pub fn url(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Url)
    }

    /// Optional phone field
    #[inline]
    #[must_use]
    pub fn tel(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Tel)
    }

    /// Optional select field
    #[inline]
    #[must_use]
    pub fn select(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Select)
    }

    /// Optional textarea
    #[inline]
    #[must_use]
    pub fn textarea(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Textarea)
    }

    /// Mark as required
    #[inline]
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// With character limit
    #[inline]
    #[must_use]
    pub fn with_max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// With initial value
    #[inline]
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Value with surrounding whitespace removed
    #[inline]
    #[must_use]
    pub fn trimmed(&self) -> &str {
        self.value.trim()
    }

    /// Check if the trimmed value is empty
    #[inline]
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.trimmed().is_empty()
    }
}
