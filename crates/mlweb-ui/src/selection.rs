//! Exclusive selections
//!
//! Form tabs, portfolio filter buttons and the language switcher each have
//! exactly one active option. The FAQ accordion has at most one.

use crate::error::UiError;

/// Group of options with exactly one active
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<T> {
    options: Vec<T>,
    active: usize,
}

impl<T: PartialEq + Clone> Selection<T> {
    /// Create with the first option active
    ///
    /// # Errors
    /// - `UiError::EmptySelection` when `options` is empty
    pub fn new(options: Vec<T>) -> Result<Self, UiError> {
        if options.is_empty() {
            return Err(UiError::EmptySelection);
        }
        Ok(Self { options, active: 0 })
    }

    /// Active option
    #[inline]
    #[must_use]
    pub fn active(&self) -> &T {
        &self.options[self.active]
    }

    /// Index of the active option
    #[inline]
    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// All options in order
    #[inline]
    #[must_use]
    pub fn options(&self) -> &[T] {
        &self.options
    }

    /// Check if `option` is the active one
    #[must_use]
    pub fn is_active(&self, option: &T) -> bool {
        self.active() == option
    }

    /// Activate an option; unknown options leave the selection unchanged
    pub fn select(&mut self, option: &T) -> bool {
        match self.options.iter().position(|o| o == option) {
            Some(idx) => {
                self.active = idx;
                true
            }
            None => false,
        }
    }

    /// Activate by position
    pub fn select_index(&mut self, idx: usize) -> bool {
        if idx < self.options.len() {
            self.active = idx;
            true
        } else {
            false
        }
    }
}

/// Accordion with at most one open item
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Accordion {
    len: usize,
    open: Option<usize>,
}

impl Accordion {
    /// Accordion of `len` closed items
    #[inline]
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { len, open: None }
    }

    /// Currently open item
    #[inline]
    #[must_use]
    pub fn open_item(&self) -> Option<usize> {
        self.open
    }

    /// Question clicked: closes everything, then opens it unless it was open
    pub fn toggle(&mut self, idx: usize) {
        if idx >= self.len {
            return;
        }
        self.open = if self.open == Some(idx) { None } else { Some(idx) };
    }
}
