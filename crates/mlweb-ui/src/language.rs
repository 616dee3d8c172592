//! Language switcher
//!
//! The chosen language is persisted and restored on the next visit. Only
//! languages offered by the switcher are accepted.

use crate::error::UiError;
use crate::selection::Selection;
use mlweb_core::{KeyValueStore, SiteConfig};
use std::sync::Arc;

/// Language switcher backed by storage
#[derive(Debug)]
pub struct LanguagePreference {
    store: Arc<dyn KeyValueStore>,
    key: String,
    languages: Selection<String>,
}

impl LanguagePreference {
    /// Switcher for the configured languages, first one active
    ///
    /// # Errors
    /// - `UiError::EmptySelection` when no language is configured
    pub fn new(store: Arc<dyn KeyValueStore>, config: &SiteConfig) -> Result<Self, UiError> {
        Ok(Self {
            store,
            key: config.language_key.clone(),
            languages: Selection::new(config.languages.clone())?,
        })
    }

    /// Active language
    #[inline]
    #[must_use]
    pub fn current(&self) -> &str {
        self.languages.active()
    }

    /// Offered languages
    #[inline]
    #[must_use]
    pub fn languages(&self) -> &[String] {
        self.languages.options()
    }

    /// Apply the stored language if it is offered
    ///
    /// Storage failures and unknown stored values keep the default.
    pub fn restore(&mut self) -> Option<&str> {
        let stored = match self.store.get(&self.key) {
            Ok(stored) => stored?,
            Err(e) => {
                tracing::warn!(error = %e, "language preference unreadable");
                return None;
            }
        };
        if self.languages.select(&stored) {
            tracing::debug!(language = %stored, "language restored");
            Some(self.current())
        } else {
            tracing::debug!(language = %stored, "ignoring unknown stored language");
            None
        }
    }

    /// Switch language and persist the choice
    ///
    /// # Errors
    /// - `UiError::UnsupportedLanguage` when the switcher does not offer it
    /// - `UiError::Storage` when the choice cannot be saved; the switch
    ///   still applies
    pub fn select(&mut self, language: &str) -> Result<(), UiError> {
        if !self.languages.select(&language.to_string()) {
            return Err(UiError::UnsupportedLanguage(language.to_string()));
        }
        self.store.set(&self.key, language)?;
        Ok(())
    }
}
