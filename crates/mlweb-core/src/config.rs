//! Site configuration
//!
//! Holds every fixed delay, storage key and user-facing message the
//! enhancement layer uses. Defaults match the production site; a TOML file
//! may override any subset.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

/// Notification timings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationTimings {
    /// Time a toast stays up before dismissing itself
    pub auto_dismiss_ms: u64,
    /// Exit animation length before detachment
    pub exit_animation_ms: u64,
}

impl NotificationTimings {
    /// Auto-dismiss delay
    #[inline]
    #[must_use]
    pub fn auto_dismiss(&self) -> Duration {
        Duration::from_millis(self.auto_dismiss_ms)
    }

    /// Exit animation length
    #[inline]
    #[must_use]
    pub fn exit_animation(&self) -> Duration {
        Duration::from_millis(self.exit_animation_ms)
    }
}

impl Default for NotificationTimings {
    fn default() -> Self {
        Self {
            auto_dismiss_ms: 5000,
            exit_animation_ms: 300,
        }
    }
}

/// Site configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Prefix for draft storage keys
    pub namespace: String,
    /// Storage key of the language preference
    pub language_key: String,
    /// Languages offered by the switcher, first is the default
    pub languages: Vec<String>,
    /// Toast timings
    pub notifications: NotificationTimings,
    /// Simulated round trip of a form submission
    pub submit_delay_ms: u64,
    /// Delay between a successful submission and draft deletion
    pub draft_clear_delay_ms: u64,
    /// Debounce window of the portfolio search box
    pub search_debounce_ms: u64,
    /// Whether drafts are autosaved
    pub autosave_drafts: bool,
    /// Submit button text while a submission is in flight
    pub loading_text: String,
    /// Error shown when validation rejects a form
    pub validation_error_message: String,
    /// Error shown when the backend rejects a submission
    pub submit_error_message: String,
    /// Error shown when local storage refuses a draft
    pub storage_error_message: String,
    /// Success message per form type
    pub success_messages: BTreeMap<String, String>,
    /// Success message for form types missing from the table
    pub default_success_message: String,
}

impl SiteConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With storage namespace
    #[inline]
    #[must_use]
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// With submission delay
    #[inline]
    #[must_use]
    pub fn with_submit_delay(mut self, delay: Duration) -> Self {
        self.submit_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// With notification timings
    #[inline]
    #[must_use]
    pub fn with_notifications(mut self, timings: NotificationTimings) -> Self {
        self.notifications = timings;
        self
    }

    /// With draft autosave switched on or off
    #[inline]
    #[must_use]
    pub fn with_autosave(mut self, enabled: bool) -> Self {
        self.autosave_drafts = enabled;
        self
    }

    /// Parse from TOML text, filling gaps with defaults
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded site config");
        Ok(config)
    }

    /// Reject values the runtime cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.namespace.trim().is_empty() {
            return Err(ConfigError::Invalid("namespace must not be empty".to_string()));
        }
        if self.languages.is_empty() {
            return Err(ConfigError::Invalid(
                "at least one language is required".to_string(),
            ));
        }
        if self.notifications.auto_dismiss_ms == 0 {
            return Err(ConfigError::Invalid(
                "auto_dismiss_ms must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Storage key holding the draft of a form type
    #[inline]
    #[must_use]
    pub fn draft_key(&self, form_type: &str) -> String {
        format!("{}_form_{}", self.namespace, form_type)
    }

    /// Success message for a form type
    #[must_use]
    pub fn success_message(&self, form_type: &str) -> &str {
        self.success_messages
            .get(form_type)
            .map_or(self.default_success_message.as_str(), String::as_str)
    }

    /// Simulated submission delay
    #[inline]
    #[must_use]
    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    /// Draft deletion delay
    #[inline]
    #[must_use]
    pub fn draft_clear_delay(&self) -> Duration {
        Duration::from_millis(self.draft_clear_delay_ms)
    }

    /// Search debounce window
    #[inline]
    #[must_use]
    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    /// Default language
    #[must_use]
    pub fn default_language(&self) -> &str {
        self.languages.first().map_or("pl", String::as_str)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        let success_messages = [
            ("general", "Dziękuję za wiadomość! Odpowiemy w ciągu 2h."),
            ("project", "Dziękuję za zapytanie! Przygotujemy wycenę w 24h."),
            (
                "audit",
                "Dziękuję! Audyt zostanie wysłany w ciągu 24h na podany email.",
            ),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        Self {
            namespace: "mlweb".to_string(),
            language_key: "selectedLanguage".to_string(),
            languages: vec!["pl".to_string(), "en".to_string()],
            notifications: NotificationTimings::default(),
            submit_delay_ms: 2000,
            draft_clear_delay_ms: 3000,
            search_debounce_ms: 300,
            autosave_drafts: true,
            loading_text: "Wysyłanie...".to_string(),
            validation_error_message: "Proszę wypełnić wszystkie wymagane pola".to_string(),
            submit_error_message: "Nie udało się wysłać wiadomości. Spróbuj ponownie."
                .to_string(),
            storage_error_message: "Nie udało się zapisać szkicu formularza".to_string(),
            success_messages,
            default_success_message: "Wiadomość została wysłana!".to_string(),
        }
    }
}
