//! Form drafts in local storage
//!
//! A draft is the JSON map of field name to value, stored under
//! `{namespace}_form_{formType}`. Written on every input, restored when the
//! form is initialized, deleted a fixed delay after a successful submission.

use crate::form::{Form, FormType};
use indexmap::IndexMap;
use mlweb_core::{KeyValueStore, SiteConfig, StorageError};
use std::sync::Arc;

/// Unsubmitted field values of one form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    /// Form the values belong to
    pub form_type: FormType,
    /// Field name to value
    pub fields: IndexMap<String, String>,
}

impl Draft {
    /// Snapshot a form
    #[must_use]
    pub fn from_form(form: &Form) -> Self {
        Self {
            form_type: form.form_type().clone(),
            fields: form.values(),
        }
    }
}

/// Draft persistence on top of a key/value store
#[derive(Debug, Clone)]
pub struct DraftStore {
    store: Arc<dyn KeyValueStore>,
    config: Arc<SiteConfig>,
}

impl DraftStore {
    /// Create draft store
    #[inline]
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>, config: Arc<SiteConfig>) -> Self {
        Self { store, config }
    }

    /// Storage key of a form type
    #[inline]
    #[must_use]
    pub fn key(&self, form_type: &FormType) -> String {
        self.config.draft_key(form_type.as_str())
    }

    /// Persist the current values of a form
    pub fn save(&self, form: &Form) -> Result<(), StorageError> {
        let draft = Draft::from_form(form);
        let key = self.key(&draft.form_type);
        let json = serde_json::to_string(&draft.fields)
            .map_err(|source| StorageError::Corrupt { key: key.clone(), source })?;
        self.store.set(&key, &json)
    }

    /// Read the stored draft of a form type
    pub fn load(&self, form_type: &FormType) -> Result<Option<Draft>, StorageError> {
        let key = self.key(form_type);
        let Some(json) = self.store.get(&key)? else {
            return Ok(None);
        };
        let fields: IndexMap<String, String> =
            serde_json::from_str(&json).map_err(|source| StorageError::Corrupt { key, source })?;
        Ok(Some(Draft {
            form_type: form_type.clone(),
            fields,
        }))
    }

    /// Copy stored non-empty values into matching fields
    ///
    /// Returns the number of fields restored.
    pub fn restore(&self, form: &mut Form) -> Result<usize, StorageError> {
        let Some(draft) = self.load(form.form_type())? else {
            return Ok(0);
        };

        let mut restored = 0;
        for (name, value) in draft.fields {
            if value.is_empty() {
                continue;
            }
            if let Some(field) = form.field_mut(&name) {
                field.value = value;
                restored += 1;
            }
        }

        tracing::debug!(form = %form.form_type(), restored, "draft restored");
        Ok(restored)
    }

    /// Delete the draft of a form type
    pub fn clear(&self, form_type: &FormType) -> Result<(), StorageError> {
        self.store.remove(&self.key(form_type))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Field;
    use mlweb_core::MemoryStore;
    use pretty_assertions::assert_eq;

    fn drafts() -> (DraftStore, Arc<MemoryStore>) {
        let memory = Arc::new(MemoryStore::new());
        let drafts = DraftStore::new(memory.clone(), Arc::new(SiteConfig::new()));
        (drafts, memory)
    }

    fn audit() -> Form {
        Form::new(FormType::Audit)
            .with_field(Field::url("website").required())
            .with_field(Field::email("email").required())
    }

    #[test]
    fn save_uses_namespaced_key() {
        let (drafts, memory) = drafts();
        let mut form = audit();
        form.set_value("email", "a@b.pl").unwrap();
        drafts.save(&form).unwrap();

        let raw = memory.get("mlweb_form_audit").unwrap().unwrap();
        assert_eq!(raw, r#"{"website":"","email":"a@b.pl"}"#);
    }

    #[test]
    fn restore_skips_empty_and_unknown() {
        let (drafts, memory) = drafts();
        memory
            .set(
                "mlweb_form_audit",
                r#"{"website":"","email":"a@b.pl","gone":"x"}"#,
            )
            .unwrap();

        let mut form = audit();
        let restored = drafts.restore(&mut form).unwrap();
        assert_eq!(restored, 1);
        assert_eq!(form.value("email"), Some("a@b.pl"));
    }

    #[test]
    fn corrupt_draft_is_an_error() {
        let (drafts, memory) = drafts();
        memory.set("mlweb_form_audit", "{oops").unwrap();
        let result = drafts.load(&FormType::Audit);
        assert!(matches!(result, Err(StorageError::Corrupt { .. })));
    }

    #[test]
    fn clear_removes_key() {
        let (drafts, memory) = drafts();
        drafts.save(&audit()).unwrap();
        drafts.clear(&FormType::Audit).unwrap();
        assert!(memory.is_empty());
        assert!(drafts.load(&FormType::Audit).unwrap().is_none());
    }
}
