//! Form model
//!
//! A form is an ordered set of named fields, a submit button and a
//! submission state. It stands in for the `<form>` element: values, error
//! flags and the button's loading state all live here so that any renderer
//! can mirror them.

use crate::error::FormError;
use crate::field::Field;
use crate::state::{validate_transition, FormState};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Identifier of a contact form, selects its success message and draft key
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FormType {
    /// General enquiry
    General,
    /// Project quote
    Project,
    /// Free website audit
    Audit,
    /// Any other form
    Other(String),
}

impl FormType {
    /// Name used in storage keys and message tables
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            FormType::General => "general",
            FormType::Project => "project",
            FormType::Audit => "audit",
            FormType::Other(name) => name,
        }
    }
}

impl fmt::Display for FormType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for FormType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "general" => FormType::General,
            "project" => FormType::Project,
            "audit" => FormType::Audit,
            _ => FormType::Other(value),
        }
    }
}

impl From<&str> for FormType {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<FormType> for String {
    fn from(value: FormType) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for FormType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

/// Submit button state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitButton {
    label: String,
    saved_label: Option<String>,
    disabled: bool,
}

impl SubmitButton {
    /// Create an enabled button
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            saved_label: None,
            disabled: false,
        }
    }

    /// Current text
    #[inline]
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Interaction blocked
    #[inline]
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Showing the loading state
    #[inline]
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.saved_label.is_some()
    }

    /// Swap in the loading text and block interaction
    pub fn begin_loading(&mut self, text: &str) {
        if self.saved_label.is_none() {
            self.saved_label = Some(std::mem::replace(&mut self.label, text.to_string()));
        }
        self.disabled = true;
    }

    /// Restore the original text and unblock
    pub fn finish_loading(&mut self) {
        if let Some(label) = self.saved_label.take() {
            self.label = label;
        }
        self.disabled = false;
    }
}

impl Default for SubmitButton {
    fn default() -> Self {
        Self::new("Wyślij")
    }
}

/// A contact form
#[derive(Debug, Clone)]
pub struct Form {
    form_type: FormType,
    fields: IndexMap<String, Field>,
    button: SubmitButton,
    state: FormState,
}

/// Form shared between the pipeline and event handlers
pub type FormHandle = Arc<parking_lot::Mutex<Form>>;

impl Form {
    /// Create an empty form
    #[must_use]
    pub fn new(form_type: impl Into<FormType>) -> Self {
        Self {
            form_type: form_type.into(),
            fields: IndexMap::new(),
            button: SubmitButton::default(),
            state: FormState::Idle,
        }
    }

    /// With field appended (ignored if the name is taken)
    #[must_use]
    pub fn with_field(mut self, field: Field) -> Self {
        self.add_field(field);
        self
    }

    /// With submit button text
    #[must_use]
    pub fn with_button(mut self, label: impl Into<String>) -> Self {
        self.button = SubmitButton::new(label);
        self
    }

    /// Wrap for sharing
    #[must_use]
    pub fn into_handle(self) -> FormHandle {
        Arc::new(parking_lot::Mutex::new(self))
    }

    /// Append a field unless one with that name exists; returns whether it was added
    pub fn add_field(&mut self, field: Field) -> bool {
        if self.fields.contains_key(&field.name) {
            return false;
        }
        self.fields.insert(field.name.clone(), field);
        true
    }

    /// Form type
    #[inline]
    #[must_use]
    pub fn form_type(&self) -> &FormType {
        &self.form_type
    }

    /// Field by name
    #[inline]
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    /// Mutable field by name
    #[inline]
    pub fn field_mut(&mut self, name: &str) -> Option<&mut Field> {
        self.fields.get_mut(name)
    }

    /// Fields in document order
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.values()
    }

    /// Mutable fields in document order
    pub fn fields_mut(&mut self) -> impl Iterator<Item = &mut Field> {
        self.fields.values_mut()
    }

    /// Value of a field
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(|f| f.value.as_str())
    }

    /// Set a field value
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) -> Result<(), FormError> {
        let field = self
            .fields
            .get_mut(name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))?;
        field.value = value.into();
        Ok(())
    }

    /// Field name to value, in document order
    #[must_use]
    pub fn values(&self) -> IndexMap<String, String> {
        self.fields
            .iter()
            .map(|(name, field)| (name.clone(), field.value.clone()))
            .collect()
    }

    /// Names of fields currently flagged
    #[must_use]
    pub fn flagged(&self) -> Vec<&str> {
        self.fields
            .values()
            .filter(|f| f.flagged)
            .map(|f| f.name.as_str())
            .collect()
    }

    /// Clear every flag
    pub fn clear_flags(&mut self) {
        for field in self.fields.values_mut() {
            field.flagged = false;
        }
    }

    /// Empty every field and clear flags
    pub fn reset(&mut self) {
        for field in self.fields.values_mut() {
            field.value.clear();
            field.flagged = false;
        }
    }

    /// Check if every field is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.values().all(|f| f.value.is_empty())
    }

    /// Submit button
    #[inline]
    #[must_use]
    pub fn button(&self) -> &SubmitButton {
        &self.button
    }

    /// Mutable submit button
    #[inline]
    pub fn button_mut(&mut self) -> &mut SubmitButton {
        &mut self.button
    }

    /// Submission state
    #[inline]
    #[must_use]
    pub fn state(&self) -> FormState {
        self.state
    }

    /// Move to another state
    pub fn transition(&mut self, to: FormState) -> Result<(), FormError> {
        validate_transition(self.state, to)?;
        tracing::trace!(form = %self.form_type, from = ?self.state, ?to, "form state");
        self.state = to;
        Ok(())
    }
}

/// Data handed to a `Submitter`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    /// Form the data came from
    #[serde(rename = "formType")]
    pub form_type: FormType,
    /// Field name to value
    pub data: IndexMap<String, String>,
    /// When the user submitted
    pub submitted_at: DateTime<Utc>,
}

impl Submission {
    /// Snapshot a form
    #[must_use]
    pub fn from_form(form: &Form) -> Self {
        Self {
            form_type: form.form_type().clone(),
            data: form.values(),
            submitted_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn form() -> Form {
        Form::new(FormType::General)
            .with_field(Field::text("name").required())
            .with_field(Field::email("email").required())
            .with_field(Field::textarea("message"))
    }

    #[test]
    fn form_type_from_name() {
        assert_eq!(FormType::from("audit"), FormType::Audit);
        assert_eq!(
            FormType::from("newsletter"),
            FormType::Other("newsletter".to_string())
        );
        assert_eq!(FormType::Project.to_string(), "project");
    }

    #[test]
    fn set_unknown_field_fails() {
        let mut form = form();
        assert!(form.set_value("name", "Ala").is_ok());
        assert!(matches!(
            form.set_value("nip", "1"),
            Err(FormError::UnknownField(_))
        ));
    }

    #[test]
    fn reset_empties_values_and_flags() {
        let mut form = form();
        form.set_value("name", "Ala").unwrap();
        form.field_mut("email").unwrap().flagged = true;

        form.reset();
        assert!(form.is_empty());
        assert!(form.flagged().is_empty());
    }

    #[test]
    fn button_loading_restores_label() {
        let mut button = SubmitButton::new("Wyślij zapytanie");
        button.begin_loading("Wysyłanie...");
        button.begin_loading("Wysyłanie...");
        assert_eq!(button.label(), "Wysyłanie...");
        assert!(button.is_disabled());
        assert!(button.is_loading());

        button.finish_loading();
        assert_eq!(button.label(), "Wyślij zapytanie");
        assert!(!button.is_disabled());
    }

    #[test]
    fn add_field_keeps_existing() {
        let mut form = form();
        form.set_value("message", "hej").unwrap();
        assert!(!form.add_field(Field::textarea("message")));
        assert_eq!(form.value("message"), Some("hej"));
    }

    #[test]
    fn submission_serializes_form_type() {
        let mut form = form();
        form.set_value("name", "Ala").unwrap();
        let submission = Submission::from_form(&form);

        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(json["formType"], "general");
        assert_eq!(json["data"]["name"], "Ala");
    }
}
