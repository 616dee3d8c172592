//! Contact page forms
//!
//! The three tabs of the contact page: a general enquiry, a project brief
//! and a free website audit.

use crate::field::Field;
use crate::form::{Form, FormType};

/// Limit of free-text message fields
pub const MESSAGE_MAX_LENGTH: usize = 1000;

/// General enquiry
#[must_use]
pub fn general_form() -> Form {
    Form::new(FormType::General)
        .with_field(Field::text("name").required())
        .with_field(Field::email("email").required())
        .with_field(Field::tel("phone"))
        .with_field(Field::select("subject"))
        .with_field(
            Field::textarea("message")
                .required()
                .with_max_length(MESSAGE_MAX_LENGTH),
        )
}

/// Project brief with budget and timeline
#[must_use]
pub fn project_form() -> Form {
    Form::new(FormType::Project)
        .with_field(Field::text("name").required())
        .with_field(Field::email("email").required())
        .with_field(Field::tel("phone"))
        .with_field(Field::text("company"))
        .with_field(Field::select("type").required())
        .with_field(Field::select("budget").required())
        .with_field(Field::select("timeline"))
        .with_field(
            Field::textarea("description")
                .required()
                .with_max_length(MESSAGE_MAX_LENGTH),
        )
        .with_button("Wyślij zapytanie")
}

/// Free website audit request
#[must_use]
pub fn audit_form() -> Form {
    Form::new(FormType::Audit)
        .with_field(Field::url("website").required())
        .with_field(Field::email("email").required())
        .with_field(Field::text("name"))
        .with_field(Field::textarea("goals").with_max_length(MESSAGE_MAX_LENGTH))
        .with_button("Zamów audyt")
}

/// Form for a tab, `None` for unknown types
#[must_use]
pub fn form_for(form_type: &FormType) -> Option<Form> {
    match form_type {
        FormType::General => Some(general_form()),
        FormType::Project => Some(project_form()),
        FormType::Audit => Some(audit_form()),
        FormType::Other(_) => None,
    }
}

/// Tab order of the contact page
pub const TABS: [FormType; 3] = [FormType::General, FormType::Project, FormType::Audit];
