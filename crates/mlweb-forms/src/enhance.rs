//! Field enhancements of the contact page
//!
//! Input-time helpers: phone formatting, URL completion, character counters,
//! description suggestions and progressive disclosure of the project form.

use crate::field::{Field, FieldKind};
use crate::form::{Form, FormType};

/// Country prefix added to bare phone numbers
pub const DEFAULT_COUNTRY_CODE: &str = "48";

/// Remaining characters below which the counter turns red
pub const COUNTER_WARNING_THRESHOLD: usize = 50;

/// Budget lower bound from which extra project fields appear
pub const DISCLOSURE_BUDGET: u32 = 3000;

/// Project form: type select
pub const PROJECT_TYPE_FIELD: &str = "type";

/// Project form: budget select
pub const BUDGET_FIELD: &str = "budget";

/// Project form: description textarea
pub const DESCRIPTION_FIELD: &str = "description";

/// Normalize a phone number while typing
///
/// Non-digits are stripped; numbers starting with the country code get a
/// `+`, any other non-empty number gets `+48`.
#[must_use]
pub fn format_phone(input: &str) -> String {
    let digits: String = input.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return digits;
    }
    if digits.starts_with(DEFAULT_COUNTRY_CODE) {
        format!("+{digits}")
    } else {
        format!("+{DEFAULT_COUNTRY_CODE}{digits}")
    }
}

/// Complete a URL on blur by adding `https://` when no scheme is given
#[must_use]
pub fn normalize_url(input: &str) -> String {
    let value = input.trim();
    if value.is_empty() || value.starts_with("http://") || value.starts_with("https://") {
        value.to_string()
    } else {
        format!("https://{value}")
    }
}

/// Character counter under a textarea
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharCounter {
    /// `"{len}/{max}"`
    pub text: String,
    /// Fewer than 50 characters left
    pub warning: bool,
}

impl CharCounter {
    /// Counter for a field with a limit
    #[must_use]
    pub fn for_field(field: &Field) -> Option<Self> {
        field.max_length.map(|max| Self::new(field.value.chars().count(), max))
    }

    /// Counter for `len` characters out of `max`
    #[must_use]
    pub fn new(len: usize, max: usize) -> Self {
        Self {
            text: format!("{len}/{max}"),
            warning: max.saturating_sub(len) < COUNTER_WARNING_THRESHOLD,
        }
    }
}

/// Description hint for a project type
#[must_use]
pub fn project_suggestion(project_type: &str) -> Option<&'static str> {
    match project_type {
        "landing" => Some(
            "Jedna strona z formularzem kontaktowym, sekcjami: o nas, usługi, kontakt. Idealna do promocji konkretnej usługi lub produktu.",
        ),
        "multilingual" => Some(
            "Strona w wielu językach z profesjonalnymi tłumaczeniami. Dobra do ekspansji zagranicznej.",
        ),
        "comprehensive" => Some(
            "Kompleksowa witryna z CMS, blogiem, galeriami. Pełna prezentacja firmy z możliwością samodzielnego zarządzania treścią.",
        ),
        "ecommerce" => Some(
            "Sklep internetowy z koszykiem, płatnościami online, zarządzaniem produktami i zamówieniami.",
        ),
        _ => None,
    }
}

/// Put the suggestion for `project_type` into the description placeholder
///
/// Only while the description is still empty. Returns whether it applied.
pub fn apply_suggestion(form: &mut Form, description_field: &str, project_type: &str) -> bool {
    let Some(suggestion) = project_suggestion(project_type) else {
        return false;
    };
    match form.field_mut(description_field) {
        Some(field) if field.is_blank() => {
            field.placeholder = Some(suggestion.to_string());
            true
        }
        _ => false,
    }
}

/// Check if the project form should reveal its extra fields
///
/// Budget values look like `"3000-5000"`; the lower bound is compared.
#[must_use]
pub fn needs_additional_fields(budget: Option<&str>, project_type: Option<&str>) -> bool {
    let large_budget = budget
        .and_then(|b| b.split('-').next())
        .and_then(|low| low.trim().parse::<u32>().ok())
        .is_some_and(|low| low >= DISCLOSURE_BUDGET);
    let complex_type = matches!(project_type, Some("comprehensive" | "ecommerce"));
    large_budget || complex_type
}

/// Extra fields revealed by progressive disclosure
#[must_use]
pub fn additional_fields() -> [Field; 2] {
    [
        Field::textarea("additional_features"),
        Field::textarea("design_preferences"),
    ]
}

/// Reveal the extra project fields when the selection calls for it
///
/// Fields are only ever added; hiding keeps their values. Returns whether
/// the extra section should be visible.
pub fn disclose_project_fields(form: &mut Form, budget_field: &str, type_field: &str) -> bool {
    let budget = form.value(budget_field).map(str::to_string);
    let project_type = form.value(type_field).map(str::to_string);
    let show = needs_additional_fields(budget.as_deref(), project_type.as_deref());
    if show {
        for field in additional_fields() {
            form.add_field(field);
        }
    }
    show
}

/// Value as stored while typing into a field of `kind`
#[must_use]
pub fn format_input(kind: FieldKind, value: String) -> String {
    match kind {
        FieldKind::Tel => format_phone(&value),
        _ => value,
    }
}

/// Value as stored when a field of `kind` loses focus
#[must_use]
pub fn complete_on_blur(kind: FieldKind, value: &str) -> Option<String> {
    match kind {
        FieldKind::Url => Some(normalize_url(value)).filter(|v| v != value),
        _ => None,
    }
}

/// Side effects of a changed field on the rest of its form
///
/// On the project form a type change updates the description hint, and a
/// type or budget change may reveal the extra fields.
pub fn on_field_changed(form: &mut Form, name: &str) {
    if *form.form_type() != FormType::Project {
        return;
    }
    if name == PROJECT_TYPE_FIELD {
        let project_type = form.value(PROJECT_TYPE_FIELD).unwrap_or_default().to_string();
        apply_suggestion(form, DESCRIPTION_FIELD, &project_type);
    }
    if name == PROJECT_TYPE_FIELD || name == BUDGET_FIELD {
        disclose_project_fields(form, BUDGET_FIELD, PROJECT_TYPE_FIELD);
    }
}
