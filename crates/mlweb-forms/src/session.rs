//! One form bound to the pipeline

use crate::enhance::CharCounter;
use crate::error::FormError;
use crate::form::{Form, FormHandle};
use crate::pipeline::{FormPipeline, SubmitOutcome};

/// A form on the page together with the pipeline that drives it
#[derive(Debug, Clone)]
pub struct FormSession {
    pipeline: FormPipeline,
    form: FormHandle,
}

impl FormSession {
    /// Attach a form; the stored draft is restored immediately
    #[must_use]
    pub fn attach(pipeline: FormPipeline, form: Form) -> Self {
        let form = form.into_handle();
        pipeline.restore_draft(&form);
        Self { pipeline, form }
    }

    /// Shared form state
    #[inline]
    #[must_use]
    pub fn form(&self) -> &FormHandle {
        &self.form
    }

    /// Current value of a field
    #[must_use]
    pub fn value(&self, name: &str) -> Option<String> {
        self.form.lock().value(name).map(str::to_string)
    }

    /// Field edited
    ///
    /// # Errors
    /// - `FormError::UnknownField` if the form has no such field
    pub fn on_input(&self, name: &str, value: impl Into<String>) -> Result<(), FormError> {
        self.pipeline.on_input(&self.form, name, value)
    }

    /// Field lost focus
    ///
    /// # Errors
    /// - `FormError::UnknownField` if the form has no such field
    pub fn on_blur(&self, name: &str) -> Result<(), FormError> {
        self.pipeline.on_blur(&self.form, name)
    }

    /// Character counter of a field with a length limit
    #[must_use]
    pub fn counter(&self, name: &str) -> Option<CharCounter> {
        self.form.lock().field(name).and_then(CharCounter::for_field)
    }

    /// Submit pressed
    pub async fn on_submit(&self) -> SubmitOutcome {
        self.pipeline.on_submit(&self.form).await
    }
}
