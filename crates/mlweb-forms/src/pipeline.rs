//! Form submission pipeline
//!
//! Validation -> submission -> result notification -> reset -> draft cleanup.
//!
//! # Workflow
//! 1. Ignore the gesture if the submit button is disabled (advisory lock)
//! 2. Validate; on failure flag fields, show the error toast, back to idle
//! 3. Put the button in its loading state and await the `Submitter`
//! 4. Restore the button; on success show the per-type message, clear the
//!    fields and schedule draft deletion
//!
//! The form lock is never held across an await, so handlers can observe the
//! loading state while a submission is in flight.

use crate::draft::DraftStore;
use crate::enhance;
use crate::error::{FormError, SubmitError};
use crate::form::{Form, FormHandle, FormType, Submission};
use crate::state::FormState;
use crate::submit::{Receipt, Submitter};
use crate::validation::{validate, ValidationError};
use mlweb_core::SiteConfig;
use mlweb_notify::NotificationCenter;
use parking_lot::MutexGuard;
use std::fmt;
use std::sync::Arc;
use tokio::runtime::Handle;

/// Result of a submit gesture
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation rejected the form
    Rejected(ValidationError),
    /// A submission was already in flight
    Ignored,
    /// Backend accepted the submission
    Sent {
        /// Success message shown to the user
        message: String,
        /// Backend acknowledgement
        receipt: Receipt,
    },
    /// Backend refused the submission; fields are kept
    Failed(SubmitError),
}

impl SubmitOutcome {
    /// Check if the data reached the backend
    #[inline]
    #[must_use]
    pub fn is_sent(&self) -> bool {
        matches!(self, Self::Sent { .. })
    }
}

/// Submission pipeline shared by every contact form
#[derive(Clone)]
pub struct FormPipeline {
    config: Arc<SiteConfig>,
    notifier: NotificationCenter,
    submitter: Arc<dyn Submitter>,
    drafts: Option<DraftStore>,
    runtime: Handle,
}

impl fmt::Debug for FormPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormPipeline")
            .field("drafts", &self.drafts.is_some())
            .field("autosave", &self.config.autosave_drafts)
            .finish_non_exhaustive()
    }
}

impl FormPipeline {
    /// Create pipeline on the given runtime
    #[must_use]
    pub fn new(
        config: Arc<SiteConfig>,
        notifier: NotificationCenter,
        submitter: Arc<dyn Submitter>,
        runtime: Handle,
    ) -> Self {
        Self {
            config,
            notifier,
            submitter,
            drafts: None,
            runtime,
        }
    }

    /// With draft autosave backed by `drafts`
    #[must_use]
    pub fn with_drafts(mut self, drafts: DraftStore) -> Self {
        self.drafts = Some(drafts);
        self
    }

    /// Draft store, if autosave is attached
    #[inline]
    #[must_use]
    pub fn drafts(&self) -> Option<&DraftStore> {
        self.drafts.as_ref()
    }

    /// Notification center used for results
    #[inline]
    #[must_use]
    pub fn notifier(&self) -> &NotificationCenter {
        &self.notifier
    }

    fn autosave(&self) -> Option<&DraftStore> {
        self.drafts.as_ref().filter(|_| self.config.autosave_drafts)
    }

    /// Restore the stored draft into a freshly initialized form
    ///
    /// Values that reveal extra project fields bring those fields back too.
    /// Storage failures are reported as an error toast and leave the form
    /// untouched.
    pub fn restore_draft(&self, form: &FormHandle) -> usize {
        let Some(drafts) = self.autosave() else {
            return 0;
        };
        let mut form = form.lock();
        let restored = drafts.restore(&mut form).and_then(|restored| {
            if restored == 0 || *form.form_type() != FormType::Project {
                return Ok(restored);
            }
            let before = form.fields().count();
            enhance::on_field_changed(&mut form, enhance::PROJECT_TYPE_FIELD);
            if form.fields().count() == before {
                return Ok(restored);
            }
            drafts.restore(&mut form)
        });
        match restored {
            Ok(restored) => restored,
            Err(e) => {
                tracing::warn!(form = %form.form_type(), error = %e, "draft restore failed");
                drop(form);
                self.notifier.error(self.config.storage_error_message.clone());
                0
            }
        }
    }

    /// A field changed: format and store it, update dependent fields, save
    /// the draft
    ///
    /// # Errors
    /// - `FormError::UnknownField` if the form has no such field
    pub fn on_input(
        &self,
        form: &FormHandle,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), FormError> {
        let mut form = form.lock();
        let kind = form
            .field(name)
            .map(|field| field.kind)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))?;
        form.set_value(name, enhance::format_input(kind, value.into()))?;
        enhance::on_field_changed(&mut form, name);
        self.save_draft(form);
        Ok(())
    }

    /// A field lost focus: complete URLs and save the draft if that changed
    /// the value
    ///
    /// # Errors
    /// - `FormError::UnknownField` if the form has no such field
    pub fn on_blur(&self, form: &FormHandle, name: &str) -> Result<(), FormError> {
        let mut form = form.lock();
        let field = form
            .field(name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))?;
        if let Some(completed) = enhance::complete_on_blur(field.kind, &field.value) {
            tracing::debug!(form = %form.form_type(), field = name, "value completed");
            form.set_value(name, completed)?;
            self.save_draft(form);
        }
        Ok(())
    }

    fn save_draft(&self, form: MutexGuard<'_, Form>) {
        let Some(drafts) = self.autosave() else {
            return;
        };
        if let Err(e) = drafts.save(&form) {
            tracing::warn!(form = %form.form_type(), error = %e, "draft save failed");
            drop(form);
            self.notifier.error(self.config.storage_error_message.clone());
        }
    }

    /// Handle a submit gesture
    pub async fn on_submit(&self, form: &FormHandle) -> SubmitOutcome {
        match self.run(form).await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::warn!(error = %e, "submit aborted");
                SubmitOutcome::Ignored
            }
        }
    }

    async fn run(&self, handle: &FormHandle) -> Result<SubmitOutcome, FormError> {
        let submission = {
            let mut form = handle.lock();
            if form.button().is_disabled() || form.state() != FormState::Idle {
                tracing::debug!(form = %form.form_type(), "submit ignored, already in flight");
                return Ok(SubmitOutcome::Ignored);
            }

            form.transition(FormState::Validating)?;
            if let Err(rejection) = validate(&mut form) {
                form.transition(FormState::Invalid)?;
                form.transition(FormState::Idle)?;
                drop(form);
                self.notifier.error(self.config.validation_error_message.clone());
                return Ok(SubmitOutcome::Rejected(rejection));
            }

            form.transition(FormState::Submitting)?;
            form.button_mut().begin_loading(&self.config.loading_text);
            Submission::from_form(&form)
        };

        let result = self.submitter.submit(&submission).await;

        let mut form = handle.lock();
        form.button_mut().finish_loading();
        form.transition(FormState::Idle)?;

        match result {
            Ok(receipt) => {
                let form_type = form.form_type().clone();
                let message = self.config.success_message(form_type.as_str()).to_string();
                form.reset();
                drop(form);

                self.notifier.success(message.clone());
                tracing::info!(form = %form_type, reference = %receipt.reference, "submission accepted");
                self.schedule_draft_clear(form_type);

                Ok(SubmitOutcome::Sent { message, receipt })
            }
            Err(e) => {
                drop(form);
                tracing::warn!(form = %submission.form_type, error = %e, "submission failed");
                self.notifier.error(self.config.submit_error_message.clone());
                Ok(SubmitOutcome::Failed(e))
            }
        }
    }

    fn schedule_draft_clear(&self, form_type: FormType) {
        let Some(drafts) = self.autosave().cloned() else {
            return;
        };
        let delay = self.config.draft_clear_delay();
        self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            match drafts.clear(&form_type) {
                Ok(()) => tracing::debug!(form = %form_type, "draft cleared"),
                Err(e) => tracing::warn!(form = %form_type, error = %e, "draft clear failed"),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Field;
    use crate::submit::MockSubmitter;
    use mlweb_notify::{Kind, NotificationSink, Toast, ToastId};

    #[derive(Debug, Default)]
    struct Shown(parking_lot::Mutex<Vec<(String, Kind)>>);

    impl NotificationSink for Shown {
        fn show(&self, toast: &Toast) {
            self.0.lock().push((toast.message.clone(), toast.kind));
        }
        fn exit(&self, _id: ToastId) {}
        fn remove(&self, _id: ToastId) {}
    }

    fn pipeline(submitter: MockSubmitter) -> (FormPipeline, Arc<Shown>) {
        let shown = Arc::new(Shown::default());
        let config = Arc::new(SiteConfig::new());
        let notifier = NotificationCenter::new(config.notifications, shown.clone()).unwrap();
        let pipeline = FormPipeline::new(config, notifier, Arc::new(submitter), Handle::current());
        (pipeline, shown)
    }

    fn general() -> FormHandle {
        Form::new(FormType::General)
            .with_field(Field::text("name").required().with_value("Ala"))
            .with_field(Field::email("email").required().with_value("ala@firma.pl"))
            .into_handle()
    }

    #[tokio::test]
    async fn invalid_form_never_reaches_submitter() {
        let mut submitter = MockSubmitter::new();
        submitter.expect_submit().never();
        let (pipeline, shown) = pipeline(submitter);

        let form = general();
        form.lock().set_value("email", "nope").unwrap();

        let outcome = pipeline.on_submit(&form).await;
        assert!(matches!(outcome, SubmitOutcome::Rejected(ref e) if e.contains("email")));
        assert_eq!(form.lock().state(), FormState::Idle);
        assert_eq!(shown.0.lock()[0].1, Kind::Error);
    }

    #[tokio::test]
    async fn backend_failure_keeps_fields() {
        let mut submitter = MockSubmitter::new();
        submitter
            .expect_submit()
            .times(1)
            .returning(|_| Err(SubmitError::Unavailable("502".to_string())));
        let (pipeline, shown) = pipeline(submitter);

        let form = general();
        let outcome = pipeline.on_submit(&form).await;

        assert!(matches!(outcome, SubmitOutcome::Failed(_)));
        let form = form.lock();
        assert_eq!(form.value("name"), Some("Ala"));
        assert!(!form.button().is_disabled());
        assert_eq!(form.state(), FormState::Idle);
        assert_eq!(shown.0.lock().last().unwrap().1, Kind::Error);
    }

    #[tokio::test]
    async fn submitter_sees_form_data() {
        let mut submitter = MockSubmitter::new();
        submitter
            .expect_submit()
            .withf(|s: &Submission| s.form_type == FormType::General && s.data["name"] == "Ala")
            .times(1)
            .returning(|_| Ok(Receipt::now()));
        let (pipeline, _shown) = pipeline(submitter);

        let form = general();
        let outcome = pipeline.on_submit(&form).await;
        assert!(outcome.is_sent());
        assert!(form.lock().is_empty());
    }

    #[tokio::test]
    async fn disabled_button_ignores_submit() {
        let mut submitter = MockSubmitter::new();
        submitter.expect_submit().never();
        let (pipeline, _shown) = pipeline(submitter);

        let form = general();
        form.lock().button_mut().begin_loading("...");

        assert_eq!(pipeline.on_submit(&form).await, SubmitOutcome::Ignored);
    }

    #[tokio::test]
    async fn optional_phone_is_formatted_not_checked() {
        let mut submitter = MockSubmitter::new();
        submitter
            .expect_submit()
            .withf(|s: &Submission| s.data["phone"] == "+48123")
            .times(1)
            .returning(|_| Ok(Receipt::now()));
        let (pipeline, _shown) = pipeline(submitter);

        let form = general();
        form.lock().add_field(Field::tel("phone"));
        pipeline.on_input(&form, "phone", "123").unwrap();
        assert_eq!(form.lock().value("phone"), Some("+48123"));

        assert!(pipeline.on_submit(&form).await.is_sent());
    }

    #[tokio::test]
    async fn blur_completes_url_only() {
        let mut submitter = MockSubmitter::new();
        submitter.expect_submit().never();
        let (pipeline, _shown) = pipeline(submitter);

        let form = Form::new(FormType::Audit)
            .with_field(Field::url("website"))
            .with_field(Field::text("name"))
            .into_handle();
        pipeline.on_input(&form, "website", "mlweb.pl").unwrap();
        pipeline.on_input(&form, "name", "mlweb.pl").unwrap();
        pipeline.on_blur(&form, "website").unwrap();
        pipeline.on_blur(&form, "name").unwrap();

        let locked = form.lock();
        assert_eq!(locked.value("website"), Some("https://mlweb.pl"));
        assert_eq!(locked.value("name"), Some("mlweb.pl"));
        drop(locked);
        assert!(matches!(
            pipeline.on_blur(&form, "nip"),
            Err(FormError::UnknownField(_))
        ));
    }
}
