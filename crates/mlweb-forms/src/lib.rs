//! MLWeb Forms - contact-form pipeline
//!
//! - Field model and validation (required, email, url, tel)
//! - Per-form state machine: idle -> validating -> submitting -> idle
//! - Draft autosave in local storage
//! - Pluggable `Submitter` with a fixed-delay simulated backend
//! - Input enhancements (phone formatting, URL completion, counters)
//!
//! # Example
//!
//! ```rust,ignore
//! use mlweb_forms::{Field, Form, FormPipeline, FormType, SimulatedSubmitter};
//!
//! # async fn example(pipeline: FormPipeline) {
//! let form = Form::new(FormType::Audit)
//!     .with_field(Field::url("website").required())
//!     .with_field(Field::email("email").required())
//!     .into_handle();
//!
//! pipeline.on_input(&form, "website", "https://mlweb.pl").unwrap();
//! pipeline.on_input(&form, "email", "jan@mlweb.pl").unwrap();
//! let outcome = pipeline.on_submit(&form).await;
//! assert!(outcome.is_sent());
//! # }
//! ```

#![warn(unreachable_pub)]

pub mod catalog;
pub mod draft;
pub mod enhance;
pub mod error;
pub mod field;
pub mod form;
pub mod pipeline;
pub mod session;
pub mod state;
pub mod submit;
pub mod validation;

pub use draft::{Draft, DraftStore};
pub use error::{FormError, SubmitError};
pub use field::{Field, FieldKind};
pub use form::{Form, FormHandle, FormType, SubmitButton, Submission};
pub use pipeline::{FormPipeline, SubmitOutcome};
pub use session::FormSession;
pub use state::FormState;
pub use submit::{Receipt, SimulatedSubmitter, Submitter};
pub use validation::{FieldIssue, IssueReason, ValidationError};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with forms
    pub use crate::{
        Field, FieldKind, Form, FormHandle, FormPipeline, FormSession, FormType,
        SimulatedSubmitter, SubmitOutcome, Submitter,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
