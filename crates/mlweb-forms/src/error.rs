//! Error types for the form layer

use crate::state::FormState;

/// Form model errors
///
/// Validation failures are not here: they are an expected outcome, see
/// `ValidationError`.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    /// No field with this name
    #[error("unknown field: {0}")]
    UnknownField(String),

    /// State machine rejected a transition
    #[error("illegal form state transition: {from:?} -> {to:?}")]
    IllegalTransition { from: FormState, to: FormState },
}

/// Errors reported by a `Submitter`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// Backend refused the submission
    #[error("submission rejected: {0}")]
    Rejected(String),

    /// Backend unreachable
    #[error("backend unavailable: {0}")]
    Unavailable(String),

    /// Backend took too long
    #[error("submission timed out after {duration_ms}ms")]
    Timeout { duration_ms: u64 },
}

impl SubmitError {
    /// Check if trying again later could succeed
    #[inline]
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Unavailable(_) | Self::Timeout { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_error_is_retryable() {
        assert!(SubmitError::Timeout { duration_ms: 10 }.is_retryable());
        assert!(SubmitError::Unavailable("down".to_string()).is_retryable());
        assert!(!SubmitError::Rejected("spam".to_string()).is_retryable());
    }

    #[test]
    fn form_error_display() {
        let err = FormError::UnknownField("nip".to_string());
        assert!(err.to_string().contains("unknown field"));
    }
}
