//! Per-form submission state machine
//!
//! `idle -> validating -> (invalid -> idle) | (submitting -> idle)`.
//! There is no failed terminal state; every path ends in `idle`.

use crate::error::FormError;
use serde::{Deserialize, Serialize};

/// Submission state of a form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormState {
    /// Waiting for user input
    #[default]
    Idle,
    /// Checking fields
    Validating,
    /// Validation rejected the form
    Invalid,
    /// Submission in flight
    Submitting,
}

/// Validates a state transition.
pub fn validate_transition(from: FormState, to: FormState) -> Result<(), FormError> {
    if allowed(from, to) {
        Ok(())
    } else {
        Err(FormError::IllegalTransition { from, to })
    }
}

/// States reachable from `from`
#[must_use]
pub fn allowed_transitions(from: FormState) -> Vec<FormState> {
    use FormState::*;
    match from {
        Idle => vec![Validating],
        Validating => vec![Invalid, Submitting],
        Invalid => vec![Idle],
        Submitting => vec![Idle],
    }
}

fn allowed(from: FormState, to: FormState) -> bool {
    allowed_transitions(from).into_iter().any(|s| s == to)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn happy_path() {
        assert!(validate_transition(FormState::Idle, FormState::Validating).is_ok());
        assert!(validate_transition(FormState::Validating, FormState::Submitting).is_ok());
        assert!(validate_transition(FormState::Submitting, FormState::Idle).is_ok());
    }

    #[test]
    fn invalid_path_returns_to_idle() {
        assert!(validate_transition(FormState::Validating, FormState::Invalid).is_ok());
        assert!(validate_transition(FormState::Invalid, FormState::Idle).is_ok());
    }

    #[test]
    fn cannot_skip_validation() {
        let err = validate_transition(FormState::Idle, FormState::Submitting).unwrap_err();
        assert!(matches!(err, FormError::IllegalTransition { .. }));
        assert!(validate_transition(FormState::Invalid, FormState::Submitting).is_err());
    }

    #[test]
    fn every_state_reaches_idle() {
        for state in [FormState::Validating, FormState::Invalid, FormState::Submitting] {
            let mut current = state;
            for _ in 0..3 {
                if current == FormState::Idle {
                    break;
                }
                current = *allowed_transitions(current).last().unwrap();
            }
            assert_eq!(current, FormState::Idle, "{state:?}");
        }
    }
}
