//! Submission backends
//!
//! The pipeline only knows the `Submitter` trait. The site ships with
//! `SimulatedSubmitter`, a fixed-delay stand-in that always succeeds; a real
//! backend plugs in behind the same trait.

use crate::error::SubmitError;
use crate::form::Submission;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use ulid::Ulid;

/// Acknowledgement from a backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    /// Backend reference of the submission
    pub reference: Ulid,
    /// When the backend accepted it
    pub accepted_at: DateTime<Utc>,
}

impl Receipt {
    /// Fresh receipt stamped now
    #[must_use]
    pub fn now() -> Self {
        Self {
            reference: Ulid::new(),
            accepted_at: Utc::now(),
        }
    }
}

/// Asynchronous submission capability
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Submitter: Send + Sync {
    /// Deliver a submission
    async fn submit(&self, submission: &Submission) -> Result<Receipt, SubmitError>;
}

/// Fixed-delay submitter that never fails
#[derive(Debug, Clone, Copy)]
pub struct SimulatedSubmitter {
    delay: Duration,
}

impl SimulatedSubmitter {
    /// Create with a round-trip delay
    #[inline]
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Round-trip delay
    #[inline]
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self::new(Duration::from_millis(2000))
    }
}

#[async_trait]
impl Submitter for SimulatedSubmitter {
    async fn submit(&self, submission: &Submission) -> Result<Receipt, SubmitError> {
        tokio::time::sleep(self.delay).await;
        tracing::info!(
            form = %submission.form_type,
            data = ?submission.data,
            "form submitted"
        );
        Ok(Receipt::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormType;
    use indexmap::IndexMap;

    fn submission() -> Submission {
        Submission {
            form_type: FormType::General,
            data: IndexMap::new(),
            submitted_at: Utc::now(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn simulated_submitter_waits_then_succeeds() {
        let submitter = SimulatedSubmitter::default();
        let start = tokio::time::Instant::now();

        let receipt = submitter.submit(&submission()).await;
        assert!(receipt.is_ok());
        assert!(start.elapsed() >= Duration::from_millis(2000));
    }
}
