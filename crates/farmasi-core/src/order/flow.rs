//! Order submission state machine.

use crate::error::SubmitError;
use serde::{Deserialize, Serialize};

/// States of a single form's submission cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SubmissionState {
    /// Ready for input and submission.
    #[default]
    Idle,
    /// Request in flight; controls disabled.
    Submitting,
    /// Backend accepted the order.
    Succeeded,
    /// Backend rejected the order or never answered.
    Failed,
}

impl SubmissionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionState::Idle => "idle",
            SubmissionState::Submitting => "submitting",
            SubmissionState::Succeeded => "succeeded",
            SubmissionState::Failed => "failed",
        }
    }

    /// Label for the submit control.
    pub fn button_label(&self) -> &'static str {
        match self {
            SubmissionState::Submitting => "Memproses...",
            _ => "Submit Order",
        }
    }
}

/// Tracks one form's submission cycle:
/// `Idle -> Submitting -> (Succeeded | Failed) -> Idle`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionFlow {
    state: SubmissionState,
    /// Submissions started over the form's lifetime.
    attempts: u64,
}

impl SubmissionFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn attempts(&self) -> u64 {
        self.attempts
    }

    /// Submit and cancel controls are usable only while idle.
    pub fn controls_enabled(&self) -> bool {
        self.state == SubmissionState::Idle
    }

    /// `Idle -> Submitting`. Any other state means a submission is
    /// still being processed.
    pub fn begin(&mut self) -> Result<(), SubmitError> {
        if self.state != SubmissionState::Idle {
            return Err(SubmitError::Busy);
        }
        self.state = SubmissionState::Submitting;
        self.attempts += 1;
        Ok(())
    }

    /// `Submitting -> Succeeded | Failed`.
    pub fn settle(&mut self, succeeded: bool) -> Result<SubmissionState, SubmitError> {
        let next = if succeeded {
            SubmissionState::Succeeded
        } else {
            SubmissionState::Failed
        };
        if self.state != SubmissionState::Submitting {
            return Err(SubmitError::InvalidTransition {
                from: self.state.as_str(),
                to: next.as_str(),
            });
        }
        self.state = next;
        Ok(next)
    }

    /// `Succeeded | Failed -> Idle`.
    pub fn finish(&mut self) -> Result<(), SubmitError> {
        match self.state {
            SubmissionState::Succeeded | SubmissionState::Failed => {
                self.state = SubmissionState::Idle;
                Ok(())
            }
            other => Err(SubmitError::InvalidTransition {
                from: other.as_str(),
                to: SubmissionState::Idle.as_str(),
            }),
        }
    }
}
