//! Adjudication domain errors

use thiserror::Error;

use core_kernel::CoreError;

use crate::state::ClaimState;

/// Failure inside a single review step
///
/// The stubbed reviewers never fail, but real steps call out to external
/// analysis services, so the failure modes are modeled here.
#[derive(Debug, Error)]
pub enum StepError {
    #[error("External service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Step failed: {0}")]
    Internal(String),
}

/// Errors that can occur in the adjudication domain
#[derive(Debug, Error)]
pub enum AdjudicationError {
    /// A step failed mid-run. The partially-adjudicated state is preserved
    /// so the audit trail accumulated before the failure is not lost.
    #[error("Step '{step}' failed: {source}")]
    StepFailed {
        step: String,
        #[source]
        source: StepError,
        partial: Box<ClaimState>,
    },

    #[error("Decision already recorded for claim")]
    DuplicateDecision,

    #[error("Invalid decision: {0}")]
    InvalidDecision(String),

    #[error(transparent)]
    Core(#[from] CoreError),
}
