//! The pipeline runner
//!
//! A plain ordered list of steps with a terminal check after each one.
//! No retries, no parallelism: one claim is adjudicated synchronously,
//! start to finish.

use std::sync::Arc;

use core_kernel::{Clock, RunId, SystemClock};

use crate::error::AdjudicationError;
use crate::state::ClaimState;
use crate::step::{Advocate, AdjudicationStep, Auditor, Judge};

/// Whether the runner should keep going after a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunControl {
    Continue,
    End,
}

/// Continuation predicate: end as soon as the status is terminal
///
/// Pure, no side effects.
pub fn should_continue(state: &ClaimState) -> RunControl {
    if state.is_terminal() {
        RunControl::End
    } else {
        RunControl::Continue
    }
}

/// Runs review steps in a fixed order, merging each step's patch into the
/// accumulated state before invoking the next step
pub struct Pipeline {
    steps: Vec<Box<dyn AdjudicationStep>>,
    clock: Arc<dyn Clock>,
}

impl Pipeline {
    /// The standard adjudication pipeline: advocate -> auditor -> judge
    pub fn standard() -> Self {
        Self::with_steps(
            vec![Box::new(Advocate), Box::new(Auditor), Box::new(Judge)],
            Arc::new(SystemClock),
        )
    }

    /// Builds a pipeline from an explicit step list and clock
    pub fn with_steps(steps: Vec<Box<dyn AdjudicationStep>>, clock: Arc<dyn Clock>) -> Self {
        Self { steps, clock }
    }

    /// Adjudicates a claim to completion
    ///
    /// Applies each step's patch in order and stops once a terminal status
    /// is reached. A failing step aborts the run; the error carries the
    /// partially-adjudicated state so the audit trail up to the failure
    /// survives.
    pub fn run(&self, mut state: ClaimState) -> Result<ClaimState, AdjudicationError> {
        let run_id = RunId::new();
        let span = tracing::info_span!(
            "adjudication_run",
            %run_id,
            claim_id = %state.claim_id(),
        );
        let _guard = span.enter();

        for step in &self.steps {
            let patch = match step.run(&state, self.clock.as_ref()) {
                Ok(patch) => patch,
                Err(source) => {
                    tracing::warn!(step = step.name(), error = %source, "step failed, aborting run");
                    return Err(AdjudicationError::StepFailed {
                        step: step.name().to_string(),
                        source,
                        partial: Box::new(state),
                    });
                }
            };

            state.apply(patch)?;

            if should_continue(&state) == RunControl::End {
                break;
            }
        }

        if !state.is_terminal() {
            tracing::warn!(
                claim_id = %state.claim_id(),
                status = %state.current_status(),
                "pipeline exhausted without reaching a terminal status"
            );
        }

        Ok(state)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::standard()
    }
}
