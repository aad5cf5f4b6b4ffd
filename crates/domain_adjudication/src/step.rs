//! Review steps
//!
//! Three reviewers debate a claim: the advocate argues for coverage, the
//! auditor hunts for exclusions, and the judge resolves the debate into a
//! [`ClaimDecision`]. The reviewers here are deterministic stubs; a
//! production deployment swaps in steps that call an external analysis
//! service, which is why [`StepError`] is part of the signature.

use rust_decimal_macros::dec;

use core_kernel::{Clock, Currency, Money};

use crate::decision::ClaimDecision;
use crate::error::StepError;
use crate::patch::StatePatch;
use crate::state::{AnalysisLog, ClaimState};
use crate::status::ClaimStatus;

/// A single step of the adjudication pipeline
///
/// Steps get a read-only view of the state and describe their contribution
/// as a [`StatePatch`]. They must always produce a log entry documenting
/// their reasoning.
pub trait AdjudicationStep: Send + Sync {
    /// Name recorded in the audit trail
    fn name(&self) -> &'static str;

    /// Reviews the claim and returns a patch
    fn run(&self, state: &ClaimState, clock: &dyn Clock) -> Result<StatePatch, StepError>;
}

/// Argues for the claimant: looks for evidence that supports coverage
#[derive(Debug, Clone, Copy, Default)]
pub struct Advocate;

impl AdjudicationStep for Advocate {
    fn name(&self) -> &'static str {
        "Advocate"
    }

    fn run(&self, state: &ClaimState, clock: &dyn Clock) -> Result<StatePatch, StepError> {
        tracing::debug!(claim_id = %state.claim_id(), "advocate reviewing claim");

        let entry = AnalysisLog::new(
            self.name(),
            "Flight delay of 7 hours verified via boarding pass screenshot. Matches Article 4.1.",
            clock.now(),
        );

        Ok(StatePatch::log(entry).with_status(ClaimStatus::UnderReview))
    }
}

/// Argues against the claimant: looks for exclusions and reasons to deny
#[derive(Debug, Clone, Copy, Default)]
pub struct Auditor;

impl AdjudicationStep for Auditor {
    fn name(&self) -> &'static str {
        "Auditor"
    }

    fn run(&self, state: &ClaimState, clock: &dyn Clock) -> Result<StatePatch, StepError> {
        tracing::debug!(claim_id = %state.claim_id(), "auditor scrutinizing claim");

        let entry = AnalysisLog::new(
            self.name(),
            "Cross-referencing Article 9: 'Strikes known 48h prior are excluded'. No strike info found yet.",
            clock.now(),
        );

        Ok(StatePatch::log(entry))
    }
}

/// Resolves the debate into a final decision and a terminal status
#[derive(Debug, Clone, Copy, Default)]
pub struct Judge;

impl AdjudicationStep for Judge {
    fn name(&self) -> &'static str {
        "Judge"
    }

    fn run(&self, state: &ClaimState, clock: &dyn Clock) -> Result<StatePatch, StepError> {
        tracing::debug!(claim_id = %state.claim_id(), "judge finalizing claim");

        let decision = ClaimDecision::approve(Money::new(dec!(150.00), Currency::USD))
            .map_err(|e| StepError::Internal(e.to_string()))?;

        let entry = AnalysisLog::new(
            self.name(),
            format!(
                "Final verdict: {} for {}",
                decision.status(),
                decision.amount_approved()
            ),
            clock.now(),
        );

        tracing::info!(
            claim_id = %state.claim_id(),
            status = %decision.status(),
            amount = %decision.amount_approved(),
            "verdict reached"
        );

        Ok(StatePatch::log(entry)
            .with_status(decision.status())
            .with_decision(decision))
    }
}
