//! Claim state threaded through the pipeline

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{ClaimId, CoreError};

use crate::decision::ClaimDecision;
use crate::error::AdjudicationError;
use crate::patch::StatePatch;
use crate::status::ClaimStatus;

/// One entry in the audit trail. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisLog {
    /// Name of the step that created this entry
    pub node: String,
    /// The reasoning or observation
    pub message: String,
    /// When the entry was created (serialized as ISO-8601)
    pub timestamp: DateTime<Utc>,
}

impl AnalysisLog {
    pub fn new(node: impl Into<String>, message: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            node: node.into(),
            message: message.into(),
            timestamp,
        }
    }
}

/// The shared state for a claim under adjudication
///
/// Created once per submission and threaded through every step. Mutation
/// goes exclusively through [`ClaimState::apply`], which enforces the
/// invariants: the audit trail is append-only and the decision is recorded
/// at most once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimState {
    claim_id: ClaimId,
    policy_text: String,
    evidence_paths: Vec<String>,
    analysis_logs: Vec<AnalysisLog>,
    current_status: ClaimStatus,
    decision: Option<ClaimDecision>,
}

impl ClaimState {
    /// Creates the state for a freshly submitted claim
    ///
    /// A blank claim id is rejected here, before any step runs.
    pub fn submit(
        claim_id: impl Into<String>,
        policy_text: impl Into<String>,
        evidence_paths: Vec<String>,
    ) -> Result<Self, CoreError> {
        Ok(Self {
            claim_id: ClaimId::new(claim_id)?,
            policy_text: policy_text.into(),
            evidence_paths,
            analysis_logs: Vec::new(),
            current_status: ClaimStatus::UnderReview,
            decision: None,
        })
    }

    /// Merges a step's patch into this state
    ///
    /// The patch's log entry is appended, an optional status overwrites the
    /// current one, and an optional decision is recorded. Recording a second
    /// decision is an error and leaves the state untouched.
    pub fn apply(&mut self, patch: StatePatch) -> Result<(), AdjudicationError> {
        let (log, status, decision) = patch.into_parts();

        if decision.is_some() && self.decision.is_some() {
            return Err(AdjudicationError::DuplicateDecision);
        }

        self.analysis_logs.push(log);
        if let Some(status) = status {
            self.current_status = status;
        }
        if let Some(decision) = decision {
            self.decision = Some(decision);
        }
        Ok(())
    }

    pub fn claim_id(&self) -> &ClaimId {
        &self.claim_id
    }

    pub fn policy_text(&self) -> &str {
        &self.policy_text
    }

    pub fn evidence_paths(&self) -> &[String] {
        &self.evidence_paths
    }

    /// The append-only audit trail, in step order
    pub fn analysis_logs(&self) -> &[AnalysisLog] {
        &self.analysis_logs
    }

    pub fn current_status(&self) -> ClaimStatus {
        self.current_status
    }

    pub fn decision(&self) -> Option<&ClaimDecision> {
        self.decision.as_ref()
    }

    /// Returns true once a terminal status has been reached
    pub fn is_terminal(&self) -> bool {
        self.current_status.is_terminal()
    }
}
