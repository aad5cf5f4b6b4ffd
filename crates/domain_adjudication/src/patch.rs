//! Typed state patches
//!
//! Steps never mutate [`crate::state::ClaimState`] directly; they return a
//! `StatePatch` describing their contribution. The merge rule is explicit
//! per field: the log entry is appended, status and decision overwrite only
//! when present.

use serde::{Deserialize, Serialize};

use crate::decision::ClaimDecision;
use crate::state::AnalysisLog;
use crate::status::ClaimStatus;

/// A single step's contribution to the claim state
///
/// Every step produces exactly one audit-log entry; status and decision
/// are optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatePatch {
    log: AnalysisLog,
    status: Option<ClaimStatus>,
    decision: Option<ClaimDecision>,
}

impl StatePatch {
    /// Creates a patch carrying only an audit-log entry
    pub fn log(entry: AnalysisLog) -> Self {
        Self {
            log: entry,
            status: None,
            decision: None,
        }
    }

    /// Sets the claim status alongside the log entry
    pub fn with_status(mut self, status: ClaimStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Records the final decision alongside the log entry
    pub fn with_decision(mut self, decision: ClaimDecision) -> Self {
        self.decision = Some(decision);
        self
    }

    pub fn log_entry(&self) -> &AnalysisLog {
        &self.log
    }

    pub fn status(&self) -> Option<ClaimStatus> {
        self.status
    }

    pub fn decision(&self) -> Option<&ClaimDecision> {
        self.decision.as_ref()
    }

    pub(crate) fn into_parts(self) -> (AnalysisLog, Option<ClaimStatus>, Option<ClaimDecision>) {
        (self.log, self.status, self.decision)
    }
}
