//! Claim status

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of a claim as it moves through adjudication
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimStatus {
    /// Being reviewed by the pipeline
    UnderReview,
    /// Approved for payment
    Approved,
    /// Rejected
    Rejected,
    /// Waiting for additional evidence from the claimant
    PendingEvidence,
}

impl ClaimStatus {
    /// Returns true if no further steps may run after this status
    pub fn is_terminal(&self) -> bool {
        matches!(self, ClaimStatus::Approved | ClaimStatus::Rejected)
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ClaimStatus::UnderReview => "under_review",
            ClaimStatus::Approved => "approved",
            ClaimStatus::Rejected => "rejected",
            ClaimStatus::PendingEvidence => "pending_evidence",
        };
        write!(f, "{s}")
    }
}
