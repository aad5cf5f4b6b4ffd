//! Claims DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use domain_adjudication::{AnalysisLog, ClaimDecision, ClaimState};

#[derive(Debug, Deserialize, Validate)]
pub struct AdjudicateClaimRequest {
    #[validate(length(min = 1, message = "claim_id must not be empty"))]
    pub claim_id: String,
    pub policy_text: String,
    #[serde(default)]
    pub evidence_paths: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct AnalysisLogDto {
    pub node: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl From<&AnalysisLog> for AnalysisLogDto {
    fn from(log: &AnalysisLog) -> Self {
        Self {
            node: log.node.clone(),
            message: log.message.clone(),
            timestamp: log.timestamp,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DecisionDto {
    pub status: String,
    pub amount_approved: Decimal,
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
}

impl From<&ClaimDecision> for DecisionDto {
    fn from(decision: &ClaimDecision) -> Self {
        Self {
            status: decision.status().to_string(),
            amount_approved: decision.amount_approved().amount(),
            currency: decision.amount_approved().currency().code().to_string(),
            rejection_reason: decision.rejection_reason().map(str::to_string),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AdjudicationResponse {
    pub claim_id: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decision: Option<DecisionDto>,
    pub analysis_logs: Vec<AnalysisLogDto>,
}

impl From<&ClaimState> for AdjudicationResponse {
    fn from(state: &ClaimState) -> Self {
        Self {
            claim_id: state.claim_id().to_string(),
            status: state.current_status().to_string(),
            decision: state.decision().map(DecisionDto::from),
            analysis_logs: state.analysis_logs().iter().map(AnalysisLogDto::from).collect(),
        }
    }
}
