//! Claims handlers

use axum::{extract::State, Json};
use validator::Validate;

use domain_adjudication::ClaimState;

use crate::dto::claims::{AdjudicateClaimRequest, AdjudicationResponse};
use crate::{error::ApiError, AppState};

/// Submits a claim and runs the adjudication pipeline to completion
///
/// Returns the final state: the decision plus the full audit trail.
pub async fn adjudicate_claim(
    State(state): State<AppState>,
    Json(request): Json<AdjudicateClaimRequest>,
) -> Result<Json<AdjudicationResponse>, ApiError> {
    request.validate()?;

    let claim = ClaimState::submit(
        request.claim_id,
        request.policy_text,
        request.evidence_paths,
    )?;

    let adjudicated = state.pipeline.run(claim)?;

    Ok(Json(AdjudicationResponse::from(&adjudicated)))
}
