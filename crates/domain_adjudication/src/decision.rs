//! The structured verdict produced by the judge step

use serde::{Deserialize, Serialize};

use core_kernel::{Currency, Money};

use crate::error::AdjudicationError;
use crate::status::ClaimStatus;

/// Final adjudication verdict for a claim
///
/// Invariants enforced at construction:
/// - `amount_approved` is never negative
/// - `rejection_reason` is present if and only if the status is a denial
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimDecision {
    status: ClaimStatus,
    amount_approved: Money,
    rejection_reason: Option<String>,
}

impl ClaimDecision {
    /// Creates an approval for the given amount
    pub fn approve(amount: Money) -> Result<Self, AdjudicationError> {
        if amount.is_negative() {
            return Err(AdjudicationError::InvalidDecision(format!(
                "approved amount must not be negative, got {amount}"
            )));
        }
        Ok(Self {
            status: ClaimStatus::Approved,
            amount_approved: amount.round_to_currency(),
            rejection_reason: None,
        })
    }

    /// Creates a rejection with the given reason
    pub fn reject(
        reason: impl Into<String>,
        currency: Currency,
    ) -> Result<Self, AdjudicationError> {
        let reason = reason.into();
        if reason.trim().is_empty() {
            return Err(AdjudicationError::InvalidDecision(
                "rejection reason must not be blank".to_string(),
            ));
        }
        Ok(Self {
            status: ClaimStatus::Rejected,
            amount_approved: Money::zero(currency),
            rejection_reason: Some(reason),
        })
    }

    /// Returns the decision status (always terminal)
    pub fn status(&self) -> ClaimStatus {
        self.status
    }

    /// Returns the approved amount (zero for rejections)
    pub fn amount_approved(&self) -> Money {
        self.amount_approved
    }

    /// Returns the rejection reason, if this is a denial
    pub fn rejection_reason(&self) -> Option<&str> {
        self.rejection_reason.as_deref()
    }

    /// Returns true if the claim was denied
    pub fn is_denial(&self) -> bool {
        self.status == ClaimStatus::Rejected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_approve_carries_amount_and_no_reason() {
        let decision =
            ClaimDecision::approve(Money::new(dec!(150.00), Currency::USD)).unwrap();

        assert_eq!(decision.status(), ClaimStatus::Approved);
        assert_eq!(decision.amount_approved().amount(), dec!(150.00));
        assert!(decision.rejection_reason().is_none());
        assert!(!decision.is_denial());
    }

    #[test]
    fn test_approve_rejects_negative_amount() {
        let result = ClaimDecision::approve(Money::new(dec!(-1.00), Currency::USD));
        assert!(matches!(result, Err(AdjudicationError::InvalidDecision(_))));
    }

    #[test]
    fn test_reject_carries_reason_and_zero_amount() {
        let decision =
            ClaimDecision::reject("Exclusion under Article 9", Currency::USD).unwrap();

        assert_eq!(decision.status(), ClaimStatus::Rejected);
        assert!(decision.amount_approved().is_zero());
        assert_eq!(decision.rejection_reason(), Some("Exclusion under Article 9"));
        assert!(decision.is_denial());
    }

    #[test]
    fn test_reject_requires_a_reason() {
        let result = ClaimDecision::reject("   ", Currency::USD);
        assert!(matches!(result, Err(AdjudicationError::InvalidDecision(_))));
    }

    #[test]
    fn test_decision_status_is_always_terminal() {
        let approved =
            ClaimDecision::approve(Money::zero(Currency::USD)).unwrap();
        let rejected = ClaimDecision::reject("no coverage", Currency::USD).unwrap();

        assert!(approved.status().is_terminal());
        assert!(rejected.status().is_terminal());
    }
}
