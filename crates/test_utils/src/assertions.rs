//! Custom Test Assertions
//!
//! Specialized assertion helpers for adjudication types that give more
//! meaningful error messages than standard assertions.

use core_kernel::Money;
use domain_adjudication::{ClaimState, ClaimStatus};

/// Asserts that the audit trail contains exactly the given node names,
/// in order
pub fn assert_log_order(state: &ClaimState, expected_nodes: &[&str]) {
    let actual: Vec<&str> = state
        .analysis_logs()
        .iter()
        .map(|l| l.node.as_str())
        .collect();

    assert_eq!(
        actual, expected_nodes,
        "Audit trail order mismatch: expected {expected_nodes:?}, got {actual:?}"
    );
}

/// Asserts that every log entry carries a non-empty message
pub fn assert_logs_have_reasoning(state: &ClaimState) {
    for log in state.analysis_logs() {
        assert!(
            !log.message.trim().is_empty(),
            "Log entry from '{}' has an empty message",
            log.node
        );
    }
}

/// Asserts that the claim was approved for exactly the given amount
pub fn assert_approved_for(state: &ClaimState, amount: Money) {
    let decision = state
        .decision()
        .unwrap_or_else(|| panic!("Expected a decision on claim {}", state.claim_id()));

    assert_eq!(
        decision.status(),
        ClaimStatus::Approved,
        "Expected approval, got {}",
        decision.status()
    );
    assert_eq!(
        decision.amount_approved(),
        amount,
        "Approved amount mismatch: expected {}, got {}",
        amount,
        decision.amount_approved()
    );
    assert!(
        decision.rejection_reason().is_none(),
        "Approved claim must not carry a rejection reason"
    );
}

/// Asserts that the claim was rejected and the reason mentions the fragment
pub fn assert_rejected_because(state: &ClaimState, reason_fragment: &str) {
    let decision = state
        .decision()
        .unwrap_or_else(|| panic!("Expected a decision on claim {}", state.claim_id()));

    assert_eq!(
        decision.status(),
        ClaimStatus::Rejected,
        "Expected rejection, got {}",
        decision.status()
    );
    let reason = decision
        .rejection_reason()
        .expect("Rejected claim must carry a rejection reason");
    assert!(
        reason.contains(reason_fragment),
        "Rejection reason '{reason}' does not mention '{reason_fragment}'"
    );
}

/// Asserts that no decision has been recorded yet
pub fn assert_undecided(state: &ClaimState) {
    assert!(
        state.decision().is_none(),
        "Expected no decision yet on claim {}, found {:?}",
        state.claim_id(),
        state.decision()
    );
    assert!(
        !state.is_terminal(),
        "Undecided claim must not be in a terminal status"
    );
}
