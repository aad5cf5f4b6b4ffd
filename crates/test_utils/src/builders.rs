//! Test Data Builders
//!
//! Builder patterns for constructing test data with sensible defaults.
//! Tests specify only the relevant fields and take defaults for the rest.

use domain_adjudication::ClaimState;
use fake::faker::filesystem::en::FileName;
use fake::faker::lorem::en::Sentence;
use fake::Fake;

use crate::fixtures::ClaimFixtures;

/// Builder for constructing claim states awaiting adjudication
pub struct ClaimStateBuilder {
    claim_id: String,
    policy_text: String,
    evidence_paths: Vec<String>,
}

impl Default for ClaimStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClaimStateBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            claim_id: "CLM-TEST-0001".to_string(),
            policy_text: ClaimFixtures::travel_policy_text().to_string(),
            evidence_paths: vec!["boarding_pass.png".to_string()],
        }
    }

    /// Sets the claim id
    pub fn with_claim_id(mut self, id: impl Into<String>) -> Self {
        self.claim_id = id.into();
        self
    }

    /// Sets the policy text
    pub fn with_policy_text(mut self, text: impl Into<String>) -> Self {
        self.policy_text = text.into();
        self
    }

    /// Sets the evidence paths
    pub fn with_evidence_paths(mut self, paths: Vec<String>) -> Self {
        self.evidence_paths = paths;
        self
    }

    /// Adds a single evidence path
    pub fn with_evidence(mut self, path: impl Into<String>) -> Self {
        self.evidence_paths.push(path.into());
        self
    }

    /// Replaces the fixed defaults with randomized-but-plausible data
    pub fn randomized(mut self) -> Self {
        self.policy_text = Sentence(8..20).fake();
        self.evidence_paths = (0..3).map(|_| FileName().fake()).collect();
        self
    }

    /// Builds the claim state
    ///
    /// # Panics
    ///
    /// Panics if the configured claim id is blank; use
    /// [`ClaimStateBuilder::try_build`] to test that path.
    pub fn build(self) -> ClaimState {
        self.try_build().expect("builder produced an invalid claim")
    }

    /// Builds the claim state, surfacing construction errors
    pub fn try_build(self) -> Result<ClaimState, core_kernel::CoreError> {
        ClaimState::submit(self.claim_id, self.policy_text, self.evidence_paths)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults_are_valid() {
        let state = ClaimStateBuilder::new().build();
        assert_eq!(state.claim_id().as_str(), "CLM-TEST-0001");
        assert_eq!(state.evidence_paths().len(), 1);
    }

    #[test]
    fn test_builder_overrides() {
        let state = ClaimStateBuilder::new()
            .with_claim_id("C9")
            .with_evidence("receipt.pdf")
            .build();

        assert_eq!(state.claim_id().as_str(), "C9");
        assert_eq!(state.evidence_paths().len(), 2);
    }

    #[test]
    fn test_builder_blank_id_fails() {
        let result = ClaimStateBuilder::new().with_claim_id(" ").try_build();
        assert!(result.is_err());
    }

    #[test]
    fn test_randomized_builder_still_builds() {
        let state = ClaimStateBuilder::new().randomized().build();
        assert!(!state.policy_text().is_empty());
        assert_eq!(state.evidence_paths().len(), 3);
    }
}
