//! Pre-built Test Fixtures
//!
//! Ready-to-use test data for the adjudication pipeline. Fixtures are
//! consistent and predictable so tests can assert exact values.

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use core_kernel::{Clock, Currency, FixedClock, Money};
use domain_adjudication::{Advocate, Auditor, ClaimState, Judge, Pipeline};
use rust_decimal_macros::dec;

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// The amount the stub judge approves
    pub fn usd_150() -> Money {
        Money::new(dec!(150.00), Currency::USD)
    }

    /// A zero amount
    pub fn usd_zero() -> Money {
        Money::zero(Currency::USD)
    }

    /// A EUR amount for currency mismatch tests
    pub fn eur_100() -> Money {
        Money::new(dec!(100.00), Currency::EUR)
    }
}

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// The instant every fixed-clock test runs at
    pub fn review_instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    /// A clock frozen at [`TemporalFixtures::review_instant`]
    pub fn fixed_clock() -> Arc<dyn Clock> {
        Arc::new(FixedClock::at(Self::review_instant()))
    }
}

/// Fixture for claim test data
pub struct ClaimFixtures;

impl ClaimFixtures {
    /// Policy text referencing the articles the stub reviewers quote
    pub fn travel_policy_text() -> &'static str {
        "Article 4.1: delays over 5 hours are covered. \
         Article 9: strikes known 48h prior are excluded."
    }

    /// The worked example: claim C1 with a single screenshot as evidence
    pub fn claim_c1() -> ClaimState {
        ClaimState::submit(
            "C1",
            Self::travel_policy_text(),
            vec!["a.png".to_string()],
        )
        .expect("fixture claim must be valid")
    }

    /// The standard three-step pipeline on a frozen clock
    pub fn deterministic_pipeline() -> Pipeline {
        Pipeline::with_steps(
            vec![Box::new(Advocate), Box::new(Auditor), Box::new(Judge)],
            TemporalFixtures::fixed_clock(),
        )
    }
}
