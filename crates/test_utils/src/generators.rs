//! Property-Based Test Generators
//!
//! Proptest strategies for generating random test data that maintains
//! domain invariants.

use chrono::{DateTime, Duration, TimeZone, Utc};
use core_kernel::{Currency, Money};
use domain_adjudication::ClaimState;
use proptest::prelude::*;

/// Strategy for generating valid Currency values
pub fn currency_strategy() -> impl Strategy<Value = Currency> {
    prop_oneof![
        Just(Currency::USD),
        Just(Currency::EUR),
        Just(Currency::GBP),
        Just(Currency::JPY),
    ]
}

/// Strategy for generating non-blank claim ids
pub fn claim_id_strategy() -> impl Strategy<Value = String> {
    "[A-Z]{1,3}-?[0-9]{1,6}"
}

/// Strategy for generating evidence path lists (possibly empty)
pub fn evidence_paths_strategy() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[a-z]{1,12}\\.(png|pdf|jpg)", 0..5)
}

/// Strategy for generating non-negative Money amounts in minor units
pub fn payout_strategy() -> impl Strategy<Value = Money> {
    (0i64..100_000_000i64, currency_strategy())
        .prop_map(|(minor, currency)| Money::from_minor(minor, currency))
}

/// Strategy for generating freshly submitted claim states
pub fn submitted_claim_strategy() -> impl Strategy<Value = ClaimState> {
    (claim_id_strategy(), ".{0,200}", evidence_paths_strategy()).prop_map(
        |(claim_id, policy_text, evidence_paths)| {
            ClaimState::submit(claim_id, policy_text, evidence_paths)
                .expect("generated claim id is never blank")
        },
    )
}

/// Strategy for generating timestamps within 2024
pub fn timestamp_2024_strategy() -> impl Strategy<Value = DateTime<Utc>> {
    (0i64..365i64).prop_map(|days| {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::days(days)
    })
}
