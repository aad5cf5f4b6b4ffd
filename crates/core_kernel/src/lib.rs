//! Core Kernel - Foundational types and utilities for SettleFlow
//!
//! This crate provides the fundamental building blocks used across the
//! adjudication domain and the API layer:
//! - Money types with precise decimal arithmetic
//! - Strongly-typed identifiers and value objects
//! - Clock abstractions for deterministic timestamping

pub mod clock;
pub mod error;
pub mod identifiers;
pub mod money;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::CoreError;
pub use identifiers::{ClaimId, RunId};
pub use money::{Currency, Money, MoneyError};
