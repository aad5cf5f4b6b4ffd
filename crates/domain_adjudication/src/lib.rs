//! Claim Adjudication Domain
//!
//! This crate implements the adjudication pipeline: a submitted claim is
//! threaded through a fixed, ordered sequence of review steps, each of which
//! appends an audit-log entry and may update the claim's status or record
//! the final decision.
//!
//! # Pipeline
//!
//! ```text
//! submit -> Advocate -> Auditor -> Judge -> terminal (approved/rejected)
//! ```
//!
//! Each step is a pure function from the current [`ClaimState`] to a typed
//! [`StatePatch`]; the [`Pipeline`] merges patches in order and stops once a
//! terminal status is reached.

pub mod decision;
pub mod error;
pub mod patch;
pub mod runner;
pub mod state;
pub mod status;
pub mod step;

pub use decision::ClaimDecision;
pub use error::{AdjudicationError, StepError};
pub use patch::StatePatch;
pub use runner::{should_continue, Pipeline, RunControl};
pub use state::{AnalysisLog, ClaimState};
pub use status::ClaimStatus;
pub use step::{Advocate, AdjudicationStep, Auditor, Judge};
