//! Surfaced error conditions.
//!
//! Parsing-level irregularities are absorbed where they occur (empty
//! equations, neutral feature defaults) and never reach this type. Only two
//! conditions are reported to callers: an empty candidate collection at
//! selection time, and an invalid weight configuration rejected before
//! scoring begins.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// The selector received no candidate chains. Distinct from "a candidate
    /// was found with cost 0".
    #[error("no candidate sub-pathways to select from")]
    NoCandidates,

    /// A weight was negative or non-finite. Rejected at configuration time,
    /// not discovered mid-sum.
    #[error("invalid weight {name} = {value}: weights must be finite and non-negative")]
    InvalidWeights { name: &'static str, value: f64 },
}
