//! Minimum-cost selection.
//!
//! The accumulator is seeded at positive infinity, never zero: an
//! all-positive candidate set must still register its true minimum. Strict
//! `<` comparison means the first-encountered minimal chain wins ties, so
//! selection order is exactly enumeration order.

use crate::cost::{score_chain, ScoredChain, Weights};
use crate::enumerate::{enumerate_subpathways, DfsLimits, SubPathway};
use crate::error::CoreError;
use crate::network::ReactionNetwork;

/// Reduce scored chains to the strictly minimal one.
///
/// An empty collection is reported as [`CoreError::NoCandidates`], never as a
/// sentinel chain.
pub fn select_best<I>(chains: I) -> Result<ScoredChain, CoreError>
where
    I: IntoIterator<Item = ScoredChain>,
{
    let mut min_cost = f64::INFINITY;
    let mut best: Option<ScoredChain> = None;
    for chain in chains {
        if chain.total < min_cost {
            min_cost = chain.total;
            best = Some(chain);
        }
    }
    best.ok_or(CoreError::NoCandidates)
}

/// End-to-end convenience: enumerate from the seed, score every candidate and
/// return the minimum-cost chain.
///
/// Weights are validated before any scoring happens.
pub fn best_subpathway(
    network: &ReactionNetwork,
    seed: &str,
    weights: &Weights,
    limits: DfsLimits,
) -> Result<ScoredChain, CoreError> {
    weights.validate()?;
    let candidates: Vec<SubPathway> = enumerate_subpathways(network, seed, limits);
    select_best(
        candidates
            .iter()
            .map(|p| score_chain(network, p, weights, network.cofactors())),
    )
}
