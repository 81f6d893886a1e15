//! Reaction arena and adjacency index.
//!
//! Records live once in a `Vec` arena and are referenced everywhere else by
//! compact [`ReactionIdx`] handles, so candidate chains never duplicate
//! equation text. Adjacency is precomputed per direction at build time:
//! `A -> B` holds iff A's cofactor-filtered products intersect B's
//! cofactor-filtered substrates. The predicate is evaluated independently for
//! each ordered pair; both, one or neither direction may hold, which is what
//! allows cycles in the traversal.

use crate::cofactors::CofactorSet;
use crate::equation::{parse_equation, CompoundId, Equation, ReactionId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Compact handle into a [`ReactionNetwork`] arena (4 bytes instead of a
/// cloned record).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct ReactionIdx(u32);

impl ReactionIdx {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }

    fn index(self) -> usize {
        self.0 as usize
    }
}

/// One reaction as consumed by the engine: identifier, raw equation text, the
/// parsed equation and the pathway-map membership count driving the precedent
/// feature. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReactionRecord {
    pub id: ReactionId,
    pub equation_text: String,
    pub equation: Equation,
    pub pathway_count: u32,
}

impl ReactionRecord {
    /// Build a record from raw equation text. Parsing never fails; irregular
    /// text yields an empty equation and the record becomes an isolated node.
    pub fn new(id: impl Into<ReactionId>, equation_text: impl Into<String>, pathway_count: u32) -> Self {
        let equation_text = equation_text.into();
        let equation = parse_equation(&equation_text);
        Self {
            id: id.into(),
            equation_text,
            equation,
            pathway_count,
        }
    }

    /// True when the equation failed to parse: such records neither reach nor
    /// are reached by anything.
    pub fn is_isolated(&self) -> bool {
        self.equation.is_empty()
    }
}

/// Does any non-cofactor compound in `products` also appear in `substrates`?
///
/// The exclusion is applied before the intersection: a compound on the
/// cofactor list never links two reactions, even if it is the only species
/// they share.
fn linked(
    products: &HashMap<CompoundId, f64>,
    substrates: &HashMap<CompoundId, f64>,
    cofactors: &CofactorSet,
) -> bool {
    products
        .keys()
        .any(|c| !cofactors.contains(c) && substrates.contains_key(c))
}

/// A pathway map's worth of reactions plus the precomputed directed adjacency
/// relation. Build once per enumeration/scoring run; no state survives the
/// run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReactionNetwork {
    records: Vec<ReactionRecord>,
    successors: Vec<Vec<ReactionIdx>>,
    cofactors: CofactorSet,
}

impl ReactionNetwork {
    pub fn build(records: Vec<ReactionRecord>, cofactors: CofactorSet) -> Self {
        let n = records.len();
        let mut successors: Vec<Vec<ReactionIdx>> = vec![Vec::new(); n];
        for a in 0..n {
            for b in 0..n {
                if a == b {
                    continue;
                }
                if linked(
                    &records[a].equation.products,
                    &records[b].equation.substrates,
                    &cofactors,
                ) {
                    successors[a].push(ReactionIdx(b as u32));
                }
            }
        }
        Self {
            records,
            successors,
            cofactors,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn record(&self, idx: ReactionIdx) -> &ReactionRecord {
        &self.records[idx.index()]
    }

    pub fn records(&self) -> &[ReactionRecord] {
        &self.records
    }

    pub fn cofactors(&self) -> &CofactorSet {
        &self.cofactors
    }

    pub fn indices(&self) -> impl Iterator<Item = ReactionIdx> + '_ {
        (0..self.records.len() as u32).map(ReactionIdx)
    }

    pub fn index_of(&self, id: &str) -> Option<ReactionIdx> {
        self.records
            .iter()
            .position(|r| r.id == id)
            .map(|i| ReactionIdx(i as u32))
    }

    /// Directed adjacency: can `a`'s products feed `b`'s substrates?
    pub fn adjacent(&self, a: ReactionIdx, b: ReactionIdx) -> bool {
        a != b && self.successors[a.index()].contains(&b)
    }

    /// Precomputed successor list for the traversal's inner loop.
    pub fn successors(&self, idx: ReactionIdx) -> &[ReactionIdx] {
        &self.successors[idx.index()]
    }

    /// Reactions whose substrate side contains the seed compound.
    ///
    /// The seed check runs on the *unfiltered* substrate multiset:
    /// directionality matters at the seed, and a reaction producing the seed
    /// is not a valid starting point.
    pub fn seed_consumers(&self, seed: &str) -> Vec<ReactionIdx> {
        self.indices()
            .filter(|idx| self.record(*idx).equation.substrates.contains_key(seed))
            .collect()
    }
}
