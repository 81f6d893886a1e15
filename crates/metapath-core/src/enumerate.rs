//! Sub-pathway enumeration.
//!
//! An explicit-stack DFS walks the directed adjacency relation starting from
//! every reaction that consumes the seed compound. Every prefix of length > 1
//! encountered during the walk is a candidate, not only leaf-terminated
//! chains: the enumeration is deliberately exhaustive rather than best-first,
//! and exponential blow-up is an accepted cost bounded in practice by the
//! cofactor filter thinning the graph.
//!
//! Revisit policy: a transition may not bounce straight back to the
//! immediately preceding reaction, but revisiting a reaction later in a
//! longer cycle is allowed. Because of that, cyclic maps can make the walk
//! unbounded; callers wanting a bound supply [`DfsLimits`] (the engine itself
//! imposes no cutoff).

use crate::network::{ReactionIdx, ReactionNetwork};
use serde::{Deserialize, Serialize};

/// Traversal polarity of a step.
///
/// This is *not* the reaction's parsed reversibility sign: it records which
/// orientation of the equation was used when the step was taken. The
/// enumerator always walks the written orientation (`Forward`), since
/// adjacency is defined on written products feeding written substrates;
/// `Reverse` exists for callers scoring reverse use of a reversible reaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Forward,
    Reverse,
}

impl Direction {
    pub const fn sign(self) -> i8 {
        match self {
            Direction::Forward => 1,
            Direction::Reverse => -1,
        }
    }
}

/// One traversal step: which reaction, in which polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Step {
    pub reaction: ReactionIdx,
    pub direction: Direction,
}

/// An ordered chain of at least two steps. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubPathway {
    steps: Vec<Step>,
}

impl SubPathway {
    /// Returns `None` for chains of length <= 1; single-reaction "paths" are
    /// uninteresting by definition.
    pub fn new(steps: Vec<Step>) -> Option<Self> {
        if steps.len() > 1 {
            Some(Self { steps })
        } else {
            None
        }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Caller-supplied enumeration bounds. Unlimited by default; the DFS itself
/// has no built-in depth cutoff.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DfsLimits {
    /// Maximum number of steps per chain.
    pub max_depth: Option<usize>,
    /// Maximum number of recorded candidate chains.
    pub max_paths: Option<usize>,
}

impl DfsLimits {
    pub fn depth(max_depth: usize) -> Self {
        Self {
            max_depth: Some(max_depth),
            max_paths: None,
        }
    }
}

/// Enumerate every directed reaction chain of length > 1 reachable from
/// reactions that consume `seed` as a substrate.
///
/// A seed that appears only as a product across the whole map yields an empty
/// candidate set. Results come back in enumeration order, which is also the
/// selector's tie-break order.
pub fn enumerate_subpathways(
    network: &ReactionNetwork,
    seed: &str,
    limits: DfsLimits,
) -> Vec<SubPathway> {
    let mut results = Vec::new();
    let mut stack: Vec<Vec<ReactionIdx>> = network
        .seed_consumers(seed)
        .into_iter()
        .map(|start| vec![start])
        .collect();
    // Pop order reverses the seed list; keep enumeration order stable in the
    // order seed consumers were found.
    stack.reverse();

    while let Some(path) = stack.pop() {
        if path.len() > 1 {
            if let Some(max) = limits.max_paths {
                if results.len() >= max {
                    return results;
                }
            }
            let steps = path
                .iter()
                .map(|&reaction| Step {
                    reaction,
                    direction: Direction::Forward,
                })
                .collect();
            if let Some(chain) = SubPathway::new(steps) {
                results.push(chain);
            }
        }

        if let Some(max) = limits.max_depth {
            if path.len() >= max {
                continue;
            }
        }

        let current = *path.last().expect("paths on the stack are non-empty");
        let predecessor = path.len().checked_sub(2).map(|i| path[i]);
        // Reverse so that the first successor is explored first (LIFO stack).
        for &next in network.successors(current).iter().rev() {
            if Some(next) == predecessor {
                continue;
            }
            let mut extended = path.clone();
            extended.push(next);
            stack.push(extended);
        }
    }

    results
}
