//! Metapath core: sub-pathway enumeration and cost ranking over metabolic
//! reaction networks.
//!
//! Given a set of reaction equations (KEGG-style `LHS (=>|<=>) RHS` text) and
//! a seed compound, this crate:
//!
//! 1. **Parses** each equation into substrate/product multisets (`equation`)
//! 2. **Links** reactions whose non-cofactor products feed another reaction's
//!    non-cofactor substrates (`network`)
//! 3. **Enumerates** directed reaction chains reachable from seed-consuming
//!    reactions (`enumerate`)
//! 4. **Scores** each chain with an additive six-feature cost model
//!    (`features`, `cost`)
//! 5. **Selects** the minimum-cost chain (`select`)
//!
//! The whole crate is synchronous and side-effect free: every operation is a
//! pure function of its explicit inputs, so independent runs can proceed
//! concurrently without shared state. Fetching reaction records is a
//! collaborator concern (see the `metapath-kegg` crate); the engine expects
//! already-structured records as input.
//!
//! ## Module Organization
//!
//! - `equation`: raw equation text -> substrate/product multisets + sign
//! - `cofactors`: KEGG compound id table and the cofactor exclusion set
//! - `network`: reaction arena and cofactor-filtered adjacency index
//! - `enumerate`: explicit-stack DFS producing candidate sub-pathways
//! - `features`: per-(reaction, direction) scoring features
//! - `cost`: weight configuration and chain scoring
//! - `select`: minimum-cost reduction with the `NoCandidates` surface

pub mod cofactors;
pub mod cost;
pub mod enumerate;
pub mod equation;
pub mod error;
pub mod features;
pub mod network;
pub mod select;

// Re-export key types
pub use cofactors::{compound_ids, CofactorSet};
pub use cost::{score_chain, ScoredChain, ScoredStep, Weights};
pub use enumerate::{enumerate_subpathways, DfsLimits, Direction, Step, SubPathway};
pub use equation::{parse_equation, CompoundId, Equation, ReactionId, Reversibility};
pub use error::CoreError;
pub use features::{extract_features, FeatureSet};
pub use network::{ReactionIdx, ReactionNetwork, ReactionRecord};
pub use select::{best_subpathway, select_best};
