//! KEGG compound id table and the cofactor exclusion set.
//!
//! Ubiquitous carrier species (energy, redox, water, protons...) would link
//! almost every reaction to almost every other one if they participated in
//! adjacency. The exclusion set removes them from both sides *before* the
//! product/substrate intersection, so only genuine metabolite hand-offs count
//! as graph edges.

use crate::equation::CompoundId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// KEGG compound ids for the carrier species the cost model cares about.
pub mod compound_ids {
    pub const H2O: &str = "C00001";
    pub const ATP: &str = "C00002";
    pub const NAD_PLUS: &str = "C00003";
    pub const NADH: &str = "C00004";
    pub const NADPH: &str = "C00005";
    pub const NADP_PLUS: &str = "C00006";
    pub const O2: &str = "C00007";
    pub const ADP: &str = "C00008";
    pub const PI: &str = "C00009";
    pub const COA: &str = "C00010";
    pub const CO2: &str = "C00011";
    pub const PPI: &str = "C00013";
    pub const NH3: &str = "C00014";
    pub const AMP: &str = "C00020";
    pub const GDP: &str = "C00035";
    pub const GTP: &str = "C00044";
    pub const CTP: &str = "C00063";
    pub const UTP: &str = "C00075";
    pub const H_PLUS: &str = "C00080";
    pub const FAD: &str = "C00016";
    pub const FADH2: &str = "C01352";
}

/// Immutable cofactor exclusion set, passed explicitly into adjacency and
/// feature computation so concurrent runs with different configurations
/// cannot interfere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CofactorSet {
    excluded: BTreeSet<CompoundId>,
}

impl Default for CofactorSet {
    /// The fixed default list: energy carriers (ATP/ADP/AMP, Pi, PPi), redox
    /// carriers (NAD(P)+/NAD(P)H), water, protons, CO2, the CoA carrier and
    /// the generic ammonium placeholder.
    fn default() -> Self {
        use compound_ids::*;
        Self::new([
            ATP, ADP, AMP, PI, PPI, NAD_PLUS, NADH, NADP_PLUS, NADPH, H2O, H_PLUS, CO2, COA, NH3,
        ])
    }
}

impl CofactorSet {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<CompoundId>,
    {
        Self {
            excluded: ids.into_iter().map(Into::into).collect(),
        }
    }

    /// An empty set, for callers that want unfiltered adjacency.
    pub fn none() -> Self {
        Self {
            excluded: BTreeSet::new(),
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.excluded.contains(id)
    }

    pub fn len(&self) -> usize {
        self.excluded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.excluded.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_set_covers_the_fixed_carrier_list() {
        let cof = CofactorSet::default();
        for id in [
            "C00002", "C00008", "C00020", "C00009", "C00013", "C00003", "C00004", "C00006",
            "C00005", "C00001", "C00080", "C00011", "C00010", "C00014",
        ] {
            assert!(cof.contains(id), "expected {id} in default cofactor set");
        }
        assert_eq!(cof.len(), 14);
    }

    #[test]
    fn default_set_does_not_exclude_ordinary_metabolites() {
        let cof = CofactorSet::default();
        assert!(!cof.contains("C00022")); // pyruvate
        assert!(!cof.contains("C00024")); // acetyl-CoA (the thioester, not the carrier)
        assert!(!cof.contains("C00007")); // O2 participates in adjacency
    }

    #[test]
    fn empty_set_excludes_nothing() {
        assert!(!CofactorSet::none().contains("C00002"));
    }
}
