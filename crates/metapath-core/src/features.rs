//! Per-(reaction, direction) scoring features.
//!
//! Six features, all derived deterministically from the parsed equation and
//! the pathway-membership count:
//!
//! - `atp_eq`: net triphosphate consumption, minus a 0.9/mole recovery credit
//!   for diphosphate/monophosphate carriers produced (regenerating ATP from
//!   ADP/AMP is not free)
//! - `redox_atp_eq`: reduced-cofactor stoichiometry converted to
//!   ATP-equivalents via fixed P/O ratios (2.5 for NAD(P)H, 1.5 for FADH2)
//! - `o2_consumed`: non-negative O2 coefficient on the consuming side
//! - `co2_released`: non-negative CO2 coefficient on the producing side
//! - `complexity`: distinct non-cofactor species across both sides
//! - `precedent`: `1 / (1 + pathway_count)`; a reaction with no catalogued
//!   pathway annotations scores a maximally novel 1.0
//!
//! Missing or malformed inputs degrade to neutral/zero contributions; feature
//! extraction never aborts a reaction.

use crate::cofactors::{compound_ids as cid, CofactorSet};
use crate::enumerate::Direction;
use crate::equation::CompoundId;
use crate::network::ReactionRecord;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Partial recovery credit per mole of ADP/AMP/GDP produced.
pub const RECOVERY_CREDIT: f64 = 0.9;

/// P/O ratio for NADH and NADPH.
pub const PO_NADH: f64 = 2.5;

/// P/O ratio for FADH2-equivalent carriers.
pub const PO_FADH2: f64 = 1.5;

/// The six scoring features for one reaction in one polarity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureSet {
    pub atp_eq: f64,
    pub redox_atp_eq: f64,
    pub o2_consumed: f64,
    pub co2_released: f64,
    pub complexity: f64,
    pub precedent: f64,
}

/// Moles of `ids` on the left side minus the right side.
fn net(
    left: &HashMap<CompoundId, f64>,
    right: &HashMap<CompoundId, f64>,
    ids: &[&str],
) -> f64 {
    let sum = |side: &HashMap<CompoundId, f64>| -> f64 {
        ids.iter().map(|c| side.get(*c).copied().unwrap_or(0.0)).sum()
    };
    sum(left) - sum(right)
}

/// Distinct non-cofactor species across both sides.
fn complexity(
    left: &HashMap<CompoundId, f64>,
    right: &HashMap<CompoundId, f64>,
    cofactors: &CofactorSet,
) -> f64 {
    let species: HashSet<&str> = left
        .keys()
        .chain(right.keys())
        .map(String::as_str)
        .filter(|c| !cofactors.contains(c))
        .collect();
    species.len() as f64
}

/// Pure function of (record, direction, cofactor set) -> features.
///
/// `Reverse` swaps the consuming and producing sides before any feature is
/// computed, flipping the sign of the net-consumption features.
pub fn extract_features(
    record: &ReactionRecord,
    direction: Direction,
    cofactors: &CofactorSet,
) -> FeatureSet {
    let eq = &record.equation;
    let (left, right) = match direction {
        Direction::Forward => (&eq.substrates, &eq.products),
        Direction::Reverse => (&eq.products, &eq.substrates),
    };

    let triphosphates = [cid::ATP, cid::GTP, cid::UTP, cid::CTP];
    let recovery = [cid::ADP, cid::AMP, cid::GDP];
    let atp_eq = net(left, right, &triphosphates) - RECOVERY_CREDIT * net(left, right, &recovery);

    let reduced_consumed = PO_NADH * net(left, right, &[cid::NADH])
        + PO_NADH * net(left, right, &[cid::NADPH])
        + PO_FADH2 * net(left, right, &[cid::FADH2]);
    let oxidized_produced = PO_NADH * net(right, left, &[cid::NAD_PLUS, cid::NADP_PLUS])
        + PO_FADH2 * net(right, left, &[cid::FAD]);
    let redox_atp_eq = reduced_consumed - oxidized_produced;

    let o2_consumed = net(left, right, &[cid::O2]).max(0.0);
    let co2_released = net(right, left, &[cid::CO2]).max(0.0);

    FeatureSet {
        atp_eq,
        redox_atp_eq,
        o2_consumed,
        co2_released,
        complexity: complexity(left, right, cofactors),
        precedent: 1.0 / (1.0 + f64::from(record.pathway_count)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn record(eq: &str, pathway_count: u32) -> ReactionRecord {
        ReactionRecord::new("R99999", eq, pathway_count)
    }

    #[test]
    fn worked_example_releases_one_co2_forward() {
        let r = record("C00022 + C00003 <=> C00024 + C00004 + C00011", 0);
        let f = extract_features(&r, Direction::Forward, &CofactorSet::default());
        assert_relative_eq!(f.co2_released, 1.0);
        assert_relative_eq!(f.o2_consumed, 0.0);
    }

    #[test]
    fn atp_consumption_costs_more_than_adp_recovery_credits_back() {
        // One ATP in, one ADP out: net 1 - 0.9 = 0.1 ATP-equivalents.
        let r = record("C00002 + C00022 <=> C00008 + C00186", 0);
        let f = extract_features(&r, Direction::Forward, &CofactorSet::default());
        assert_relative_eq!(f.atp_eq, 1.0 - RECOVERY_CREDIT);
    }

    #[test]
    fn reverse_direction_flips_net_consumption() {
        let r = record("C00002 + C00022 <=> C00008 + C00186", 0);
        let fwd = extract_features(&r, Direction::Forward, &CofactorSet::default());
        let rev = extract_features(&r, Direction::Reverse, &CofactorSet::default());
        assert_relative_eq!(rev.atp_eq, -fwd.atp_eq);
    }

    #[test]
    fn nadh_consumption_converts_at_po_two_point_five() {
        // NADH consumed, NAD+ produced.
        let r = record("C00004 + C00007 <=> C00003 + C00001", 0);
        let f = extract_features(&r, Direction::Forward, &CofactorSet::default());
        // 2.5 * 1 consumed NADH, minus 2.5 * 1 produced NAD+.
        assert_relative_eq!(f.redox_atp_eq, 0.0);
        assert_relative_eq!(f.o2_consumed, 1.0);
    }

    #[test]
    fn fadh2_uses_the_lower_po_ratio() {
        // FADH2 consumed with no FAD produced on the other side.
        let r = record("C01352 + C00033 <=> C00042", 0);
        let f = extract_features(&r, Direction::Forward, &CofactorSet::default());
        assert_relative_eq!(f.redox_atp_eq, PO_FADH2);
    }

    #[test]
    fn o2_and_co2_features_are_never_negative() {
        // O2 produced, CO2 consumed: both clamp to zero.
        let r = record("C00011 + C00001 <=> C00007 + C00033", 0);
        let f = extract_features(&r, Direction::Forward, &CofactorSet::default());
        assert_relative_eq!(f.o2_consumed, 0.0);
        assert_relative_eq!(f.co2_released, 0.0);
    }

    #[test]
    fn complexity_counts_distinct_non_cofactor_species() {
        // ATP/ADP/H2O are cofactors; C00022, C00186, C00033 are not.
        let r = record("C00002 + C00022 + C00033 <=> C00008 + C00186 + C00001", 0);
        let f = extract_features(&r, Direction::Forward, &CofactorSet::default());
        assert_relative_eq!(f.complexity, 3.0);
    }

    #[test]
    fn precedent_defaults_to_maximally_novel() {
        let f = extract_features(
            &record("C00022 <=> C00186", 0),
            Direction::Forward,
            &CofactorSet::default(),
        );
        assert_relative_eq!(f.precedent, 1.0);
    }

    #[test]
    fn precedent_decays_with_pathway_membership() {
        let f = extract_features(
            &record("C00022 <=> C00186", 9),
            Direction::Forward,
            &CofactorSet::default(),
        );
        assert_relative_eq!(f.precedent, 0.1);
    }

    #[test]
    fn unparseable_equation_degrades_to_neutral_features() {
        let f = extract_features(
            &record("garbled entry", 0),
            Direction::Forward,
            &CofactorSet::default(),
        );
        assert_relative_eq!(f.atp_eq, 0.0);
        assert_relative_eq!(f.redox_atp_eq, 0.0);
        assert_relative_eq!(f.o2_consumed, 0.0);
        assert_relative_eq!(f.co2_released, 0.0);
        assert_relative_eq!(f.complexity, 0.0);
        assert_relative_eq!(f.precedent, 1.0);
    }
}
