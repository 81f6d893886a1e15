//! Weight configuration and chain scoring.
//!
//! A step's cost is the linear combination
//!
//! ```text
//! alpha*atp_eq + beta*redox_atp_eq + gamma*o2 + delta*co2
//!     + epsilon*complexity + zeta*precedent
//! ```
//!
//! and a chain's cost is the plain sum of its step costs, with no length
//! normalization: longer chains are penalized only through their constituent
//! steps' own costs.

use crate::cofactors::CofactorSet;
use crate::enumerate::{Step, SubPathway};
use crate::error::CoreError;
use crate::features::{extract_features, FeatureSet};
use crate::network::ReactionNetwork;
use serde::{Deserialize, Serialize};

/// Scoring weights. Immutable configuration, passed explicitly; validate with
/// [`Weights::validate`] before scoring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weights {
    /// ATP-equivalent delta.
    pub alpha: f64,
    /// Redox ATP-equivalent delta.
    pub beta: f64,
    /// O2 consumption.
    pub gamma: f64,
    /// CO2 release.
    pub delta: f64,
    /// Complexity count.
    pub epsilon: f64,
    /// Precedent score.
    pub zeta: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            beta: 1.0,
            gamma: 0.3,
            delta: 0.25,
            epsilon: 0.20,
            zeta: 1.0,
        }
    }
}

impl Weights {
    /// Reject negative or non-finite weights before any scoring happens.
    pub fn validate(&self) -> Result<(), CoreError> {
        let fields = [
            ("alpha", self.alpha),
            ("beta", self.beta),
            ("gamma", self.gamma),
            ("delta", self.delta),
            ("epsilon", self.epsilon),
            ("zeta", self.zeta),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(CoreError::InvalidWeights { name, value });
            }
        }
        Ok(())
    }

    /// Linear per-step cost.
    pub fn step_cost(&self, features: &FeatureSet) -> f64 {
        self.alpha * features.atp_eq
            + self.beta * features.redox_atp_eq
            + self.gamma * features.o2_consumed
            + self.delta * features.co2_released
            + self.epsilon * features.complexity
            + self.zeta * features.precedent
    }
}

/// One scored step: the step, its features and its cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredStep {
    pub step: Step,
    pub features: FeatureSet,
    pub cost: f64,
}

/// A scored chain. Invariant: `total` is exactly the ordered sum of the
/// per-step costs; there are no hidden adjustment terms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredChain {
    pub pathway: SubPathway,
    pub steps: Vec<ScoredStep>,
    pub total: f64,
}

/// Score every step of a sub-pathway and sum into a total.
pub fn score_chain(
    network: &ReactionNetwork,
    pathway: &SubPathway,
    weights: &Weights,
    cofactors: &CofactorSet,
) -> ScoredChain {
    let mut steps = Vec::with_capacity(pathway.len());
    let mut total = 0.0;
    for &step in pathway.steps() {
        let record = network.record(step.reaction);
        let features = extract_features(record, step.direction, cofactors);
        let cost = weights.step_cost(&features);
        total += cost;
        steps.push(ScoredStep {
            step,
            features,
            cost,
        });
    }
    ScoredChain {
        pathway: pathway.clone(),
        steps,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enumerate::{enumerate_subpathways, DfsLimits};
    use crate::network::ReactionRecord;
    use approx::assert_relative_eq;

    fn network(equations: &[(&str, &str)]) -> ReactionNetwork {
        let records = equations
            .iter()
            .map(|(id, eq)| ReactionRecord::new(*id, *eq, 0))
            .collect();
        ReactionNetwork::build(records, CofactorSet::default())
    }

    #[test]
    fn default_weights_match_the_published_model() {
        let w = Weights::default();
        assert_relative_eq!(w.alpha, 1.0);
        assert_relative_eq!(w.beta, 1.0);
        assert_relative_eq!(w.gamma, 0.3);
        assert_relative_eq!(w.delta, 0.25);
        assert_relative_eq!(w.epsilon, 0.20);
        assert_relative_eq!(w.zeta, 1.0);
    }

    #[test]
    fn negative_weight_is_rejected_at_configuration_time() {
        let w = Weights {
            gamma: -0.3,
            ..Weights::default()
        };
        assert_eq!(
            w.validate(),
            Err(CoreError::InvalidWeights {
                name: "gamma",
                value: -0.3
            })
        );
    }

    #[test]
    fn non_finite_weight_is_rejected() {
        let w = Weights {
            zeta: f64::NAN,
            ..Weights::default()
        };
        assert!(matches!(
            w.validate(),
            Err(CoreError::InvalidWeights { name: "zeta", .. })
        ));
        let w = Weights {
            alpha: f64::INFINITY,
            ..Weights::default()
        };
        assert!(w.validate().is_err());
    }

    #[test]
    fn default_weights_validate() {
        assert!(Weights::default().validate().is_ok());
    }

    #[test]
    fn chain_total_equals_sum_of_step_costs_exactly() {
        let net = network(&[
            ("R1", "C00022 <=> C00186"),
            ("R2", "C00186 + C00002 <=> C00033 + C00008"),
            ("R3", "C00033 <=> C00042 + C00011"),
        ]);
        let weights = Weights::default();
        let cofactors = CofactorSet::default();
        for pathway in enumerate_subpathways(&net, "C00022", DfsLimits::default()) {
            let scored = score_chain(&net, &pathway, &weights, &cofactors);
            let sum: f64 = scored.steps.iter().map(|s| s.cost).sum();
            assert_eq!(scored.total, sum);
            assert_eq!(scored.steps.len(), pathway.len());
        }
    }

    #[test]
    fn step_cost_is_the_weighted_feature_sum() {
        let features = FeatureSet {
            atp_eq: 2.0,
            redox_atp_eq: -1.0,
            o2_consumed: 1.0,
            co2_released: 2.0,
            complexity: 5.0,
            precedent: 0.5,
        };
        let cost = Weights::default().step_cost(&features);
        assert_relative_eq!(cost, 2.0 - 1.0 + 0.3 + 0.5 + 1.0 + 0.5);
    }
}
