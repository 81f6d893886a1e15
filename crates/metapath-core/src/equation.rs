//! Reaction equation parsing.
//!
//! KEGG reaction entries carry an `EQUATION` line in the canonical form
//! `LHS (=>|<=>) RHS`, where each side is a `+`-separated list of
//! optional-coefficient compound terms:
//!
//! ```text
//! C00022 + C00003 <=> C00024 + C00004 + C00011
//! 2 C00002 + C00064 => 2 C00008 + C00169
//! ```
//!
//! A minority of upstream records are irregular (missing equation, no
//! recognized arrow, stray annotation text). Parsing therefore never fails:
//! unparseable text degrades to an equation with empty sides and the default
//! sign, which later renders the reaction adjacency-isolated instead of
//! aborting a whole batch.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;

/// Opaque KEGG compound token (`C00022`, glycan `G` ids, or a bare name).
pub type CompoundId = String;

/// Opaque KEGG reaction token (`R00199`).
pub type ReactionId = String;

/// Reversibility sign parsed from the equation arrow.
///
/// `<=>` is reversible (sign +1), `=>` irreversible (sign -1). Text without a
/// recognized arrow defaults to reversible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reversibility {
    #[default]
    Reversible,
    Irreversible,
}

impl Reversibility {
    pub const fn sign(self) -> i8 {
        match self {
            Reversibility::Reversible => 1,
            Reversibility::Irreversible => -1,
        }
    }
}

/// A parsed reaction equation: substrate and product multisets plus sign.
///
/// Duplicate compound terms on one side accumulate their coefficients.
/// Coefficients default to 1.0 when omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Equation {
    pub substrates: HashMap<CompoundId, f64>,
    pub products: HashMap<CompoundId, f64>,
    pub reversibility: Reversibility,
}

impl Equation {
    /// True when both sides are empty, i.e. the source text failed to parse.
    pub fn is_empty(&self) -> bool {
        self.substrates.is_empty() && self.products.is_empty()
    }
}

fn coeff_token() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*(\d+(?:\.\d+)?)\s+(\S.*)$").expect("coeff regex"))
}

fn cid_token() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"C\d{5}").expect("cid regex"))
}

/// Parse one side of an equation (`2 C00002 + C00003`) into a multiset.
fn parse_side(side: &str) -> HashMap<CompoundId, f64> {
    let mut out: HashMap<CompoundId, f64> = HashMap::new();
    for term in side.split('+') {
        let term = term.trim();
        if term.is_empty() {
            continue;
        }
        let (coeff, rest) = match coeff_token().captures(term) {
            Some(caps) => {
                // The numeric pattern cannot fail to parse once matched.
                let coeff = caps[1].parse::<f64>().unwrap_or(1.0);
                (coeff, caps.get(2).map(|m| m.as_str()).unwrap_or(term))
            }
            None => (1.0, term),
        };
        // Prefer the canonical C-number when present (terms like `C00002(n)`
        // carry polymer annotations); otherwise keep the bare token as an
        // opaque identifier so glycan/generic species still participate.
        let id = match cid_token().find(rest) {
            Some(m) => m.as_str().to_string(),
            None => rest.trim().to_string(),
        };
        *out.entry(id).or_insert(0.0) += coeff;
    }
    out
}

/// Parse raw equation text into an [`Equation`].
///
/// This is total: missing/empty text or text without a recognized arrow
/// yields an equation with empty sides and sign +1 rather than an error.
pub fn parse_equation(text: &str) -> Equation {
    let text = text.trim();
    let (lhs, rhs, reversibility) = if let Some((l, r)) = text.split_once("<=>") {
        (l, r, Reversibility::Reversible)
    } else if let Some((l, r)) = text.split_once("=>") {
        (l, r, Reversibility::Irreversible)
    } else {
        return Equation::default();
    };
    Equation {
        substrates: parse_side(lhs),
        products: parse_side(rhs),
        reversibility,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_reversible_equation_with_unit_coefficients() {
        let eq = parse_equation("C00022 + C00003 <=> C00024 + C00004 + C00011");
        assert_eq!(eq.reversibility, Reversibility::Reversible);
        assert_eq!(eq.reversibility.sign(), 1);
        assert_eq!(eq.substrates.len(), 2);
        assert_eq!(eq.substrates["C00022"], 1.0);
        assert_eq!(eq.substrates["C00003"], 1.0);
        assert_eq!(eq.products.len(), 3);
        assert_eq!(eq.products["C00024"], 1.0);
        assert_eq!(eq.products["C00004"], 1.0);
        assert_eq!(eq.products["C00011"], 1.0);
    }

    #[test]
    fn parses_irreversible_arrow_with_sign_minus_one() {
        let eq = parse_equation("C00031 => C00267");
        assert_eq!(eq.reversibility, Reversibility::Irreversible);
        assert_eq!(eq.reversibility.sign(), -1);
    }

    #[test]
    fn explicit_coefficients_are_honored() {
        let eq = parse_equation("2 C00002 + C00064 <=> 2 C00008 + C00169");
        assert_eq!(eq.substrates["C00002"], 2.0);
        assert_eq!(eq.substrates["C00064"], 1.0);
        assert_eq!(eq.products["C00008"], 2.0);
    }

    #[test]
    fn duplicate_terms_accumulate_instead_of_overwriting() {
        let eq = parse_equation("C00001 + 2 C00001 <=> C00007");
        assert_eq!(eq.substrates["C00001"], 3.0);
    }

    #[test]
    fn arrowless_text_degrades_to_empty_equation() {
        let eq = parse_equation("no arrow in sight");
        assert!(eq.is_empty());
        assert_eq!(eq.reversibility, Reversibility::Reversible);
    }

    #[test]
    fn empty_text_degrades_to_empty_equation() {
        assert!(parse_equation("").is_empty());
        assert!(parse_equation("   ").is_empty());
    }

    #[test]
    fn annotated_terms_resolve_to_their_c_number() {
        let eq = parse_equation("C00002(n) <=> C00008(n)");
        assert_eq!(eq.substrates["C00002"], 1.0);
        assert_eq!(eq.products["C00008"], 1.0);
    }

    #[test]
    fn non_c_number_tokens_survive_as_opaque_ids() {
        let eq = parse_equation("G10619 <=> G10620");
        assert_eq!(eq.substrates["G10619"], 1.0);
        assert_eq!(eq.products["G10620"], 1.0);
    }
}
