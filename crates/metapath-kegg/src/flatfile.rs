//! Parsers for KEGG REST flat-file replies.
//!
//! Two shapes matter here:
//!
//! - **Link tables** (`/link/reaction/map00720`): tab-separated
//!   `from\tto` rows where both columns carry a `db:` prefix
//!   (`path:map00720\trn:R00199`).
//! - **Keyed entries** (`/get/rn:R00199`): a 12-column keyword layout where
//!   the key occupies the first 12 characters and continuation lines are
//!   indented past the key column:
//!
//! ```text
//! ENTRY       R00199                      Reaction
//! EQUATION    C00022 + C00002 + C00001 <=> C00074 + C00020 + C00009
//! PATHWAY     rn00620  Pyruvate metabolism
//!             rn00720  Other carbon fixation pathways
//! ```
//!
//! These parsers are total: malformed rows are skipped, a missing EQUATION
//! line yields an entry with empty equation text. Upstream data is known to
//! be irregular for a minority of records and a bad row must never abort a
//! whole batch.

use metapath_core::ReactionId;
use serde::{Deserialize, Serialize};

/// Width of the keyword column in KEGG flat-file entries.
const KEY_WIDTH: usize = 12;

/// The fields of one `get/rn:...` reply the engine cares about.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionEntry {
    /// ENTRY id (`R00199`), when present.
    pub id: Option<ReactionId>,
    /// Joined EQUATION text; empty when the entry carries none.
    pub equation_text: String,
    /// Distinct PATHWAY map ids, in entry order.
    pub pathway_maps: Vec<String>,
}

impl ReactionEntry {
    /// Number of distinct pathway maps; drives the precedent feature.
    pub fn pathway_count(&self) -> u32 {
        self.pathway_maps.len() as u32
    }
}

/// Strip a `db:` prefix (`rn:`, `cpd:`, `path:`) from a token.
fn strip_db_prefix(token: &str) -> &str {
    match token.split_once(':') {
        Some((_, id)) => id,
        None => token,
    }
}

/// Does this line open a new keyword field (`ENTRY`, `EQUATION`, ...)?
fn is_key_line(line: &str) -> bool {
    let mut chars = line.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_uppercase())
}

/// Parse a link-table reply into the target-column ids, prefixes stripped.
///
/// `link/reaction/map00720` rows look like `path:map00720\trn:R00199`; the
/// result here would be `["R00199", ...]`. Rows without a second column are
/// skipped.
pub fn parse_link_targets(text: &str) -> Vec<String> {
    text.lines()
        .filter_map(|line| {
            let mut cols = line.split('\t');
            let _from = cols.next()?;
            let to = cols.next()?.trim();
            if to.is_empty() {
                None
            } else {
                Some(strip_db_prefix(to).to_string())
            }
        })
        .collect()
}

/// Parse a `list/reaction` reply into `(reaction id, equation text)` pairs.
///
/// Rows look like `rn:R00199\t<names>; <equation>`; the equation is whatever
/// follows the first `;`. Rows without one yield empty equation text, which
/// later becomes an isolated record rather than an error.
pub fn parse_list_reply(text: &str) -> Vec<(ReactionId, String)> {
    text.lines()
        .filter_map(|line| {
            let (id, description) = line.split_once('\t')?;
            let id = strip_db_prefix(id.trim());
            if id.is_empty() {
                return None;
            }
            let equation = description
                .split_once(';')
                .map(|(_, eq)| eq.trim().to_string())
                .unwrap_or_default();
            Some((id.to_string(), equation))
        })
        .collect()
}

/// Parse a keyed `get/rn:...` entry into a [`ReactionEntry`].
pub fn parse_reaction_entry(raw: &str) -> ReactionEntry {
    let mut entry = ReactionEntry::default();
    let mut key = String::new();

    for line in raw.lines() {
        if line.trim().is_empty() || line.starts_with("///") {
            continue;
        }
        let value = if is_key_line(line) {
            let split = line
                .char_indices()
                .map(|(i, _)| i)
                .find(|&i| i >= KEY_WIDTH)
                .unwrap_or(line.len());
            key = line[..split].trim().to_string();
            line[split..].trim().to_string()
        } else {
            line.trim().to_string()
        };

        match key.as_str() {
            "ENTRY" => {
                if entry.id.is_none() {
                    entry.id = value.split_whitespace().next().map(str::to_string);
                }
            }
            "EQUATION" => {
                if entry.equation_text.is_empty() {
                    entry.equation_text = value;
                } else {
                    entry.equation_text.push(' ');
                    entry.equation_text.push_str(&value);
                }
            }
            "PATHWAY" => {
                if let Some(map_id) = value.split_whitespace().next() {
                    let map_id = map_id.to_string();
                    if !entry.pathway_maps.contains(&map_id) {
                        entry.pathway_maps.push(map_id);
                    }
                }
            }
            _ => {}
        }
    }

    entry
}
