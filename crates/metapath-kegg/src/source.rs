//! The record-source capability and bulk loading.
//!
//! The engine treats record retrieval as potentially slow and rate-limited,
//! so the required usage pattern is: resolve the reaction id list for a map,
//! bulk-load every entry with [`load_records`], then run enumeration/scoring
//! over the already-resident records. Nothing in the engine's inner loop
//! awaits.

use crate::flatfile::ReactionEntry;
use async_trait::async_trait;
use metapath_core::{parse_equation, ReactionId, ReactionRecord};
use std::collections::{HashMap, HashSet};
use thiserror::Error;
use tracing::{debug, warn};

/// Collaborator-side failures. Per-record entry failures are absorbed by
/// [`load_records`]; these only surface from the id-resolution queries and
/// the HTTP client itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    #[error("KEGG request failed: {0}")]
    Request(String),

    #[error("KEGG replied with status {status} for {path}")]
    Status { path: String, status: u16 },

    #[error("unknown identifier: {0}")]
    NotFound(String),
}

/// Read access to reaction/pathway records, by capability:
/// map -> reactions, compound -> reactions, reaction -> entry.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Reaction ids belonging to a pathway map (`map00720`).
    async fn reactions_in_map(&self, map: &str) -> Result<Vec<ReactionId>, SourceError>;

    /// Reaction ids in which a compound participates (either role).
    async fn reactions_for_compound(&self, compound: &str)
        -> Result<Vec<ReactionId>, SourceError>;

    /// Raw equation text and pathway membership for one reaction.
    async fn reaction_entry(&self, reaction: &str) -> Result<ReactionEntry, SourceError>;
}

/// Bulk-load reaction records for the engine.
///
/// A failed or missing entry degrades to a record with empty equation text:
/// it parses to an empty equation, becomes adjacency-isolated and is pruned
/// naturally by the traversal instead of aborting the batch.
pub async fn load_records(source: &dyn RecordSource, ids: &[ReactionId]) -> Vec<ReactionRecord> {
    let mut records = Vec::with_capacity(ids.len());
    for id in ids {
        match source.reaction_entry(id).await {
            Ok(entry) => {
                let pathway_count = entry.pathway_count();
                records.push(ReactionRecord::new(
                    id.clone(),
                    entry.equation_text,
                    pathway_count,
                ));
            }
            Err(err) => {
                warn!(reaction = %id, error = %err, "entry fetch failed; keeping isolated record");
                records.push(ReactionRecord::new(id.clone(), "", 0));
            }
        }
    }
    debug!(
        loaded = records.len(),
        isolated = records.iter().filter(|r| r.is_isolated()).count(),
        "bulk record load complete"
    );
    records
}

/// Reactions of `map` that consume `seed` as a substrate.
///
/// Intersects the map's reaction list with the compound's, then keeps only
/// reactions whose parsed substrate side actually contains the seed: a
/// reaction where the seed appears only as a product is not a valid start.
/// Entries that fail to fetch are skipped, not fatal.
pub async fn seed_start_reactions(
    source: &dyn RecordSource,
    map: &str,
    seed: &str,
) -> Result<Vec<ReactionId>, SourceError> {
    let in_map = source.reactions_in_map(map).await?;
    let with_seed = source.reactions_for_compound(seed).await?;
    let map_set: HashSet<&ReactionId> = in_map.iter().collect();

    let mut starts = Vec::new();
    for id in with_seed.iter().filter(|id| map_set.contains(id)) {
        let entry = match source.reaction_entry(id).await {
            Ok(entry) => entry,
            Err(err) => {
                warn!(reaction = %id, error = %err, "skipping unreadable seed candidate");
                continue;
            }
        };
        if parse_equation(&entry.equation_text)
            .substrates
            .contains_key(seed)
        {
            starts.push(id.clone());
        }
    }
    Ok(starts)
}

/// In-memory record source for tests and offline fixtures.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    maps: HashMap<String, Vec<ReactionId>>,
    compounds: HashMap<String, Vec<ReactionId>>,
    entries: HashMap<ReactionId, ReactionEntry>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_map<I, S>(mut self, map: &str, reactions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<ReactionId>,
    {
        self.maps
            .insert(map.to_string(), reactions.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_compound<I, S>(mut self, compound: &str, reactions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<ReactionId>,
    {
        self.compounds.insert(
            compound.to_string(),
            reactions.into_iter().map(Into::into).collect(),
        );
        self
    }

    /// Register an entry from raw equation text and pathway map ids.
    pub fn with_entry<I, S>(mut self, reaction: &str, equation_text: &str, pathway_maps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries.insert(
            reaction.to_string(),
            ReactionEntry {
                id: Some(reaction.to_string()),
                equation_text: equation_text.to_string(),
                pathway_maps: pathway_maps.into_iter().map(Into::into).collect(),
            },
        );
        self
    }
}

#[async_trait]
impl RecordSource for InMemorySource {
    async fn reactions_in_map(&self, map: &str) -> Result<Vec<ReactionId>, SourceError> {
        self.maps
            .get(map)
            .cloned()
            .ok_or_else(|| SourceError::NotFound(map.to_string()))
    }

    async fn reactions_for_compound(
        &self,
        compound: &str,
    ) -> Result<Vec<ReactionId>, SourceError> {
        self.compounds
            .get(compound)
            .cloned()
            .ok_or_else(|| SourceError::NotFound(compound.to_string()))
    }

    async fn reaction_entry(&self, reaction: &str) -> Result<ReactionEntry, SourceError> {
        self.entries
            .get(reaction)
            .cloned()
            .ok_or_else(|| SourceError::NotFound(reaction.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toy_source() -> InMemorySource {
        InMemorySource::new()
            .with_map("map00720", ["R1", "R2", "R3"])
            .with_compound("C00022", ["R1", "R3", "R9"])
            .with_entry("R1", "C00022 <=> C00186", ["rn00620"])
            .with_entry("R2", "C00186 <=> C00033", ["rn00620", "rn00720"])
            .with_entry("R3", "C00033 <=> C00022", ["rn00720"])
    }

    #[tokio::test]
    async fn load_records_degrades_missing_entries_to_isolated_records() {
        let source = toy_source();
        let ids: Vec<ReactionId> = vec!["R1".into(), "Rmissing".into()];
        let records = load_records(&source, &ids).await;
        assert_eq!(records.len(), 2);
        assert!(!records[0].is_isolated());
        assert!(records[1].is_isolated());
        assert_eq!(records[1].id, "Rmissing");
    }

    #[tokio::test]
    async fn load_records_carries_pathway_counts() {
        let source = toy_source();
        let ids: Vec<ReactionId> = vec!["R2".into()];
        let records = load_records(&source, &ids).await;
        assert_eq!(records[0].pathway_count, 2);
    }

    #[tokio::test]
    async fn seed_starts_require_map_membership_and_substrate_role() {
        let source = toy_source();
        // R1 consumes the seed; R3 only produces it; R9 is not in the map.
        let starts = seed_start_reactions(&source, "map00720", "C00022")
            .await
            .expect("map and compound exist");
        assert_eq!(starts, vec!["R1".to_string()]);
    }

    #[tokio::test]
    async fn unknown_map_surfaces_not_found() {
        let source = toy_source();
        let err = seed_start_reactions(&source, "map99999", "C00022")
            .await
            .unwrap_err();
        assert_eq!(err, SourceError::NotFound("map99999".to_string()));
    }
}
