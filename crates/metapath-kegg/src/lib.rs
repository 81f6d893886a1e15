//! KEGG collaborators for the metapath engine.
//!
//! The engine itself (`metapath-core`) is pure and synchronous; everything
//! slow or remote lives here:
//!
//! - `flatfile`: parsers for KEGG REST flat-file replies (link tables and
//!   keyed GET entries)
//! - `source`: the async [`RecordSource`] capability, bulk record loading and
//!   an in-memory implementation for tests and offline fixtures
//! - `client`: a polite rate-limited HTTP client for `rest.kegg.jp`
//!   (feature `http`)
//! - `highlight`: the presentation sink, building KEGG `show_pathway` overlay
//!   URLs from an ordered reaction list
//!
//! Usage pattern: fetch a map's reaction list, bulk-load every entry up
//! front with [`load_records`], then hand the records to the engine so its
//! inner loop never blocks.

#[cfg(feature = "http")]
pub mod client;
pub mod flatfile;
pub mod highlight;
pub mod source;

#[cfg(feature = "http")]
pub use client::KeggClient;
pub use flatfile::{parse_link_targets, parse_list_reply, parse_reaction_entry, ReactionEntry};
pub use highlight::highlight_url;
pub use source::{load_records, seed_start_reactions, InMemorySource, RecordSource, SourceError};
