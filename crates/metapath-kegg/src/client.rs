//! HTTP client for the KEGG REST API (feature `http`).
//!
//! KEGG asks automated clients to stay polite; the client sleeps a fixed
//! delay before every request (200 ms by default, matching long-standing
//! practice against `rest.kegg.jp`). Retry policy belongs to the caller; a
//! failed request surfaces as a [`SourceError`] and, inside
//! [`crate::load_records`], degrades to an isolated record.

use crate::flatfile::{parse_link_targets, parse_reaction_entry, ReactionEntry};
use crate::source::{RecordSource, SourceError};
use async_trait::async_trait;
use metapath_core::ReactionId;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://rest.kegg.jp";
pub const DEFAULT_DELAY: Duration = Duration::from_millis(200);

/// A polite `rest.kegg.jp` client. Base URL is overridable so tests can
/// point it at a local fixture server.
#[derive(Debug, Clone)]
pub struct KeggClient {
    http: reqwest::Client,
    base_url: String,
    delay: Duration,
}

impl Default for KeggClient {
    fn default() -> Self {
        Self::new()
    }
}

impl KeggClient {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            delay: DEFAULT_DELAY,
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    async fn get_text(&self, path: &str) -> Result<String, SourceError> {
        tokio::time::sleep(self.delay).await;
        let url = format!("{}/{}", self.base_url, path);
        debug!(%url, "kegg request");
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|err| SourceError::Request(err.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                path: path.to_string(),
                status: status.as_u16(),
            });
        }
        response
            .text()
            .await
            .map_err(|err| SourceError::Request(err.to_string()))
    }
}

#[async_trait]
impl RecordSource for KeggClient {
    async fn reactions_in_map(&self, map: &str) -> Result<Vec<ReactionId>, SourceError> {
        let text = self.get_text(&format!("link/reaction/{map}")).await?;
        Ok(parse_link_targets(&text))
    }

    async fn reactions_for_compound(
        &self,
        compound: &str,
    ) -> Result<Vec<ReactionId>, SourceError> {
        let text = self.get_text(&format!("link/reaction/{compound}")).await?;
        Ok(parse_link_targets(&text))
    }

    async fn reaction_entry(&self, reaction: &str) -> Result<ReactionEntry, SourceError> {
        let text = self.get_text(&format!("get/rn:{reaction}")).await?;
        Ok(parse_reaction_entry(&text))
    }
}
