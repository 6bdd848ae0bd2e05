// ABOUTME: KeywordSelector - picks the first tool whose name occurs in the query,
// ABOUTME: falling back to the first registered tool.

use async_trait::async_trait;

use super::{Selection, SelectionStrategy};
use crate::error::SelectionError;
use crate::tool::Registry;

pub const MATCH_NOTE: &str = "Simulated response.";
pub const FALLBACK_NOTE: &str = "Simulated fallback response.";

/// Deterministic keyword-containment heuristic.
///
/// Scans tools in registration order and selects the first whose name,
/// ignoring case, is a substring of the query. Multi-word names are matched
/// as a whole phrase.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordSelector;

impl KeywordSelector {
    pub fn choose(&self, query: &str, registry: &Registry) -> Result<Selection, SelectionError> {
        let query = query.to_lowercase();

        if let Some(descriptor) = registry
            .iter()
            .find(|d| query.contains(&d.name().to_lowercase()))
        {
            tracing::debug!(tool = descriptor.name(), "keyword match");
            return Ok(Selection::new(descriptor, MATCH_NOTE));
        }

        let descriptor = registry.first().ok_or(SelectionError::NoToolsAvailable)?;
        tracing::debug!(tool = descriptor.name(), "no keyword match, using first tool");
        Ok(Selection::new(descriptor, FALLBACK_NOTE))
    }
}

#[async_trait]
impl SelectionStrategy for KeywordSelector {
    async fn select(&self, query: &str, registry: &Registry) -> Result<Selection, SelectionError> {
        self.choose(query, registry)
    }
}
