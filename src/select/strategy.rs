// ABOUTME: Defines the SelectionStrategy trait and the Selection it returns.
// ABOUTME: Callers depend only on this interface, never on a concrete chooser.

use async_trait::async_trait;
use serde::Serialize;

use crate::error::SelectionError;
use crate::tool::{Descriptor, Registry};

/// A chosen tool and why it was chosen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    pub selected_tool: String,
    pub description: String,
    pub note: String,
}

impl Selection {
    pub fn new(descriptor: &Descriptor, note: impl Into<String>) -> Self {
        Self {
            selected_tool: descriptor.name().to_string(),
            description: descriptor.description().to_string(),
            note: note.into(),
        }
    }
}

/// Picks a tool for a free-text query.
///
/// Implementations read the registry only. The only error callers should see
/// is [`SelectionError::NoToolsAvailable`].
#[async_trait]
pub trait SelectionStrategy: Send + Sync {
    async fn select(&self, query: &str, registry: &Registry) -> Result<Selection, SelectionError>;
}
