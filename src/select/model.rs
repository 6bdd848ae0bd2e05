// ABOUTME: ModelSelector - asks a language model to pick a tool, falling back
// ABOUTME: to the keyword heuristic when the model fails or answers off-list.

use async_trait::async_trait;

use super::{KeywordSelector, Selection, SelectionStrategy};
use crate::error::SelectionError;
use crate::tool::{Descriptor, Registry};

pub const MODEL_NOTE: &str = "Model response.";

/// System prompt sent with every selection request.
pub const SELECTION_SYSTEM_PROMPT: &str = "You route user requests to tools. \
Reply with the exact name of the single best tool from the list and nothing else.";

/// A text-completion backend used for tool selection.
#[async_trait]
pub trait ModelBackend: Send + Sync {
    /// Complete `prompt` under `system` and return the reply text.
    async fn complete(&self, system: &str, prompt: &str) -> Result<String, SelectionError>;
}

/// Model-backed selection strategy.
pub struct ModelSelector<B> {
    backend: B,
    fallback: KeywordSelector,
}

impl<B: ModelBackend> ModelSelector<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            fallback: KeywordSelector,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

#[async_trait]
impl<B: ModelBackend> SelectionStrategy for ModelSelector<B> {
    async fn select(&self, query: &str, registry: &Registry) -> Result<Selection, SelectionError> {
        if registry.is_empty() {
            return Err(SelectionError::NoToolsAvailable);
        }

        let prompt = build_prompt(query, registry);
        match self.backend.complete(SELECTION_SYSTEM_PROMPT, &prompt).await {
            Ok(reply) => match resolve_reply(&reply, registry) {
                Some(descriptor) => {
                    tracing::debug!(tool = descriptor.name(), "model selected tool");
                    return Ok(Selection::new(descriptor, MODEL_NOTE));
                }
                None => tracing::warn!(reply = %reply, "model named no registered tool"),
            },
            Err(e) => tracing::warn!(error = %e, "model selection failed"),
        }

        self.fallback.choose(query, registry)
    }
}

/// Render the user prompt: the tool catalog followed by the query.
pub fn build_prompt(query: &str, registry: &Registry) -> String {
    let mut prompt = String::from("Available tools:\n");
    for descriptor in registry.iter() {
        prompt.push_str(&format!(
            "- {}: {}\n",
            descriptor.name(),
            descriptor.description()
        ));
    }
    prompt.push_str("\nRequest: ");
    prompt.push_str(query);
    prompt
}

/// Map a model reply onto a registered tool.
///
/// Takes the first non-blank line, strips surrounding quotes and punctuation,
/// then looks it up ignoring case.
pub fn resolve_reply<'a>(reply: &str, registry: &'a Registry) -> Option<&'a Descriptor> {
    let line = reply.lines().map(str::trim).find(|l| !l.is_empty())?;
    let name = line.trim_matches(|c: char| {
        c.is_whitespace() || matches!(c, '"' | '\'' | '`' | '*' | '.' | '!')
    });
    registry.get(name)
}
