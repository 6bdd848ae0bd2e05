// ABOUTME: Dispatcher - resolves a tool, marshals arguments, invokes it, and
// ABOUTME: converts every outcome into a structured payload.

use std::sync::Arc;

use serde_json::Value;

use super::{Payload, PayloadFormat, ToolDescription, marshal};
use crate::error::{SelectionError, ToolError};
use crate::select::{KeywordSelector, SelectionStrategy};
use crate::tool::{Registry, join_failure};

/// The dispatch surface over a read-only registry.
///
/// Holds no per-call state. Clones share the registry and strategy, so one
/// dispatcher can serve concurrent requests from many tasks.
///
/// Tool bodies run without a timeout. A body that never returns stalls the
/// request that called it, but each body runs in its own task, so requests to
/// other tools keep making progress.
///
/// The async operations spawn Tokio tasks, so they must be polled inside a
/// Tokio runtime.
#[derive(Clone)]
pub struct Dispatcher {
    registry: Arc<Registry>,
    strategy: Arc<dyn SelectionStrategy>,
    format: PayloadFormat,
}

impl Dispatcher {
    /// Create a dispatcher using the keyword selection heuristic.
    pub fn new(registry: impl Into<Arc<Registry>>) -> Self {
        Self {
            registry: registry.into(),
            strategy: Arc::new(KeywordSelector),
            format: PayloadFormat::default(),
        }
    }

    /// Replace the selection strategy.
    pub fn with_strategy(mut self, strategy: impl SelectionStrategy + 'static) -> Self {
        self.strategy = Arc::new(strategy);
        self
    }

    /// Replace the selection strategy with a shared one.
    pub fn with_strategy_arc(mut self, strategy: Arc<dyn SelectionStrategy>) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set how the `*_json` operations render payloads.
    pub fn with_format(mut self, format: PayloadFormat) -> Self {
        self.format = format;
        self
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// All tool names in registration order.
    pub fn list_tools(&self) -> Payload {
        Payload::Tools {
            tools: self.registry.list(),
        }
    }

    /// Name, description, and parameters of one tool.
    pub fn describe_tool(&self, name: &str) -> Payload {
        match self.registry.lookup(name) {
            Ok(descriptor) => Payload::Description(ToolDescription::from(descriptor)),
            Err(e) => Payload::error(e.to_string()),
        }
    }

    /// Invoke a tool with a JSON array of positional arguments.
    pub async fn invoke_tool(&self, name: &str, raw_args: &str) -> Payload {
        match self.try_invoke(name, raw_args).await {
            Ok((tool, result)) => Payload::Result { tool, result },
            Err(e) => {
                tracing::warn!(tool = name, error = %e, "tool invocation failed");
                Payload::error(e.to_string())
            }
        }
    }

    async fn try_invoke(&self, name: &str, raw_args: &str) -> Result<(String, Value), ToolError> {
        let descriptor = self.registry.lookup(name)?;
        let args = marshal(descriptor, raw_args)?;

        let tool = Arc::clone(descriptor.tool());
        let result = tokio::spawn(async move { tool.execute(args).await })
            .await
            .map_err(|e| ToolError::Invocation(join_failure(e)))?
            .map_err(ToolError::Invocation)?;

        Ok((descriptor.name().to_string(), result))
    }

    /// Pick a tool for a free-text query.
    pub async fn select_tool(&self, query: &str) -> Payload {
        match self.strategy.select(query, &self.registry).await {
            Ok(selection) => Payload::Selection(selection),
            Err(SelectionError::NoToolsAvailable) => {
                Payload::error(SelectionError::NoToolsAvailable.to_string())
            }
            Err(e) => {
                // Strategies are expected to absorb their own failures.
                tracing::warn!(error = %e, "selection strategy failed");
                Payload::error(format!("Error selecting tool: {}", e))
            }
        }
    }

    /// `{"tools": [...]}`
    pub fn list_tools_json(&self) -> String {
        self.list_tools().to_json(self.format)
    }

    /// `{"name", "description", "parameters"}` or `{"error"}`.
    pub fn describe_tool_json(&self, name: &str) -> String {
        self.describe_tool(name).to_json(self.format)
    }

    /// `{"tool", "result"}` or `{"error"}`.
    pub async fn invoke_tool_json(&self, name: &str, args_json: &str) -> String {
        self.invoke_tool(name, args_json).await.to_json(self.format)
    }

    /// `{"selectedTool", "description", "note"}` or `{"error"}`.
    pub async fn select_tool_json(&self, query: &str) -> String {
        self.select_tool(query).await.to_json(self.format)
    }
}
