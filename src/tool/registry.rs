// ABOUTME: Implements the Registry - the ordered, append-once catalog of tools
// ABOUTME: with case-insensitive lookup and duplicate rejection.

use std::collections::HashMap;
use std::sync::Arc;

use super::{Parameter, Tool, inspect};
use crate::error::ToolError;

/// Description used when a tool supplies none.
pub const NO_DESCRIPTION: &str = "No description provided.";

/// Registration-time metadata for one tool, plus the tool itself.
#[derive(Clone)]
pub struct Descriptor {
    name: String,
    description: String,
    parameters: Vec<Parameter>,
    tool: Arc<dyn Tool>,
}

impl Descriptor {
    fn from_tool(tool: Arc<dyn Tool>) -> Self {
        let description = match tool.description().trim() {
            "" => NO_DESCRIPTION.to_string(),
            text => text.to_string(),
        };
        Self {
            name: tool.name().to_string(),
            description,
            parameters: inspect(tool.as_ref()),
            tool,
        }
    }

    /// Canonical name, in the casing it was registered with.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn tool(&self) -> &Arc<dyn Tool> {
        &self.tool
    }
}

impl std::fmt::Debug for Descriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Descriptor")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("parameters", &self.parameters)
            .finish_non_exhaustive()
    }
}

/// An ordered registry of tools.
///
/// Populated through `&mut self` at startup, then shared read-only (usually
/// behind an `Arc`). There is no unregistration.
#[derive(Default, Clone)]
pub struct Registry {
    entries: Vec<Descriptor>,
    by_key: HashMap<String, usize>,
}

impl Registry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool.
    pub fn register<T: Tool + 'static>(&mut self, tool: T) -> Result<&Descriptor, ToolError> {
        self.register_arc(Arc::new(tool))
    }

    /// Register a tool from an Arc.
    ///
    /// Fails if a tool with the same name, ignoring case, is already present.
    pub fn register_arc(&mut self, tool: Arc<dyn Tool>) -> Result<&Descriptor, ToolError> {
        let name = tool.name();
        if name.trim().is_empty() {
            return Err(ToolError::InvalidName(name.to_string()));
        }

        let key = lookup_key(name);
        if self.by_key.contains_key(&key) {
            return Err(ToolError::Duplicate(name.to_string()));
        }

        let descriptor = Descriptor::from_tool(tool);
        tracing::debug!(
            tool = descriptor.name(),
            params = descriptor.parameters().len(),
            "registered tool"
        );

        let index = self.entries.len();
        self.by_key.insert(key, index);
        self.entries.push(descriptor);
        Ok(&self.entries[index])
    }

    /// Find a tool by exact name, ignoring case.
    pub fn lookup(&self, name: &str) -> Result<&Descriptor, ToolError> {
        self.get(name)
            .ok_or_else(|| ToolError::NotFound(name.to_string()))
    }

    /// Get a tool by exact name, ignoring case.
    pub fn get(&self, name: &str) -> Option<&Descriptor> {
        self.by_key
            .get(&lookup_key(name))
            .map(|&index| &self.entries[index])
    }

    /// List all tool names in registration order.
    pub fn list(&self) -> Vec<String> {
        self.entries.iter().map(|d| d.name.clone()).collect()
    }

    /// Iterate descriptors in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Descriptor> {
        self.entries.iter()
    }

    /// The first tool registered, if any.
    pub fn first(&self) -> Option<&Descriptor> {
        self.entries.first()
    }

    /// Get the number of registered tools.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn lookup_key(name: &str) -> String {
    name.to_lowercase()
}
