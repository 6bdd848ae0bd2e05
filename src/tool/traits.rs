// ABOUTME: Defines the Tool trait - the core abstraction for a registered capability.
// ABOUTME: Tools have a name, description, positional schema, and async execute method.

use async_trait::async_trait;

use super::Args;

/// A trusted, in-process callable that can be registered and invoked by name.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Returns the name of this tool. Lookup ignores case; display keeps it.
    fn name(&self) -> &str;

    /// Returns a human-readable description. Empty means none was supplied.
    fn description(&self) -> &str {
        ""
    }

    /// Returns the JSON Schema for the positional argument list.
    ///
    /// Parameters are listed under `prefixItems`, each with a `title` and an
    /// optional `type`:
    ///
    /// ```json
    /// {"type": "array", "prefixItems": [{"title": "a", "type": "integer"}]}
    /// ```
    fn schema(&self) -> serde_json::Value;

    /// Execute the tool with decoded positional arguments.
    async fn execute(&self, args: Args) -> Result<serde_json::Value, anyhow::Error>;
}
