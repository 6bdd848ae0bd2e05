// ABOUTME: FnTool - builds a Tool from a plain closure plus explicit metadata.
// ABOUTME: Enforces exact arity and runs the closure on the blocking pool.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use super::{Args, ParamType, Tool, positional_schema};

type Handler = Arc<dyn Fn(Args) -> anyhow::Result<Value> + Send + Sync>;

/// A tool backed by a synchronous closure.
///
/// ```
/// use toolreg::tool::{FnTool, ParamType};
///
/// let double = FnTool::builder("double")
///     .description("Doubles a number.")
///     .param("x", ParamType::Int)
///     .handler(|args| Ok((args.int(0)? * 2).into()));
/// ```
#[derive(Clone)]
pub struct FnTool {
    name: String,
    description: String,
    params: Vec<(String, ParamType)>,
    handler: Handler,
}

impl FnTool {
    /// Start building a tool with the given name.
    pub fn builder(name: impl Into<String>) -> FnToolBuilder {
        FnToolBuilder {
            name: name.into(),
            description: String::new(),
            params: Vec::new(),
        }
    }

    /// Number of declared positional parameters.
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

impl std::fmt::Debug for FnTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnTool")
            .field("name", &self.name)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

/// Builder for [`FnTool`].
#[derive(Debug, Clone)]
pub struct FnToolBuilder {
    name: String,
    description: String,
    params: Vec<(String, ParamType)>,
}

impl FnToolBuilder {
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Declare the next positional parameter.
    pub fn param(mut self, name: impl Into<String>, ty: ParamType) -> Self {
        self.params.push((name.into(), ty));
        self
    }

    /// Finish the tool with its body.
    pub fn handler<F>(self, handler: F) -> FnTool
    where
        F: Fn(Args) -> anyhow::Result<Value> + Send + Sync + 'static,
    {
        FnTool {
            name: self.name,
            description: self.description,
            params: self.params,
            handler: Arc::new(handler),
        }
    }
}

#[async_trait]
impl Tool for FnTool {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn schema(&self) -> Value {
        positional_schema(self.params.iter().map(|(name, ty)| (name.as_str(), *ty)))
    }

    async fn execute(&self, args: Args) -> Result<Value, anyhow::Error> {
        args.expect_arity(self.params.len())?;

        // The body may block; keep it off the async workers.
        let handler = Arc::clone(&self.handler);
        tokio::task::spawn_blocking(move || handler(args))
            .await
            .map_err(join_failure)?
    }
}

/// Convert a failed tool task into an invocation error, keeping any panic message.
pub(crate) fn join_failure(err: tokio::task::JoinError) -> anyhow::Error {
    if err.is_cancelled() {
        return anyhow::anyhow!("tool task was cancelled");
    }
    let payload = err.into_panic();
    let message = payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string());
    anyhow::anyhow!("tool panicked: {}", message)
}
