// ABOUTME: Prelude module - convenient imports for common use cases.
// ABOUTME: Use `use toolreg::prelude::*;` to get started quickly.

pub use crate::dispatch::{Dispatcher, Payload, PayloadFormat, ToolDescription};
pub use crate::error::{SelectionError, ToolError};
pub use crate::select::{
    AnthropicBackend, KeywordSelector, ModelBackend, ModelSelector, Selection, SelectionStrategy,
};
pub use crate::tool::{
    Args, Descriptor, FnTool, ParamType, Parameter, Registry, Tool, positional_schema,
};
pub use crate::tools::builtin_registry;
