// ABOUTME: Built-in example tools and the startup registry that holds them.
// ABOUTME: Registration order is fixed: add, subtract, greet.

mod arithmetic;
mod greet;

pub use arithmetic::{add, subtract};
pub use greet::greet;

use crate::error::ToolError;
use crate::tool::Registry;

/// Build the registry of built-in tools.
///
/// An error here means the tool set itself is broken; callers should abort
/// startup rather than serve a partial registry.
pub fn builtin_registry() -> Result<Registry, ToolError> {
    let mut registry = Registry::new();
    registry.register(add())?;
    registry.register(subtract())?;
    registry.register(greet())?;
    Ok(registry)
}
