// ABOUTME: Root module for toolreg - a tool registry and invocation engine.
// ABOUTME: Re-exports all public types from submodules.

pub mod dispatch;
pub mod error;
pub mod prelude;
pub mod select;
pub mod tool;
pub mod tools;

pub use error::{SelectionError, ToolError};
