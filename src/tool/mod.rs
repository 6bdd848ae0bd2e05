// ABOUTME: Tool module - defines tools, signatures, arguments, and the registry.
// ABOUTME: Core abstraction for registered, invocable capabilities.

mod args;
mod function;
mod registry;
mod signature;
mod traits;

pub use args::*;
pub use function::*;
pub use registry::*;
pub use signature::*;
pub use traits::*;
