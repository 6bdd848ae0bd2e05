// ABOUTME: Greeting example tool.

use crate::tool::{FnTool, ParamType};

/// `greet(name: str)`
pub fn greet() -> FnTool {
    FnTool::builder("greet")
        .description("Greets a person by name. Usage: greet(name).")
        .param("name", ParamType::Str)
        .handler(|args| Ok(format!("Hello, {}!", args.str(0)?).into()))
}
