// ABOUTME: Defines all error types for the toolreg library using thiserror.
// ABOUTME: Display strings double as the messages of error payloads.

/// Errors from registration and dispatch.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("Tool '{0}' not found.")]
    NotFound(String),

    #[error("Tool '{0}' is already registered")]
    Duplicate(String),

    #[error("Invalid tool name: {0:?}")]
    InvalidName(String),

    #[error("Error executing tool: {0}")]
    MalformedArguments(String),

    #[error("Error executing tool: {0}")]
    Invocation(#[source] anyhow::Error),
}

impl ToolError {
    /// True for errors raised while registering, which must abort startup.
    pub fn is_registration(&self) -> bool {
        matches!(self, ToolError::Duplicate(_) | ToolError::InvalidName(_))
    }
}

/// Errors from tool selection.
#[derive(Debug, thiserror::Error)]
pub enum SelectionError {
    #[error("No tools available.")]
    NoToolsAvailable,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Deserialization error: {0}")]
    Deserialize(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),
}
