// ABOUTME: Structured payloads returned by every dispatch operation, and their
// ABOUTME: rendering as JSON object strings.

use serde::Serialize;
use serde_json::Value;

use crate::select::Selection;
use crate::tool::{Descriptor, Parameter};

/// How payloads are rendered as text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PayloadFormat {
    /// Two-space indented JSON.
    #[default]
    Pretty,
    /// Single-line JSON.
    Compact,
}

/// Metadata returned by a describe call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolDescription {
    pub name: String,
    pub description: String,
    pub parameters: Vec<Parameter>,
}

impl From<&Descriptor> for ToolDescription {
    fn from(descriptor: &Descriptor) -> Self {
        Self {
            name: descriptor.name().to_string(),
            description: descriptor.description().to_string(),
            parameters: descriptor.parameters().to_vec(),
        }
    }
}

/// The outcome of one dispatch operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    Tools { tools: Vec<String> },
    Description(ToolDescription),
    Result { tool: String, result: Value },
    Selection(Selection),
    Error { error: String },
}

impl Payload {
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            error: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Payload::Error { .. })
    }

    /// The error message, if this is an error payload.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Payload::Error { error } => Some(error),
            _ => None,
        }
    }

    /// Render as a JSON object string. Never fails.
    pub fn to_json(&self, format: PayloadFormat) -> String {
        let rendered = match format {
            PayloadFormat::Pretty => serde_json::to_string_pretty(self),
            PayloadFormat::Compact => serde_json::to_string(self),
        };
        rendered.unwrap_or_else(|e| {
            tracing::warn!("failed to serialize payload: {}", e);
            serde_json::json!({ "error": format!("Failed to serialize response: {}", e) })
                .to_string()
        })
    }
}
