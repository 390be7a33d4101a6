//! Tool and output-format descriptors.

use serde::{Deserialize, Serialize};

/// A named tool the model may call.
///
/// Middleware only counts declarations; executing tools is a collaborator
/// concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Name of the tool
    pub name: String,
    /// Description shown to the model
    pub description: Option<String>,
    /// JSON schema for the tool's input
    pub input_schema: Option<serde_json::Value>,
}

impl ToolDefinition {
    /// Creates a tool definition with only a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            input_schema: None,
        }
    }
}

/// Requested output format for a generation.
///
/// Carried on the request as an opaque shape; format coercion happens
/// outside the middleware chain.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Format name (e.g. "text", "json").
    pub format: Option<String>,
    /// JSON schema the output should conform to.
    pub schema: Option<serde_json::Value>,
}
