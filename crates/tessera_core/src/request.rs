//! Request and response types for generation.

use crate::{Document, Message, Output, OutputConfig, ToolDefinition};
use serde::{Deserialize, Serialize};

/// Generic generation request (multimodal-safe).
///
/// Message order is significant and preserved by every stage except where
/// a stage is explicitly defined to insert or replace. Stages operate on
/// their own copy; the caller's value is never mutated.
///
/// # Examples
///
/// ```
/// use tessera_core::{GenerateRequest, Message};
///
/// let request = GenerateRequest::builder()
///     .messages(vec![Message::user("Say hello")])
///     .build()
///     .unwrap();
/// assert_eq!(request.messages.len(), 1);
/// ```
#[derive(
    Debug, Clone, PartialEq, Serialize, Deserialize, Default, derive_builder::Builder,
)]
#[builder(setter(into), default)]
pub struct GenerateRequest {
    /// Ordered conversation history.
    pub messages: Vec<Message>,
    /// Tools the model may call.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<ToolDefinition>>,
    /// Requested output format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<OutputConfig>,
    /// Retrieved reference documents awaiting augmentation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docs: Option<Vec<Document>>,
    /// Maximum tokens to generate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    /// Sampling temperature.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Target model name override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl GenerateRequest {
    /// Returns a builder for constructing a GenerateRequest.
    pub fn builder() -> GenerateRequestBuilder {
        GenerateRequestBuilder::default()
    }

    /// True if any message in the request carries media.
    pub fn has_media(&self) -> bool {
        self.messages.iter().any(Message::has_media)
    }

    /// True if the request declares at least one tool.
    pub fn has_tools(&self) -> bool {
        self.tools.as_ref().is_some_and(|tools| !tools.is_empty())
    }

    /// Index of the last user-role message, if any.
    pub fn last_user_index(&self) -> Option<usize> {
        self.messages
            .iter()
            .rposition(|m| *m.role() == crate::Role::User)
    }
}

/// The unified response object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// Generated outputs.
    pub outputs: Vec<Output>,
}

impl GenerateResponse {
    /// Creates a single-output text response.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            outputs: vec![Output::Text(text.into())],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Role;

    #[test]
    fn last_user_index_skips_trailing_non_user_messages() {
        let request = GenerateRequest::builder()
            .messages(vec![
                Message::user("question"),
                Message::model("answer"),
                Message::new(Role::Tool, vec![]),
            ])
            .build()
            .unwrap();
        assert_eq!(request.last_user_index(), Some(0));
    }

    #[test]
    fn empty_tool_list_does_not_count_as_tool_use() {
        let request = GenerateRequest::builder()
            .messages(vec![Message::user("hi")])
            .tools(Some(vec![]))
            .build()
            .unwrap();
        assert!(!request.has_tools());
    }
}
