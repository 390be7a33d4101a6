//! Content part types for messages and documents.

use crate::MediaSource;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Open metadata mapping attached to a part or document.
pub type Metadata = HashMap<String, serde_json::Value>;

/// Reserved metadata key marking what a part is for.
pub const PURPOSE_KEY: &str = "purpose";

/// `purpose` value marking a part as the carrier for retrieved context.
pub const CONTEXT_PURPOSE: &str = "context";

/// Reserved metadata key marking a context carrier that is awaiting content.
pub const PENDING_KEY: &str = "pending";

/// One piece of message or document content.
///
/// Each variant can carry an open metadata mapping. Two keys are reserved:
/// `purpose` (a part with `purpose == "context"` is the single slot where
/// retrieved context lands) and `pending` (set while that slot is still
/// empty). A message holds at most one context carrier.
///
/// # Examples
///
/// ```
/// use tessera_core::Part;
///
/// let text = Part::text("Hello, world!");
/// assert_eq!(text.text_content(), Some("Hello, world!"));
///
/// let slot = Part::pending_context();
/// assert!(slot.is_context_carrier());
/// assert!(slot.is_pending());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Part {
    /// Plain text content.
    Text {
        /// The text itself
        text: String,
        /// Open metadata mapping
        #[serde(default, skip_serializing_if = "Option::is_none")]
        metadata: Option<Metadata>,
    },

    /// A reference to media content (image, audio, video, document).
    Media {
        /// MIME type, e.g., "image/png"
        mime: Option<String>,
        /// Media source (URL, base64, or raw bytes)
        source: MediaSource,
        /// Open metadata mapping
        #[serde(default, skip_serializing_if = "Option::is_none")]
        metadata: Option<Metadata>,
    },

    /// The result of executing a tool the model requested.
    ToolResponse {
        /// Name of the tool that produced the output
        name: String,
        /// Tool output as JSON
        output: serde_json::Value,
        /// Open metadata mapping
        #[serde(default, skip_serializing_if = "Option::is_none")]
        metadata: Option<Metadata>,
    },

    /// A part carrying only metadata, used to reserve a position in a
    /// message before its content exists.
    Metadata {
        /// Open metadata mapping
        metadata: Metadata,
    },
}

impl Part {
    /// Creates a plain text part with no metadata.
    pub fn text(text: impl Into<String>) -> Self {
        Part::Text {
            text: text.into(),
            metadata: None,
        }
    }

    /// Creates a text part carrying materialized context.
    ///
    /// The metadata is exactly `{purpose: "context"}`; no `pending` flag.
    pub fn context(text: impl Into<String>) -> Self {
        let mut metadata = Metadata::new();
        metadata.insert(PURPOSE_KEY.to_string(), CONTEXT_PURPOSE.into());
        Part::Text {
            text: text.into(),
            metadata: Some(metadata),
        }
    }

    /// Creates a metadata-only part reserving the context slot in a message.
    pub fn pending_context() -> Self {
        let mut metadata = Metadata::new();
        metadata.insert(PURPOSE_KEY.to_string(), CONTEXT_PURPOSE.into());
        metadata.insert(PENDING_KEY.to_string(), true.into());
        Part::Metadata { metadata }
    }

    /// The part's metadata mapping, if any.
    pub fn metadata(&self) -> Option<&Metadata> {
        match self {
            Part::Text { metadata, .. }
            | Part::Media { metadata, .. }
            | Part::ToolResponse { metadata, .. } => metadata.as_ref(),
            Part::Metadata { metadata } => Some(metadata),
        }
    }

    /// The reserved `purpose` metadata value, if set to a string.
    pub fn purpose(&self) -> Option<&str> {
        self.metadata()?.get(PURPOSE_KEY)?.as_str()
    }

    /// True if this part is the context carrier of its message.
    pub fn is_context_carrier(&self) -> bool {
        self.purpose() == Some(CONTEXT_PURPOSE)
    }

    /// True if this part is flagged as awaiting content.
    pub fn is_pending(&self) -> bool {
        self.metadata()
            .and_then(|m| m.get(PENDING_KEY))
            .and_then(serde_json::Value::as_bool)
            .unwrap_or(false)
    }

    /// True for media parts.
    pub fn is_media(&self) -> bool {
        matches!(self, Part::Media { .. })
    }

    /// The text of a text part.
    pub fn text_content(&self) -> Option<&str> {
        match self {
            Part::Text { text, .. } => Some(text),
            _ => None,
        }
    }
}
