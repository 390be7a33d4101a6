//! Reference documents supplied by a retrieval collaborator.

use crate::{Metadata, Part};
use serde::{Deserialize, Serialize};

/// A retrieved reference document attached to a generation request.
///
/// Documents are identified for citation purposes at augmentation time;
/// the metadata mapping may carry `ref`, `id`, or any caller-chosen field
/// for that resolution.
///
/// # Examples
///
/// ```
/// use tessera_core::Document;
///
/// let doc = Document::from_text("i am context");
/// assert_eq!(doc.text(), "i am context");
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, derive_getters::Getters)]
pub struct Document {
    /// Ordered content parts
    content: Vec<Part>,
    /// Open metadata mapping
    #[serde(default, skip_serializing_if = "Option::is_none")]
    metadata: Option<Metadata>,
}

impl Document {
    /// Creates a new document with the given parts and metadata.
    pub fn new(content: Vec<Part>, metadata: Option<Metadata>) -> Self {
        Self { content, metadata }
    }

    /// Creates a single-part text document with no metadata.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            content: vec![Part::text(text)],
            metadata: None,
        }
    }

    /// Attaches a metadata mapping, replacing any existing one.
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Concatenation of all text parts, in order.
    pub fn text(&self) -> String {
        self.content
            .iter()
            .filter_map(Part::text_content)
            .collect()
    }

    /// A metadata field rendered for display, if present and non-null.
    ///
    /// String values render without quotes; other JSON values use their
    /// canonical form.
    pub fn metadata_display(&self, field: &str) -> Option<String> {
        match self.metadata.as_ref()?.get(field)? {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_display_strips_quotes_from_strings() {
        let mut metadata = Metadata::new();
        metadata.insert("ref".to_string(), "chapter-3".into());
        metadata.insert("page".to_string(), 41.into());
        let doc = Document::from_text("body").with_metadata(metadata);

        assert_eq!(doc.metadata_display("ref").as_deref(), Some("chapter-3"));
        assert_eq!(doc.metadata_display("page").as_deref(), Some("41"));
        assert_eq!(doc.metadata_display("missing"), None);
    }

    #[test]
    fn null_metadata_counts_as_absent() {
        let mut metadata = Metadata::new();
        metadata.insert("id".to_string(), serde_json::Value::Null);
        let doc = Document::from_text("body").with_metadata(metadata);
        assert_eq!(doc.metadata_display("id"), None);
    }
}
