//! Citation-key resolution for reference documents.

use tessera_core::Document;

/// Resolves the display key for one document.
///
/// Precedence, evaluated independently per document: the configured
/// citation field when present, then `metadata.ref`, then `metadata.id`,
/// then the document's zero-based position in the docs sequence.
pub fn resolve_citation_key(
    doc: &Document,
    position: usize,
    citation_key: Option<&str>,
) -> String {
    if let Some(field) = citation_key {
        if let Some(value) = doc.metadata_display(field) {
            return value;
        }
    }
    if let Some(value) = doc.metadata_display("ref") {
        return value;
    }
    if let Some(value) = doc.metadata_display("id") {
        return value;
    }
    position.to_string()
}
