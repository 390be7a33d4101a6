//! Retrieval-context injection into the outgoing prompt.

use crate::citation::resolve_citation_key;
use crate::{ModelMiddleware, Next};
use async_trait::async_trait;
use std::sync::Arc;
use tessera_core::{Document, GenerateRequest, GenerateResponse, Message, Part};
use tessera_error::MiddlewareResult;
use tracing::debug;

/// Default preface prepended before the rendered citation list.
pub const CONTEXT_PREFACE: &str = "\n\nUse the following information to complete your task:\n\n";

/// Preface configuration for [`ContextAugmenter`].
///
/// Distinguishes "use the default" from "explicitly no preface", which a
/// plain optional string cannot express.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Preface {
    /// Use [`CONTEXT_PREFACE`].
    #[default]
    Default,
    /// Elide the preface entirely.
    None,
    /// Use custom text.
    Text(String),
}

impl Preface {
    fn resolve(&self) -> &str {
        match self {
            Preface::Default => CONTEXT_PREFACE,
            Preface::None => "",
            Preface::Text(text) => text,
        }
    }
}

/// Pure function rendering one document plus its resolved key as one line.
pub type ItemTemplate = Arc<dyn Fn(&Document, &str) -> String + Send + Sync>;

fn default_item_template(doc: &Document, key: &str) -> String {
    format!("- [{}]: {}\n", key, doc.text())
}

/// Merges retrieved reference documents into the last user message.
///
/// The rendered block lands in that message's context-carrier part: a
/// pending carrier is replaced in place, otherwise a new part is appended.
/// A message that already holds materialized (non-pending) context forwards
/// unchanged, so augmentation never runs twice. Requests without docs or
/// without a user message also forward unchanged.
///
/// # Examples
///
/// ```
/// use tessera_middleware::{ContextAugmenter, Preface};
///
/// let augmenter = ContextAugmenter::new()
///     .with_citation_key("source")
///     .with_preface(Preface::None);
/// ```
#[derive(Clone, Default)]
pub struct ContextAugmenter {
    preface: Preface,
    item_template: Option<ItemTemplate>,
    citation_key: Option<String>,
}

impl ContextAugmenter {
    /// Creates an augmenter with the default preface and line format.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the preface policy.
    pub fn with_preface(mut self, preface: Preface) -> Self {
        self.preface = preface;
        self
    }

    /// Overrides the per-document line format.
    pub fn with_item_template<F>(mut self, template: F) -> Self
    where
        F: Fn(&Document, &str) -> String + Send + Sync + 'static,
    {
        self.item_template = Some(Arc::new(template));
        self
    }

    /// Names the document metadata field used as the display key.
    pub fn with_citation_key(mut self, field: impl Into<String>) -> Self {
        self.citation_key = Some(field.into());
        self
    }

    fn render(&self, docs: &[Document]) -> String {
        let mut out = String::from(self.preface.resolve());
        for (position, doc) in docs.iter().enumerate() {
            let key = resolve_citation_key(doc, position, self.citation_key.as_deref());
            match &self.item_template {
                Some(template) => out.push_str(&template(doc, &key)),
                None => out.push_str(&default_item_template(doc, &key)),
            }
        }
        out.push('\n');
        out
    }
}

/// Replaces the context carrier in `message`, or appends `part` when no
/// carrier exists, returning a new message value.
fn splice_context_part(message: &Message, part: Part) -> Message {
    let mut parts = message.content().clone();
    match parts.iter().position(Part::is_context_carrier) {
        Some(index) => parts[index] = part,
        None => parts.push(part),
    }
    Message::new(*message.role(), parts)
}

#[async_trait]
impl ModelMiddleware for ContextAugmenter {
    async fn handle(
        &self,
        mut request: GenerateRequest,
        next: Next<'_>,
    ) -> MiddlewareResult<GenerateResponse> {
        let docs = match request.docs.as_deref() {
            Some(docs) if !docs.is_empty() => docs,
            _ => return next.run(request).await,
        };
        let Some(target) = request.last_user_index() else {
            return next.run(request).await;
        };

        let carrier = request.messages[target]
            .content()
            .iter()
            .find(|part| part.is_context_carrier());
        if let Some(existing) = carrier {
            if !existing.is_pending() {
                // Context already materialized; never augment twice.
                return next.run(request).await;
            }
        }

        let doc_count = docs.len();
        let part = Part::context(self.render(docs));
        let updated = splice_context_part(&request.messages[target], part);
        debug!(
            docs = doc_count,
            message_index = target,
            "merged context documents"
        );
        request.messages[target] = updated;
        next.run(request).await
    }
}

impl std::fmt::Debug for ContextAugmenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContextAugmenter")
            .field("preface", &self.preface)
            .field(
                "item_template",
                &self.item_template.as_ref().map(|_| "custom"),
            )
            .field("citation_key", &self.citation_key)
            .finish()
    }
}
