//! System-prompt simulation for models without native system-role support.

use crate::{ModelMiddleware, Next};
use async_trait::async_trait;
use tessera_core::{GenerateRequest, GenerateResponse, Message, Part, Role};
use tessera_error::MiddlewareResult;
use tracing::debug;

/// Marker line prepended before the original system instructions.
pub const SYSTEM_PREFACE: &str = "SYSTEM INSTRUCTIONS:\n";

/// Fixed acknowledgment text of the synthetic model message.
pub const SYSTEM_ACKNOWLEDGEMENT: &str = "Understood.";

/// Rewrites a leading system message into a user/model exchange.
///
/// The system message is replaced by a `user` message holding a preface
/// text part followed by the original system parts, and a synthetic
/// `model` acknowledgment is inserted immediately after. Every subsequent
/// message keeps its original relative order. Requests whose first
/// message is not `system` forward unchanged; system messages elsewhere
/// in the sequence are left as-is.
#[derive(Debug, Clone, Default)]
pub struct SystemPromptSimulator {
    preface: Option<String>,
    acknowledgement: Option<String>,
}

impl SystemPromptSimulator {
    /// Creates a simulator with the default preface and acknowledgment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the preface text.
    pub fn with_preface(mut self, preface: impl Into<String>) -> Self {
        self.preface = Some(preface.into());
        self
    }

    /// Overrides the acknowledgment text.
    pub fn with_acknowledgement(mut self, acknowledgement: impl Into<String>) -> Self {
        self.acknowledgement = Some(acknowledgement.into());
        self
    }
}

#[async_trait]
impl ModelMiddleware for SystemPromptSimulator {
    async fn handle(
        &self,
        mut request: GenerateRequest,
        next: Next<'_>,
    ) -> MiddlewareResult<GenerateResponse> {
        let leading_system = matches!(
            request.messages.first(),
            Some(message) if *message.role() == Role::System
        );
        if !leading_system {
            return next.run(request).await;
        }

        let (_, system_parts) = request.messages.remove(0).into_parts();
        let preface = self.preface.as_deref().unwrap_or(SYSTEM_PREFACE);
        let acknowledgement = self
            .acknowledgement
            .as_deref()
            .unwrap_or(SYSTEM_ACKNOWLEDGEMENT);

        let mut parts = Vec::with_capacity(system_parts.len() + 1);
        parts.push(Part::text(preface));
        parts.extend(system_parts);

        request.messages.insert(0, Message::new(Role::User, parts));
        request
            .messages
            .insert(1, Message::model(acknowledgement));

        debug!(messages = request.messages.len(), "simulated system prompt");
        next.run(request).await
    }
}
