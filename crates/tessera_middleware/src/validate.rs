//! Capability validation against a model descriptor.

use crate::{ModelMiddleware, Next};
use async_trait::async_trait;
use tessera_core::{GenerateRequest, GenerateResponse, ModelInfo};
use tessera_error::{Capability, MiddlewareError, MiddlewareResult};
use tracing::debug;

/// Rejects requests that depend on capabilities the target model does not
/// declare support for.
///
/// Constructed from the model descriptor itself. When the descriptor
/// declares no `supports` record, every request forwards unchanged. Checks
/// run in fixed order — media, then tools, then multiturn — so exactly one
/// deterministic error surfaces when several violations co-occur.
///
/// # Examples
///
/// ```
/// use tessera_core::{ModelInfo, Supports};
/// use tessera_middleware::SupportValidator;
///
/// let text_only = ModelInfo::new("echo-1").with_supports(Supports {
///     media: Some(false),
///     ..Supports::default()
/// });
/// let validator = SupportValidator::new(text_only);
/// ```
#[derive(Debug, Clone)]
pub struct SupportValidator {
    info: ModelInfo,
}

impl SupportValidator {
    /// Creates a validator for the given model descriptor.
    pub fn new(info: ModelInfo) -> Self {
        Self { info }
    }

    fn first_violation(&self, request: &GenerateRequest) -> Option<Capability> {
        let supports = self.info.supports.as_ref()?;
        if supports.media == Some(false) && request.has_media() {
            return Some(Capability::Media);
        }
        if supports.tools == Some(false) && request.has_tools() {
            return Some(Capability::ToolUse);
        }
        if supports.multiturn == Some(false) && request.messages.len() > 1 {
            return Some(Capability::Multiturn);
        }
        None
    }
}

#[async_trait]
impl ModelMiddleware for SupportValidator {
    async fn handle(
        &self,
        request: GenerateRequest,
        next: Next<'_>,
    ) -> MiddlewareResult<GenerateResponse> {
        if let Some(capability) = self.first_violation(&request) {
            debug!(
                model = %self.info.name,
                capability = %capability,
                "rejecting request for unsupported capability"
            );
            return Err(MiddlewareError::unsupported(&self.info.name, capability));
        }
        next.run(request).await
    }
}
