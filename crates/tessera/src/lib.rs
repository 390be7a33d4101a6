//! Tessera: a request-transformation pipeline for generative-model requests.
//!
//! A chain of middleware stages inspects and rewrites a generation request
//! before it reaches a model backend, compensating for model capability
//! gaps and injecting retrieval context. This facade re-exports the public
//! surface of the workspace crates.
//!
//! # Examples
//!
//! ```
//! use tessera::{
//!     ContextAugmenter, GenerateRequest, GenerateResponse, Message, MiddlewareChain,
//!     ModelInfo, SupportValidator, SystemPromptSimulator,
//! };
//!
//! # async fn demo() -> tessera::MiddlewareResult<()> {
//! let chain = MiddlewareChain::new()
//!     .with(SupportValidator::new(ModelInfo::new("echo-1")))
//!     .with(SystemPromptSimulator::new())
//!     .with(ContextAugmenter::new());
//!
//! let request = GenerateRequest::builder()
//!     .messages(vec![Message::system("Be brief."), Message::user("Say hello")])
//!     .build()
//!     .unwrap();
//!
//! let response = chain
//!     .execute(request, |_req| async { Ok(GenerateResponse::from_text("hello")) })
//!     .await?;
//! assert_eq!(response.outputs.len(), 1);
//! # Ok(())
//! # }
//! ```

pub use tessera_core::{
    Document, GenerateRequest, GenerateRequestBuilder, GenerateResponse, MediaSource, Message,
    Metadata, ModelInfo, Output, OutputConfig, Part, Role, Supports, ToolDefinition,
    CONTEXT_PURPOSE, PENDING_KEY, PURPOSE_KEY,
};
pub use tessera_error::{Capability, MiddlewareError, MiddlewareErrorKind, MiddlewareResult};
pub use tessera_middleware::{
    resolve_citation_key, ContextAugmenter, ItemTemplate, MiddlewareChain, ModelMiddleware,
    Next, Preface, SupportValidator, SystemPromptSimulator, CONTEXT_PREFACE,
    SYSTEM_ACKNOWLEDGEMENT, SYSTEM_PREFACE,
};
