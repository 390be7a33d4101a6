//! Request-transformation middleware for generative-model requests.
//!
//! A chain of stages inspects and rewrites a [`GenerateRequest`] before it
//! reaches a model backend: capability validation
//! ([`SupportValidator`]), system-prompt simulation
//! ([`SystemPromptSimulator`]), and retrieval-context injection
//! ([`ContextAugmenter`]). Stages compose through [`MiddlewareChain`]:
//! each either forwards a (possibly rewritten) request to its
//! continuation exactly once, or fails without calling it.
//!
//! # Examples
//!
//! ```
//! use tessera_core::{GenerateRequest, GenerateResponse, Message, ModelInfo};
//! use tessera_middleware::{MiddlewareChain, SupportValidator, SystemPromptSimulator};
//!
//! # async fn demo() -> tessera_error::MiddlewareResult<()> {
//! let chain = MiddlewareChain::new()
//!     .with(SupportValidator::new(ModelInfo::new("echo-1")))
//!     .with(SystemPromptSimulator::new());
//!
//! let request = GenerateRequest::builder()
//!     .messages(vec![Message::user("Say hello")])
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
//!
//! [`GenerateRequest`]: tessera_core::GenerateRequest

mod chain;
mod citation;
mod context;
mod system_prompt;
mod validate;

pub use chain::{MiddlewareChain, ModelMiddleware, Next};
pub use citation::resolve_citation_key;
pub use context::{ContextAugmenter, ItemTemplate, Preface, CONTEXT_PREFACE};
pub use system_prompt::{SystemPromptSimulator, SYSTEM_ACKNOWLEDGEMENT, SYSTEM_PREFACE};
pub use validate::SupportValidator;
