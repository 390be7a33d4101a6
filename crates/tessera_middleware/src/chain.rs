//! Middleware contract and chain composition.

use async_trait::async_trait;
use futures::future::BoxFuture;
use std::future::Future;
use std::sync::Arc;
use tessera_core::{GenerateRequest, GenerateResponse};
use tessera_error::MiddlewareResult;
use tracing::trace;

/// A single request-transformation stage.
///
/// A stage receives the request by value and an explicit continuation.
/// On the success path it calls [`Next::run`] exactly once, forwarding a
/// (possibly rewritten) request; on failure it returns an error without
/// calling the continuation. No stage retries or invokes its continuation
/// twice.
#[async_trait]
pub trait ModelMiddleware: Send + Sync {
    /// Transform the request and forward it, or fail.
    async fn handle(
        &self,
        request: GenerateRequest,
        next: Next<'_>,
    ) -> MiddlewareResult<GenerateResponse>;
}

trait TerminalHandler: Send + Sync {
    fn call(&self, request: GenerateRequest) -> BoxFuture<'_, MiddlewareResult<GenerateResponse>>;
}

struct HandlerFn<H>(H);

impl<H> TerminalHandler for HandlerFn<H>
where
    H: Fn(GenerateRequest) -> BoxFuture<'static, MiddlewareResult<GenerateResponse>>
        + Send
        + Sync,
{
    fn call(&self, request: GenerateRequest) -> BoxFuture<'_, MiddlewareResult<GenerateResponse>> {
        (self.0)(request)
    }
}

/// The continuation handed to a stage: the remaining stages of the chain
/// wrapped around the terminal model handler.
pub struct Next<'a> {
    stages: &'a [Arc<dyn ModelMiddleware>],
    terminal: &'a dyn TerminalHandler,
}

impl Next<'_> {
    /// Forward the request to the rest of the chain.
    ///
    /// Consumes the continuation, so a stage cannot invoke it twice.
    pub async fn run(self, request: GenerateRequest) -> MiddlewareResult<GenerateResponse> {
        match self.stages.split_first() {
            Some((stage, rest)) => {
                let next = Next {
                    stages: rest,
                    terminal: self.terminal,
                };
                stage.handle(request, next).await
            }
            None => self.terminal.call(request).await,
        }
    }
}

/// An ordered middleware chain wrapped around a terminal model handler.
///
/// Stage order is caller-configured and fixed: the first stage added is the
/// outermost. A failure at any stage short-circuits the remainder of the
/// chain and the terminal handler.
///
/// # Examples
///
/// ```
/// use tessera_core::{GenerateRequest, GenerateResponse, Message, ModelInfo};
/// use tessera_middleware::{MiddlewareChain, SupportValidator};
///
/// # async fn demo() -> tessera_error::MiddlewareResult<()> {
/// let chain = MiddlewareChain::new().with(SupportValidator::new(ModelInfo::new("echo-1")));
/// let request = GenerateRequest::builder()
///     .messages(vec![Message::user("hi")])
///     .build()
///     .unwrap();
/// let response = chain
///     .execute(request, |_req| async { Ok(GenerateResponse::from_text("ok")) })
///     .await?;
/// assert_eq!(response.outputs.len(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Default)]
pub struct MiddlewareChain {
    stages: Vec<Arc<dyn ModelMiddleware>>,
}

impl MiddlewareChain {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a stage to the end of the chain (closest to the model).
    pub fn with(mut self, stage: impl ModelMiddleware + 'static) -> Self {
        self.stages.push(Arc::new(stage));
        self
    }

    /// Appends an already-shared stage.
    pub fn with_shared(mut self, stage: Arc<dyn ModelMiddleware>) -> Self {
        self.stages.push(stage);
        self
    }

    /// Number of stages in the chain.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// True if the chain has no stages.
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Drives the request through every stage and into the terminal
    /// handler, returning its response or the first stage failure.
    pub async fn execute<H, Fut>(
        &self,
        request: GenerateRequest,
        handler: H,
    ) -> MiddlewareResult<GenerateResponse>
    where
        H: Fn(GenerateRequest) -> Fut + Send + Sync,
        Fut: Future<Output = MiddlewareResult<GenerateResponse>> + Send + 'static,
    {
        trace!(stages = self.stages.len(), "executing middleware chain");
        let terminal = HandlerFn(
            move |request: GenerateRequest| -> BoxFuture<'static, MiddlewareResult<GenerateResponse>> {
                Box::pin(handler(request))
            },
        );
        let next = Next {
            stages: &self.stages,
            terminal: &terminal,
        };
        next.run(request).await
    }
}

impl std::fmt::Debug for MiddlewareChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MiddlewareChain")
            .field("stages", &self.stages.len())
            .finish()
    }
}
