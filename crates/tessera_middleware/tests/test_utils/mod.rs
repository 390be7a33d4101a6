//! Shared helpers for middleware integration tests.

use std::sync::{Arc, Mutex};
use tessera_core::{GenerateRequest, GenerateResponse};
use tessera_error::MiddlewareResult;
use tessera_middleware::MiddlewareChain;

/// Drives `request` through `chain` with a terminal handler that records
/// the request it receives, returning the chain result and the captured
/// request (None when the terminal was never reached).
pub async fn run_capturing(
    chain: &MiddlewareChain,
    request: GenerateRequest,
) -> (
    MiddlewareResult<GenerateResponse>,
    Option<GenerateRequest>,
) {
    let seen = Arc::new(Mutex::new(None));
    let capture = seen.clone();
    let result = chain
        .execute(request, move |forwarded| {
            let capture = capture.clone();
            async move {
                *capture.lock().unwrap() = Some(forwarded);
                Ok(GenerateResponse::from_text("ok"))
            }
        })
        .await;
    let captured = seen.lock().unwrap().take();
    (result, captured)
}
