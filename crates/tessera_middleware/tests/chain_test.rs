//! Tests for chain composition and control flow.

mod test_utils;

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use test_utils::run_capturing;
use tessera_core::{
    Document, GenerateRequest, GenerateResponse, Message, ModelInfo, Output, Part, Role,
    Supports,
};
use tessera_error::MiddlewareResult;
use tessera_middleware::{
    ContextAugmenter, MiddlewareChain, ModelMiddleware, Next, SupportValidator,
    SystemPromptSimulator, SYSTEM_PREFACE,
};

/// Stage that records its label before forwarding.
struct Recorder {
    label: &'static str,
    log: Arc<Mutex<Vec<&'static str>>>,
}

#[async_trait]
impl ModelMiddleware for Recorder {
    async fn handle(
        &self,
        request: GenerateRequest,
        next: Next<'_>,
    ) -> MiddlewareResult<GenerateResponse> {
        self.log.lock().unwrap().push(self.label);
        next.run(request).await
    }
}

#[tokio::test]
async fn empty_chain_reaches_the_terminal_handler() {
    let chain = MiddlewareChain::new();
    assert!(chain.is_empty());
    let request = GenerateRequest::builder()
        .messages(vec![Message::user("hi")])
        .build()
        .unwrap();

    let (result, captured) = run_capturing(&chain, request.clone()).await;
    assert!(result.is_ok());
    assert_eq!(captured.unwrap(), request);
}

#[tokio::test]
async fn stages_run_in_configured_order() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let chain = MiddlewareChain::new()
        .with(Recorder {
            label: "outer",
            log: log.clone(),
        })
        .with(Recorder {
            label: "middle",
            log: log.clone(),
        })
        .with(Recorder {
            label: "inner",
            log: log.clone(),
        });
    assert_eq!(chain.len(), 3);

    let request = GenerateRequest::builder()
        .messages(vec![Message::user("hi")])
        .build()
        .unwrap();
    let (result, _) = run_capturing(&chain, request).await;
    assert!(result.is_ok());
    assert_eq!(*log.lock().unwrap(), vec!["outer", "middle", "inner"]);
}

#[tokio::test]
async fn validator_failure_short_circuits_later_stages() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let info = ModelInfo::new("single-shot").with_supports(Supports {
        multiturn: Some(false),
        ..Supports::default()
    });
    let chain = MiddlewareChain::new()
        .with(SupportValidator::new(info))
        .with(Recorder {
            label: "after-validator",
            log: log.clone(),
        });

    let request = GenerateRequest::builder()
        .messages(vec![Message::user("one"), Message::user("two")])
        .build()
        .unwrap();
    let (result, captured) = run_capturing(&chain, request).await;
    assert!(result.is_err());
    assert!(log.lock().unwrap().is_empty());
    assert!(captured.is_none());
}

#[tokio::test]
async fn terminal_response_propagates_back_through_the_chain() {
    let chain = MiddlewareChain::new().with(SystemPromptSimulator::new());
    let request = GenerateRequest::builder()
        .messages(vec![Message::user("hi")])
        .build()
        .unwrap();

    let response = chain
        .execute(request, |_req| async {
            Ok(GenerateResponse::from_text("from the model"))
        })
        .await
        .unwrap();
    assert_eq!(
        response.outputs,
        vec![Output::Text("from the model".to_string())]
    );
}

#[tokio::test]
async fn full_pipeline_rewrites_system_prompt_and_injects_context() {
    let chain = MiddlewareChain::new()
        .with(SupportValidator::new(ModelInfo::new("echo-1")))
        .with(SystemPromptSimulator::new())
        .with(ContextAugmenter::new());

    let request = GenerateRequest::builder()
        .messages(vec![Message::system("Be brief."), Message::user("Summarize.")])
        .docs(Some(vec![Document::from_text("background facts")]))
        .build()
        .unwrap();

    let (result, captured) = run_capturing(&chain, request).await;
    assert!(result.is_ok());
    let forwarded = captured.unwrap();

    // Simulator ran first: system message became a user/model pair.
    assert_eq!(forwarded.messages.len(), 3);
    assert_eq!(
        forwarded.messages[0].content()[0],
        Part::text(SYSTEM_PREFACE)
    );
    assert_eq!(*forwarded.messages[1].role(), Role::Model);

    // Augmenter then targeted the last user message, which is the
    // original user question, not the simulated instruction message.
    assert!(forwarded.messages[2]
        .content()
        .iter()
        .any(|p| p.is_context_carrier()));
    assert!(!forwarded.messages[0]
        .content()
        .iter()
        .any(|p| p.is_context_carrier()));
}
