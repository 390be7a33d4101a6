//! End-to-end pipeline tests through the facade crate.

use std::sync::{Arc, Mutex};
use tessera::{
    ContextAugmenter, Document, GenerateRequest, GenerateResponse, Message, MiddlewareChain,
    ModelInfo, Role, SupportValidator, Supports, SystemPromptSimulator, CONTEXT_PREFACE,
    SYSTEM_ACKNOWLEDGEMENT,
};

#[tokio::test]
async fn three_stage_pipeline_produces_a_model_ready_request() {
    let info = ModelInfo::new("compact-1").with_supports(Supports {
        media: Some(false),
        tools: Some(false),
        ..Supports::default()
    });
    let chain = MiddlewareChain::new()
        .with(SupportValidator::new(info))
        .with(SystemPromptSimulator::new())
        .with(ContextAugmenter::new());

    let request = GenerateRequest::builder()
        .messages(vec![
            Message::system("Answer in one sentence."),
            Message::user("What is a tessera?"),
        ])
        .docs(Some(vec![
            Document::from_text("A tessera is a mosaic tile."),
        ]))
        .build()
        .unwrap();

    let seen = Arc::new(Mutex::new(None));
    let capture = seen.clone();
    let response = chain
        .execute(request, move |forwarded| {
            let capture = capture.clone();
            async move {
                *capture.lock().unwrap() = Some(forwarded);
                Ok(GenerateResponse::from_text("A small mosaic tile."))
            }
        })
        .await
        .unwrap();
    assert_eq!(response.outputs.len(), 1);

    let forwarded = seen.lock().unwrap().take().unwrap();
    // No system role survives; the exchange opens user/model/user.
    let roles: Vec<Role> = forwarded.messages.iter().map(|m| *m.role()).collect();
    assert_eq!(roles, vec![Role::User, Role::Model, Role::User]);
    assert_eq!(forwarded.messages[1].text(), SYSTEM_ACKNOWLEDGEMENT);

    // The retrieved document landed in the final user message.
    let context = forwarded.messages[2]
        .content()
        .iter()
        .find(|p| p.is_context_carrier())
        .unwrap();
    let expected = format!("{}- [0]: A tessera is a mosaic tile.\n\n", CONTEXT_PREFACE);
    assert_eq!(context.text_content(), Some(expected.as_str()));
}

#[tokio::test]
async fn validator_rejection_reads_like_a_capability_message() {
    let info = ModelInfo::new("compact-1").with_supports(Supports {
        multiturn: Some(false),
        ..Supports::default()
    });
    let chain = MiddlewareChain::new().with(SupportValidator::new(info));

    let request = GenerateRequest::builder()
        .messages(vec![Message::user("one"), Message::user("two")])
        .build()
        .unwrap();

    let err = chain
        .execute(request, |_req| async { Ok(GenerateResponse::from_text("unreached")) })
        .await
        .unwrap_err();
    assert!(err
        .to_string()
        .contains("Model 'compact-1' does not support multiple messages"));
}
