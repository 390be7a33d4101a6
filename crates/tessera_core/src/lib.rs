//! Core data types for the Tessera request-transformation pipeline.
//!
//! This crate provides the data shapes shared by every middleware stage:
//! requests, messages, content parts, reference documents, and model
//! capability descriptors. It carries no transformation logic of its own.

mod document;
mod media;
mod message;
mod model;
mod output;
mod part;
mod request;
mod role;
mod tool;

pub use document::Document;
pub use media::MediaSource;
pub use message::Message;
pub use model::{ModelInfo, Supports};
pub use output::Output;
pub use part::{Metadata, Part, CONTEXT_PURPOSE, PENDING_KEY, PURPOSE_KEY};
pub use request::{GenerateRequest, GenerateRequestBuilder, GenerateResponse};
pub use role::Role;
pub use tool::{OutputConfig, ToolDefinition};
