//! Message types for conversation history.

use crate::{Part, Role};
use serde::{Deserialize, Serialize};

/// A multimodal message in a conversation.
///
/// # Examples
///
/// ```
/// use tessera_core::{Message, Part, Role};
///
/// let message = Message::new(Role::User, vec![Part::text("Hello!")]);
///
/// assert_eq!(*message.role(), Role::User);
/// assert_eq!(message.content().len(), 1);
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
pub struct Message {
    /// The role of the message sender
    role: Role,
    /// The content of the message (can be multimodal)
    content: Vec<Part>,
}

impl Message {
    /// Creates a new message with the given role and content.
    pub fn new(role: Role, content: Vec<Part>) -> Self {
        Self { role, content }
    }

    /// Returns a builder for constructing a Message.
    pub fn builder() -> MessageBuilder {
        MessageBuilder::default()
    }

    /// Creates a single-part text message with the `User` role.
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Role::User, vec![Part::text(text)])
    }

    /// Creates a single-part text message with the `System` role.
    pub fn system(text: impl Into<String>) -> Self {
        Self::new(Role::System, vec![Part::text(text)])
    }

    /// Creates a single-part text message with the `Model` role.
    pub fn model(text: impl Into<String>) -> Self {
        Self::new(Role::Model, vec![Part::text(text)])
    }

    /// Consumes the message, returning its role and parts.
    pub fn into_parts(self) -> (Role, Vec<Part>) {
        (self.role, self.content)
    }

    /// True if any part of this message is media.
    pub fn has_media(&self) -> bool {
        self.content.iter().any(Part::is_media)
    }

    /// Concatenation of all text parts, in order.
    pub fn text(&self) -> String {
        self.content
            .iter()
            .filter_map(Part::text_content)
            .collect()
    }
}
