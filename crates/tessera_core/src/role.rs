//! Role types for conversation participants.

use serde::{Deserialize, Serialize};

/// Roles are the same across modalities (text, image, etc.)
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Instructions to the model, conventionally first in the sequence.
    #[display("system")]
    System,
    /// Content authored by the calling application or end user.
    #[display("user")]
    User,
    /// Content produced by the model.
    #[display("model")]
    Model,
    /// Results of tool execution fed back to the model.
    #[display("tool")]
    Tool,
}
