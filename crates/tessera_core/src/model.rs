//! Model capability descriptors.

use serde::{Deserialize, Serialize};

/// Capability flags a model declares.
///
/// Every flag is optional; an absent flag means the capability is
/// unconstrained and no middleware check applies to it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Supports {
    /// Whether messages may contain media parts.
    pub media: Option<bool>,
    /// Whether the request may declare tools.
    pub tools: Option<bool>,
    /// Whether the request may contain more than one message.
    pub multiturn: Option<bool>,
    /// Whether a system-role message is honored natively.
    pub system_role: Option<bool>,
    /// Output format names the model accepts (e.g. "text", "json").
    pub output: Option<Vec<String>>,
}

/// Static descriptor for a target model.
///
/// # Examples
///
/// ```
/// use tessera_core::{ModelInfo, Supports};
///
/// let info = ModelInfo::new("echo-1").with_supports(Supports {
///     media: Some(false),
///     ..Supports::default()
/// });
/// assert_eq!(info.name, "echo-1");
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ModelInfo {
    /// Registry name of the model.
    pub name: String,
    /// Human-readable label.
    pub label: Option<String>,
    /// Declared capability flags; absent means unconstrained.
    pub supports: Option<Supports>,
}

impl ModelInfo {
    /// Creates a descriptor with the given name and no declared capabilities.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: None,
            supports: None,
        }
    }

    /// Sets the capability flags.
    pub fn with_supports(mut self, supports: Supports) -> Self {
        self.supports = Some(supports);
        self
    }
}
