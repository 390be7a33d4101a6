//! Middleware error types.

/// A model capability a request may depend on.
///
/// The display form is the phrase used in validator error messages, so
/// `Capability::ToolUse` renders as `tool use` inside
/// "Model 'x' does not support tool use".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Capability {
    /// Media parts (images, audio, video) in message content.
    #[display("media")]
    Media,
    /// Tool declarations on the request.
    #[display("tool use")]
    ToolUse,
    /// More than one message in the conversation.
    #[display("multiple messages")]
    Multiturn,
}

/// Middleware-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MiddlewareErrorKind {
    /// The target model does not declare support for a capability the
    /// request depends on. Raised only by the support validator.
    UnsupportedCapability {
        /// Name of the model that rejected the request
        model: String,
        /// The capability the request depends on
        capability: Capability,
    },
    /// The terminal model handler failed after every stage forwarded.
    Model(String),
}

impl std::fmt::Display for MiddlewareErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MiddlewareErrorKind::UnsupportedCapability { model, capability } => {
                write!(f, "Model '{}' does not support {}", model, capability)
            }
            MiddlewareErrorKind::Model(msg) => write!(f, "Model invocation failed: {}", msg),
        }
    }
}

/// Middleware error with source location tracking.
///
/// # Examples
///
/// ```
/// use tessera_error::{Capability, MiddlewareError, MiddlewareErrorKind};
///
/// let err = MiddlewareError::new(MiddlewareErrorKind::UnsupportedCapability {
///     model: "echo-1".to_string(),
///     capability: Capability::Media,
/// });
/// assert!(format!("{}", err).contains("does not support media"));
/// ```
#[derive(Debug, Clone)]
pub struct MiddlewareError {
    /// The kind of error that occurred
    pub kind: MiddlewareErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl MiddlewareError {
    /// Create a new MiddlewareError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: MiddlewareErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Shorthand for an unsupported-capability error.
    #[track_caller]
    pub fn unsupported(model: impl Into<String>, capability: Capability) -> Self {
        Self::new(MiddlewareErrorKind::UnsupportedCapability {
            model: model.into(),
            capability,
        })
    }
}

impl std::fmt::Display for MiddlewareError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Middleware Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for MiddlewareError {}

/// Result type for middleware operations.
pub type MiddlewareResult<T> = Result<T, MiddlewareError>;
