//! Error types for controller resolution and execution.

use thiserror::Error;

/// Errors raised while resolving a controller.
///
/// "Controller not known" is not an error: factories return `Ok(None)` for
/// that. These variants cover misuse and factories that recognised a name
/// but could not build the controller.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum FactoryError {
    /// A required argument was missing or malformed.
    /// The string names the offending argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The factory knows the controller but failed to construct it.
    #[error("failed to create controller {controller}: {message}")]
    CreationFailed {
        /// Name of the controller that could not be created.
        controller: String,
        /// Error message.
        message: String,
    },

    /// Catch-all. Include context.
    #[error("{0}")]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Errors raised by a controller while handling a request.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ControllerError {
    /// The action failed.
    #[error("execution failed: {0}")]
    Execution(String),

    /// Catch-all.
    #[error("{0}")]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}
