//! Error types for bindline
//!
//! All declaration-time failures are programmer errors surfaced immediately,
//! before any descriptor is exported. There is no retry or recovery path.

use thiserror::Error;

/// Result type alias for bindline operations
pub type Result<T> = std::result::Result<T, BindlineError>;

/// Main error type for bindline
#[derive(Error, Debug)]
pub enum BindlineError {
    /// A second trigger was attached to a function that already has one.
    #[error(
        "a trigger is already registered to function '{function}'; \
         a function can only have one trigger (rejected: {rejected})"
    )]
    DuplicateTrigger {
        /// Name of the function that already owns a trigger.
        function: String,
        /// Binding type tag of the rejected trigger.
        rejected: &'static str,
    },

    /// A declaration was applied to something that is neither an existing
    /// function record nor a valid handler.
    #[error("declaration target '{0}' is neither a function record nor a valid handler")]
    InvalidDecorationTarget(String),

    /// A non-trigger binding was handed to a trigger-attachment operation.
    #[error("binding type '{0}' is not a trigger")]
    NotATrigger(&'static str),

    /// Descriptor export failed to serialize.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
