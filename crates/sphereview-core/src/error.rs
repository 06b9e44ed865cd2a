//! Error types for sphereview.

use thiserror::Error;

/// The main error type for sphereview operations.
#[derive(Error, Debug)]
pub enum SphereViewError {
    /// A view controller class with the given id is already registered.
    #[error("view controller '{0}' already registered")]
    ControllerExists(String),

    /// No view controller class is registered under the given id.
    #[error("view controller '{0}' not found")]
    ControllerNotFound(String),

    /// A property with the given name does not exist on the controller.
    #[error("property '{0}' not found")]
    PropertyNotFound(String),

    /// A property was assigned a value of the wrong kind.
    #[error("property '{name}' expects a {expected} value, got {actual}")]
    PropertyTypeMismatch {
        name: String,
        expected: &'static str,
        actual: &'static str,
    },

    /// A saved configuration has the wrong shape.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A specialized Result type for sphereview operations.
pub type Result<T> = std::result::Result<T, SphereViewError>;
