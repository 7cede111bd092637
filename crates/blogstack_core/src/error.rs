//! Error types for stack assembly.

use blogstack_model::ModelError;
use thiserror::Error;

/// Result type for assembly operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur during stack assembly.
///
/// All of these are description-build-time failures: assembly either
/// completes fully or aborts before any deployment action exists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Descriptor construction error.
    #[error("descriptor error: {0}")]
    Model(#[from] ModelError),

    /// A factory referenced a dependency that was never created.
    #[error("missing dependency: {message}")]
    MissingDependency {
        /// Description of the missing handle.
        message: String,
    },

    /// Two constructs claimed the same logical name.
    #[error("duplicate logical id: {id}")]
    DuplicateLogicalId {
        /// The contested logical name.
        id: String,
    },

    /// The same `(method, path)` pair was bound twice.
    #[error("duplicate route: {method} {path}")]
    DuplicateRoute {
        /// HTTP method of the contested route.
        method: String,
        /// Path template of the contested route.
        path: String,
    },
}

impl CoreError {
    /// Creates a missing dependency error.
    pub fn missing_dependency(message: impl Into<String>) -> Self {
        Self::MissingDependency {
            message: message.into(),
        }
    }

    /// Creates a duplicate logical ID error.
    pub fn duplicate_logical_id(id: impl Into<String>) -> Self {
        Self::DuplicateLogicalId { id: id.into() }
    }

    /// Creates a duplicate route error.
    pub fn duplicate_route(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self::DuplicateRoute {
            method: method.into(),
            path: path.into(),
        }
    }
}
