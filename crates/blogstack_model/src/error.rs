//! Error types for descriptor construction.

use thiserror::Error;

/// Result type for descriptor construction.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors that can occur while constructing resource descriptors.
///
/// Every variant is fatal: a descriptor either constructs fully or not at
/// all, and nothing downstream ever sees a half-built value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// An identity string violated the naming rules.
    #[error("invalid identity `{name}`: {message}")]
    InvalidIdentity {
        /// The rejected identity string.
        name: String,
        /// Description of the violation.
        message: String,
    },

    /// A route path template was malformed.
    #[error("invalid route path `{path}`: {message}")]
    InvalidRoutePath {
        /// The rejected path template.
        path: String,
        /// Description of the violation.
        message: String,
    },
}

impl ModelError {
    /// Creates an invalid identity error.
    pub fn invalid_identity(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidIdentity {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Creates an invalid route path error.
    pub fn invalid_route_path(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidRoutePath {
            path: path.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_identity_display() {
        let err = ModelError::invalid_identity("", "must not be empty");
        assert_eq!(err.to_string(), "invalid identity ``: must not be empty");
    }

    #[test]
    fn invalid_route_path_display() {
        let err = ModelError::invalid_route_path("posts", "must start with `/`");
        assert_eq!(
            err.to_string(),
            "invalid route path `posts`: must start with `/`"
        );
    }
}
