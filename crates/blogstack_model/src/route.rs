//! Gateway route bindings.

use crate::error::{ModelError, ModelResult};
use crate::name::LogicalId;
use crate::types::HttpMethod;
use serde::Serialize;
use std::fmt;

/// A validated route path template.
///
/// Templates start with `/` and may contain at most one `{param}` segment.
/// A parameter occupies a whole segment and is named in `snake_case`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct RoutePath(String);

impl RoutePath {
    /// Creates a validated route path.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRoutePath` if the template is empty, does not start
    /// with `/`, has an empty or malformed segment, or contains more than
    /// one parameter.
    pub fn new(path: impl Into<String>) -> ModelResult<Self> {
        let path = path.into();
        if path.is_empty() {
            return Err(ModelError::invalid_route_path(path, "must not be empty"));
        }
        if !path.starts_with('/') {
            return Err(ModelError::invalid_route_path(path, "must start with `/`"));
        }

        let mut params = 0usize;
        for segment in path[1..].split('/') {
            if segment.is_empty() {
                return Err(ModelError::invalid_route_path(
                    path.clone(),
                    "empty path segment",
                ));
            }
            if segment.starts_with('{') || segment.ends_with('}') {
                if !is_valid_param(segment) {
                    return Err(ModelError::invalid_route_path(
                        path.clone(),
                        format!("malformed parameter segment `{segment}`"),
                    ));
                }
                params += 1;
            } else if !segment
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
            {
                return Err(ModelError::invalid_route_path(
                    path.clone(),
                    format!("illegal characters in segment `{segment}`"),
                ));
            }
        }

        if params > 1 {
            return Err(ModelError::invalid_route_path(
                path,
                "at most one path parameter is allowed",
            ));
        }

        Ok(Self(path))
    }

    /// Returns the raw template.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the parameter name, if the template has one.
    #[must_use]
    pub fn param(&self) -> Option<&str> {
        self.0[1..]
            .split('/')
            .find(|s| s.starts_with('{'))
            .map(|s| s.trim_start_matches('{').trim_end_matches('}'))
    }
}

impl fmt::Display for RoutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn is_valid_param(segment: &str) -> bool {
    let Some(inner) = segment
        .strip_prefix('{')
        .and_then(|s| s.strip_suffix('}'))
    else {
        return false;
    };
    let mut chars = inner.chars();
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

/// A `(method, path)` pair bound to exactly one compute unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    /// HTTP method.
    pub method: HttpMethod,
    /// Path template.
    pub path: RoutePath,
    /// Logical ID of the integrated compute unit.
    pub integration: LogicalId,
    /// Whether the route requires authorization.
    pub authorized: bool,
}

impl Route {
    /// Creates a route binding.
    #[must_use]
    pub fn new(
        method: HttpMethod,
        path: RoutePath,
        integration: &LogicalId,
        authorized: bool,
    ) -> Self {
        Self {
            method,
            path,
            integration: integration.clone(),
            authorized,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} -> {}", self.method, self.path, self.integration)
    }
}

/// Gateway-level cross-origin preflight policy.
///
/// Configured once at gateway creation and applied uniformly to all routes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CorsPreflight {
    /// Request headers allowed in cross-origin requests.
    pub allow_headers: Vec<String>,
    /// Methods allowed in cross-origin requests.
    pub allow_methods: Vec<HttpMethod>,
    /// Origins allowed to call the API.
    pub allow_origins: Vec<String>,
    /// How long preflight results may be cached, in seconds.
    pub max_age_secs: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_accepts_plain() {
        let path = RoutePath::new("/api/v1/posts").unwrap();
        assert_eq!(path.as_str(), "/api/v1/posts");
        assert!(path.param().is_none());
    }

    #[test]
    fn path_accepts_one_param() {
        let path = RoutePath::new("/api/v1/posts/{post_id}").unwrap();
        assert_eq!(path.param(), Some("post_id"));
    }

    #[test]
    fn path_rejects_missing_leading_slash() {
        assert!(RoutePath::new("api/v1/posts").is_err());
    }

    #[test]
    fn path_rejects_empty_segment() {
        assert!(RoutePath::new("/api//posts").is_err());
    }

    #[test]
    fn path_rejects_two_params() {
        assert!(RoutePath::new("/api/{a}/{b}").is_err());
    }

    #[test]
    fn path_rejects_malformed_param() {
        assert!(RoutePath::new("/api/v1/posts/{PostId}").is_err());
        assert!(RoutePath::new("/api/v1/posts/{post_id").is_err());
        assert!(RoutePath::new("/api/v1/posts/post_id}").is_err());
    }

    #[test]
    fn route_display() {
        let route = Route::new(
            HttpMethod::Post,
            RoutePath::new("/api/v1/posts").unwrap(),
            &LogicalId::new("CreatePost").unwrap(),
            true,
        );
        assert_eq!(format!("{route}"), "POST /api/v1/posts -> CreatePost");
    }
}
