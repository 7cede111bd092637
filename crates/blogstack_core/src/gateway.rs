//! Gateway factory: the HTTP entry point and its route table.

use crate::compute::ApiFunctions;
use crate::error::{CoreError, CoreResult};
use crate::output::Output;
use blogstack_model::{
    Authorizer, CorsPreflight, ExportName, Function, HttpMethod, Route, RoutePath, StackName,
};
use serde::Serialize;
use tracing::debug;

/// An HTTP entry point while routes are still being attached.
///
/// The gateway has exactly two lifecycle states. `HttpApiBuilder` is the
/// *unbound* state; [`HttpApiBuilder::finish`] moves it one-directionally
/// into the *bound* [`HttpApi`], after which no route can be added,
/// removed, or rebound.
#[derive(Debug, Clone)]
pub struct HttpApiBuilder {
    api_name: String,
    cors: Option<CorsPreflight>,
    routes: Vec<Route>,
}

impl HttpApiBuilder {
    /// Creates an unbound gateway named after the stack.
    #[must_use]
    pub fn new(stack: &StackName) -> Self {
        Self {
            api_name: stack.as_str().to_string(),
            cors: None,
            routes: Vec::new(),
        }
    }

    /// Sets the cross-origin preflight policy. It applies uniformly to all
    /// routes; there is no per-route override.
    #[must_use]
    pub fn cors_preflight(mut self, cors: CorsPreflight) -> Self {
        self.cors = Some(cors);
        self
    }

    /// Binds a route to a compute unit, optionally behind the authorizer.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateRoute` if the `(method, path)` pair is already
    /// bound, or an error if the path template is malformed.
    pub fn bind_route(
        &mut self,
        method: HttpMethod,
        path: &str,
        function: &Function,
        authorizer: Option<&Authorizer>,
    ) -> CoreResult<()> {
        let path = RoutePath::new(path)?;
        if self
            .routes
            .iter()
            .any(|r| r.method == method && r.path == path)
        {
            return Err(CoreError::duplicate_route(method.as_str(), path.as_str()));
        }

        self.routes.push(Route::new(
            method,
            path,
            &function.logical_id,
            authorizer.is_some(),
        ));
        Ok(())
    }

    /// Transitions the gateway into its bound state.
    #[must_use]
    pub fn finish(self) -> HttpApi {
        let endpoint = format!("https://{}.example.invalid", self.api_name.to_ascii_lowercase());
        HttpApi {
            api_name: self.api_name,
            cors: self.cors,
            routes: self.routes,
            endpoint,
        }
    }
}

/// The bound HTTP entry point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HttpApi {
    /// API name; equals the stack name.
    pub api_name: String,
    /// Cross-origin preflight policy, if any.
    pub cors: Option<CorsPreflight>,
    /// The complete route table.
    pub routes: Vec<Route>,
    /// Deterministic public endpoint placeholder. The deployment engine
    /// assigns the real endpoint at deploy time.
    pub endpoint: String,
}

impl HttpApi {
    /// Looks up a route by method and path template.
    #[must_use]
    pub fn route(&self, method: HttpMethod, path: &str) -> Option<&Route> {
        self.routes
            .iter()
            .find(|r| r.method == method && r.path.as_str() == path)
    }
}

/// Declares the blog API: gateway, preflight policy, and the exhaustive
/// route table.
///
/// Mutating operations sit behind the authorizer when one exists; reads
/// and login are public. The login route exists only when the login
/// function was declared.
///
/// # Errors
///
/// Returns an error on a malformed or duplicate route declaration.
pub fn blog_api(
    stack: &StackName,
    functions: &ApiFunctions,
    authorizer: Option<&Authorizer>,
) -> CoreResult<HttpApi> {
    let mut builder = HttpApiBuilder::new(stack).cors_preflight(default_cors_preflight());

    builder.bind_route(
        HttpMethod::Post,
        "/api/v1/posts",
        &functions.create_post,
        authorizer,
    )?;
    builder.bind_route(HttpMethod::Get, "/api/v1/posts", &functions.get_all_posts, None)?;
    builder.bind_route(
        HttpMethod::Get,
        "/api/v1/posts/{post_id}",
        &functions.get_post_by_id,
        None,
    )?;
    builder.bind_route(
        HttpMethod::Patch,
        "/api/v1/posts/{post_id}",
        &functions.update_post,
        authorizer,
    )?;
    builder.bind_route(
        HttpMethod::Delete,
        "/api/v1/posts/{post_id}",
        &functions.delete_post,
        authorizer,
    )?;
    if let Some(login) = &functions.login_admin {
        builder.bind_route(HttpMethod::Post, "/api/v1/auth/login/admin", login, None)?;
    }

    let api = builder.finish();
    debug!(routes = api.routes.len(), "gateway factory complete");

    Ok(api)
}

/// Exports the public API URL as `{stack}-HttpApiUrl`.
#[must_use]
pub fn endpoint_output(stack: &StackName, api: &HttpApi) -> Output {
    Output::new(
        ExportName::new(stack, "HttpApiUrl"),
        api.endpoint.clone(),
        "HTTP API URL",
    )
}

fn default_cors_preflight() -> CorsPreflight {
    CorsPreflight {
        allow_headers: vec!["Content-Type".to_string(), "Authorization".to_string()],
        allow_methods: vec![
            HttpMethod::Get,
            HttpMethod::Post,
            HttpMethod::Patch,
            HttpMethod::Delete,
            HttpMethod::Options,
        ],
        // TODO: restrict to the frontend origins once they are stable
        allow_origins: vec!["*".to_string()],
        max_age_secs: 10 * 24 * 60 * 60,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StackConfig;
    use crate::compute::{api_functions, make_authorizer};
    use crate::storage::storage_resources;
    use crate::table::table_resources;

    fn build(config: &StackConfig) -> (StackName, ApiFunctions, Option<Authorizer>) {
        let stack = StackName::new(config.stack_name.clone()).unwrap();
        let storage = storage_resources(&stack, config).unwrap();
        let tables = table_resources(&stack, config).unwrap();
        let functions = api_functions(&stack, config, &storage, &tables).unwrap();
        let authorizer = tables
            .auth_table
            .is_some()
            .then(|| make_authorizer(&stack, config).unwrap());
        (stack, functions, authorizer)
    }

    #[test]
    fn route_table_is_exhaustive() {
        let (stack, functions, authorizer) = build(&StackConfig::default());
        let api = blog_api(&stack, &functions, authorizer.as_ref()).unwrap();

        assert_eq!(api.routes.len(), 6);
        assert_eq!(api.api_name, "BlogBackendStack");

        let bound: Vec<(HttpMethod, &str, &str)> = api
            .routes
            .iter()
            .map(|r| (r.method, r.path.as_str(), r.integration.as_str()))
            .collect();
        assert_eq!(
            bound,
            vec![
                (HttpMethod::Post, "/api/v1/posts", "CreatePost"),
                (HttpMethod::Get, "/api/v1/posts", "GetAllPosts"),
                (HttpMethod::Get, "/api/v1/posts/{post_id}", "GetPostById"),
                (HttpMethod::Patch, "/api/v1/posts/{post_id}", "UpdatePost"),
                (HttpMethod::Delete, "/api/v1/posts/{post_id}", "DeletePost"),
                (HttpMethod::Post, "/api/v1/auth/login/admin", "LoginAdmin"),
            ]
        );
    }

    #[test]
    fn authorizer_attachment_is_binary_per_route() {
        let (stack, functions, authorizer) = build(&StackConfig::default());
        let api = blog_api(&stack, &functions, authorizer.as_ref()).unwrap();

        let authorized = |method, path| api.route(method, path).unwrap().authorized;

        assert!(authorized(HttpMethod::Post, "/api/v1/posts"));
        assert!(authorized(HttpMethod::Patch, "/api/v1/posts/{post_id}"));
        assert!(authorized(HttpMethod::Delete, "/api/v1/posts/{post_id}"));
        assert!(!authorized(HttpMethod::Get, "/api/v1/posts"));
        assert!(!authorized(HttpMethod::Get, "/api/v1/posts/{post_id}"));
        assert!(!authorized(HttpMethod::Post, "/api/v1/auth/login/admin"));
    }

    #[test]
    fn no_auth_drops_login_route_and_authorization() {
        let (stack, functions, authorizer) = build(&StackConfig::default().auth_enabled(false));
        let api = blog_api(&stack, &functions, authorizer.as_ref()).unwrap();

        assert_eq!(api.routes.len(), 5);
        assert!(api.route(HttpMethod::Post, "/api/v1/auth/login/admin").is_none());
        assert!(api.routes.iter().all(|r| !r.authorized));
    }

    #[test]
    fn duplicate_route_is_fatal() {
        let (stack, functions, _) = build(&StackConfig::default());
        let mut builder = HttpApiBuilder::new(&stack);
        builder
            .bind_route(HttpMethod::Get, "/api/v1/posts", &functions.get_all_posts, None)
            .unwrap();
        let err = builder
            .bind_route(HttpMethod::Get, "/api/v1/posts", &functions.get_post_by_id, None)
            .unwrap_err();
        assert!(matches!(err, CoreError::DuplicateRoute { .. }));
    }

    #[test]
    fn preflight_applies_uniformly() {
        let (stack, functions, authorizer) = build(&StackConfig::default());
        let api = blog_api(&stack, &functions, authorizer.as_ref()).unwrap();
        let cors = api.cors.as_ref().unwrap();
        assert_eq!(cors.allow_origins, vec!["*".to_string()]);
        assert_eq!(cors.max_age_secs, 864_000);
        assert_eq!(cors.allow_methods.len(), 5);
    }

    #[test]
    fn endpoint_is_deterministic_and_exported() {
        let (stack, functions, authorizer) = build(&StackConfig::default());
        let api = blog_api(&stack, &functions, authorizer.as_ref()).unwrap();
        assert_eq!(api.endpoint, "https://blogbackendstack.example.invalid");

        let output = endpoint_output(&stack, &api);
        assert_eq!(output.export.as_str(), "BlogBackendStack-HttpApiUrl");
        assert_eq!(output.value, api.endpoint);
    }
}
