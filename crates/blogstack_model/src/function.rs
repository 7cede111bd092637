//! Compute unit descriptor.

use crate::name::LogicalId;
use serde::{Serialize, Serializer};

/// Environment variable: object store bucket name.
pub const ENV_S3_BUCKET_NAME: &str = "S3_BUCKET_NAME";
/// Environment variable: post metadata table name.
pub const ENV_POST_METADATA_TABLE_NAME: &str = "POST_METADATA_TABLE_NAME";
/// Environment variable: auth credentials table name.
pub const ENV_AUTH_TABLE_NAME: &str = "AUTH_TABLE_NAME";
/// Environment variable: presigned URL expiry in seconds.
pub const ENV_S3_URL_EXPIRY_SECONDS: &str = "S3_URL_EXPIRY_SECONDS";
/// Environment variable: default listing page size.
pub const ENV_DEFAULT_PAGE_SIZE: &str = "DEFAULT_PAGE_SIZE";
/// Environment variable: token signing secret.
pub const ENV_JWT_SECRET: &str = "JWT_SECRET";

/// Execution runtime of a compute unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Runtime {
    /// Custom runtime on Amazon Linux 2023.
    ProvidedAl2023,
}

impl Runtime {
    /// Returns the provider's runtime tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ProvidedAl2023 => "provided.al2023",
        }
    }
}

/// Environment variable record for one compute unit.
///
/// This is a closed record of named fields rather than an open string map:
/// the set of variable names is known at compile time, so a misspelled or
/// missing reference cannot reach a deployed function. Unset fields are
/// absent from the rendered environment, not empty strings. Fields render
/// in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Environment {
    /// Object store bucket name, if the operation touches post content.
    pub bucket_name: Option<String>,
    /// Presigned URL expiry in seconds.
    pub url_expiry_secs: Option<u64>,
    /// Post metadata table name.
    pub post_table_name: Option<String>,
    /// Auth credentials table name.
    pub auth_table_name: Option<String>,
    /// Default listing page size.
    pub page_size: Option<u32>,
    /// Token signing secret. Deployed code reads this unconditionally, so
    /// callers that need it set it even when the configured value is empty.
    /// Serialized output masks the value; only [`Environment::render`]
    /// exposes it, for the deployment engine.
    #[serde(serialize_with = "redact_secret")]
    pub jwt_secret: Option<String>,
}

impl Environment {
    /// Creates an empty environment record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the bucket name.
    #[must_use]
    pub fn bucket_name(mut self, name: impl Into<String>) -> Self {
        self.bucket_name = Some(name.into());
        self
    }

    /// Sets the post metadata table name.
    #[must_use]
    pub fn post_table_name(mut self, name: impl Into<String>) -> Self {
        self.post_table_name = Some(name.into());
        self
    }

    /// Sets the auth table name.
    #[must_use]
    pub fn auth_table_name(mut self, name: impl Into<String>) -> Self {
        self.auth_table_name = Some(name.into());
        self
    }

    /// Sets the presigned URL expiry.
    #[must_use]
    pub const fn url_expiry_secs(mut self, secs: u64) -> Self {
        self.url_expiry_secs = Some(secs);
        self
    }

    /// Sets the default page size.
    #[must_use]
    pub const fn page_size(mut self, size: u32) -> Self {
        self.page_size = Some(size);
        self
    }

    /// Sets the token signing secret.
    #[must_use]
    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    /// Renders the record as `(name, value)` pairs in declaration order.
    #[must_use]
    pub fn render(&self) -> Vec<(&'static str, String)> {
        let mut vars = Vec::new();
        if let Some(v) = &self.bucket_name {
            vars.push((ENV_S3_BUCKET_NAME, v.clone()));
        }
        if let Some(v) = self.url_expiry_secs {
            vars.push((ENV_S3_URL_EXPIRY_SECONDS, v.to_string()));
        }
        if let Some(v) = &self.post_table_name {
            vars.push((ENV_POST_METADATA_TABLE_NAME, v.clone()));
        }
        if let Some(v) = &self.auth_table_name {
            vars.push((ENV_AUTH_TABLE_NAME, v.clone()));
        }
        if let Some(v) = self.page_size {
            vars.push((ENV_DEFAULT_PAGE_SIZE, v.to_string()));
        }
        if let Some(v) = &self.jwt_secret {
            vars.push((ENV_JWT_SECRET, v.clone()));
        }
        vars
    }
}

fn redact_secret<S>(secret: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match secret {
        Some(_) => serializer.serialize_some("<redacted>"),
        None => serializer.serialize_none(),
    }
}

/// A deployable compute unit handling one API operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Function {
    /// Per-stack construct identifier.
    pub logical_id: LogicalId,
    /// Physical (deployed) function name: `{stack}-{Suffix}`.
    pub function_name: String,
    /// Execution runtime.
    pub runtime: Runtime,
    /// Invocation timeout in seconds.
    pub timeout_secs: u64,
    /// Path to the deployment artifact directory.
    pub code_asset: String,
    /// Entry-point name inside the artifact.
    pub handler: String,
    /// Environment variable record.
    pub environment: Environment,
}

impl Function {
    /// Creates a function descriptor with the topology-wide defaults:
    /// custom AL2023 runtime, 30 second timeout, `bootstrap` handler.
    #[must_use]
    pub fn new(
        logical_id: LogicalId,
        function_name: impl Into<String>,
        code_asset: impl Into<String>,
    ) -> Self {
        Self {
            logical_id,
            function_name: function_name.into(),
            runtime: Runtime::ProvidedAl2023,
            timeout_secs: 30,
            code_asset: code_asset.into(),
            handler: "bootstrap".to_string(),
            environment: Environment::new(),
        }
    }

    /// Overrides the entry-point name.
    #[must_use]
    pub fn handler(mut self, handler: impl Into<String>) -> Self {
        self.handler = handler.into();
        self
    }

    /// Overrides the invocation timeout.
    #[must_use]
    pub const fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Sets the environment record.
    #[must_use]
    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }
}

/// How the authorizer answers the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AuthorizerResponseType {
    /// Boolean allow/deny response.
    Simple,
}

/// A distinguished compute unit that approves or denies a request before
/// its target function runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Authorizer {
    /// Gateway-level identifier of the authorizer attachment.
    pub id: LogicalId,
    /// Response contract with the gateway.
    pub response_type: AuthorizerResponseType,
    /// The backing compute unit.
    pub function: Function,
}

impl Authorizer {
    /// Wraps a function as a request authorizer.
    #[must_use]
    pub const fn new(id: LogicalId, function: Function) -> Self {
        Self {
            id,
            response_type: AuthorizerResponseType::Simple,
            function,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_post() -> Function {
        Function::new(
            LogicalId::new("CreatePost").unwrap(),
            "BlogBackendStack-CreatePost",
            "src/api/post/create/build",
        )
    }

    #[test]
    fn function_defaults() {
        let function = create_post();
        assert_eq!(function.runtime, Runtime::ProvidedAl2023);
        assert_eq!(function.timeout_secs, 30);
        assert_eq!(function.handler, "bootstrap");
        assert!(function.environment.render().is_empty());
    }

    #[test]
    fn handler_override() {
        let function = create_post().handler("main");
        assert_eq!(function.handler, "main");
    }

    #[test]
    fn environment_renders_in_declaration_order() {
        let env = Environment::new()
            .page_size(20)
            .post_table_name("BlogBackendStack-PostMetadataTable")
            .bucket_name("blogbackendstack-postsbucket");

        let vars = env.render();
        assert_eq!(
            vars,
            vec![
                (ENV_S3_BUCKET_NAME, "blogbackendstack-postsbucket".to_string()),
                (
                    ENV_POST_METADATA_TABLE_NAME,
                    "BlogBackendStack-PostMetadataTable".to_string()
                ),
                (ENV_DEFAULT_PAGE_SIZE, "20".to_string()),
            ]
        );
    }

    #[test]
    fn unset_fields_are_absent() {
        let env = Environment::new().post_table_name("t");
        let vars = env.render();
        assert_eq!(vars.len(), 1);
        assert!(vars.iter().all(|(name, _)| *name != ENV_S3_BUCKET_NAME));
    }

    #[test]
    fn empty_jwt_secret_renders_as_empty_string() {
        let env = Environment::new().jwt_secret("");
        assert_eq!(env.render(), vec![(ENV_JWT_SECRET, String::new())]);
    }

    #[test]
    fn serialized_environment_masks_the_secret() {
        let env = Environment::new().jwt_secret("super-secret");
        let json = serde_json::to_string(&env).unwrap();
        assert!(!json.contains("super-secret"));
        assert!(json.contains("<redacted>"));
    }

    #[test]
    fn serialized_environment_keeps_unset_secret_absent() {
        let env = Environment::new().post_table_name("t");
        let json = serde_json::to_value(&env).unwrap();
        assert!(json["jwt_secret"].is_null());
    }

    #[test]
    fn authorizer_response_type() {
        let authorizer = Authorizer::new(
            LogicalId::new("BlogLambdaAuthorizer").unwrap(),
            create_post().handler("main"),
        );
        assert_eq!(authorizer.response_type, AuthorizerResponseType::Simple);
    }
}
