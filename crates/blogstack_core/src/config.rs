//! Stack configuration.

use blogstack_model::{ImportedValue, RemovalPolicy};
use std::time::Duration;

/// Configuration for synthesizing a stack.
///
/// Carries the externally supplied knobs; everything else about the
/// topology (route table, key schemas, grant levels) is fixed by the
/// factories.
#[derive(Debug, Clone)]
pub struct StackConfig {
    /// Name of the stack; every identity derives from it.
    pub stack_name: String,

    /// Whether the auth table, login operation, and request authorizer are
    /// declared. Disabling this drops all three together.
    pub auth_enabled: bool,

    /// Removal policy applied to the bucket and tables.
    pub removal_policy: RemovalPolicy,

    /// Presigned URL expiry handed to the read-by-id function.
    pub url_expiry: Duration,

    /// Default page size handed to the listing function.
    pub page_size: u32,

    /// Token signing secret, supplied by the operator's environment.
    /// Defaults to empty; this layer never interprets it.
    pub jwt_secret: Option<String>,

    /// Export of the frontend stack whose URL joins the bucket's
    /// cross-origin allow-list.
    pub frontend_origin_import: Option<ImportedValue>,
}

impl StackConfig {
    /// Creates a configuration with default values for the given stack name.
    #[must_use]
    pub fn new(stack_name: impl Into<String>) -> Self {
        Self {
            stack_name: stack_name.into(),
            auth_enabled: true,
            removal_policy: RemovalPolicy::Destroy,
            url_expiry: Duration::from_secs(3600),
            page_size: 20,
            jwt_secret: None,
            frontend_origin_import: Some(ImportedValue::new("BlogFrontendStack-BlogURL")),
        }
    }

    /// Sets whether the auth table, login operation, and authorizer exist.
    #[must_use]
    pub const fn auth_enabled(mut self, value: bool) -> Self {
        self.auth_enabled = value;
        self
    }

    /// Sets the removal policy for the bucket and tables.
    #[must_use]
    pub const fn removal_policy(mut self, policy: RemovalPolicy) -> Self {
        self.removal_policy = policy;
        self
    }

    /// Sets the presigned URL expiry.
    #[must_use]
    pub const fn url_expiry(mut self, expiry: Duration) -> Self {
        self.url_expiry = expiry;
        self
    }

    /// Sets the default page size.
    #[must_use]
    pub const fn page_size(mut self, size: u32) -> Self {
        self.page_size = size;
        self
    }

    /// Sets the token signing secret.
    #[must_use]
    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    /// Sets the frontend origin import, replacing the default.
    #[must_use]
    pub fn frontend_origin_import(mut self, import: Option<ImportedValue>) -> Self {
        self.frontend_origin_import = import;
        self
    }

    /// Returns the signing secret, defaulting to empty.
    #[must_use]
    pub fn jwt_secret_or_empty(&self) -> String {
        self.jwt_secret.clone().unwrap_or_default()
    }
}

impl Default for StackConfig {
    fn default() -> Self {
        Self::new("BlogBackendStack")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = StackConfig::default();
        assert_eq!(config.stack_name, "BlogBackendStack");
        assert!(config.auth_enabled);
        assert_eq!(config.removal_policy, RemovalPolicy::Destroy);
        assert_eq!(config.url_expiry, Duration::from_secs(3600));
        assert_eq!(config.page_size, 20);
        assert!(config.jwt_secret.is_none());
        assert!(config.frontend_origin_import.is_some());
    }

    #[test]
    fn config_builder() {
        let config = StackConfig::new("TestStack")
            .auth_enabled(false)
            .removal_policy(RemovalPolicy::Retain)
            .page_size(50)
            .jwt_secret("shhh")
            .frontend_origin_import(None);

        assert_eq!(config.stack_name, "TestStack");
        assert!(!config.auth_enabled);
        assert_eq!(config.removal_policy, RemovalPolicy::Retain);
        assert_eq!(config.page_size, 50);
        assert_eq!(config.jwt_secret_or_empty(), "shhh");
        assert!(config.frontend_origin_import.is_none());
    }

    #[test]
    fn missing_secret_defaults_to_empty() {
        let config = StackConfig::new("TestStack");
        assert_eq!(config.jwt_secret_or_empty(), "");
    }
}
