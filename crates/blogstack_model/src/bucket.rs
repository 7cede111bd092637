//! Object store descriptor.

use crate::error::{ModelError, ModelResult};
use crate::name::LogicalId;
use crate::types::{HttpMethod, RemovalPolicy};
use serde::Serialize;

/// A cross-origin access rule on a bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BucketCorsRule {
    /// Origins allowed to read from the bucket.
    pub allowed_origins: Vec<String>,
    /// Methods the rule applies to.
    pub allowed_methods: Vec<HttpMethod>,
    /// Request headers allowed in cross-origin requests.
    pub allowed_headers: Vec<String>,
    /// Response headers exposed to the caller.
    pub exposed_headers: Vec<String>,
    /// How long preflight results may be cached, in seconds.
    pub max_age_secs: u64,
}

/// An object store for post content.
///
/// One bucket exists per stack. Its physical name is derived from the stack
/// name and lowercased, since object store names must be lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bucket {
    /// Per-stack construct identifier.
    pub logical_id: LogicalId,
    /// Physical (deployed) bucket name.
    pub bucket_name: String,
    /// Whether object versioning is enabled.
    pub versioned: bool,
    /// Removal policy on stack destruction.
    pub removal_policy: RemovalPolicy,
    /// Cross-origin access rules.
    pub cors: Vec<BucketCorsRule>,
}

impl Bucket {
    /// Creates a bucket descriptor with no CORS rules.
    ///
    /// # Errors
    ///
    /// Returns `InvalidIdentity` if the physical name is empty or contains
    /// uppercase characters.
    pub fn new(logical_id: LogicalId, bucket_name: impl Into<String>) -> ModelResult<Self> {
        let bucket_name = bucket_name.into();
        if bucket_name.is_empty() {
            return Err(ModelError::invalid_identity(
                bucket_name,
                "bucket name must not be empty",
            ));
        }
        if bucket_name.chars().any(|c| c.is_ascii_uppercase()) {
            return Err(ModelError::invalid_identity(
                bucket_name,
                "bucket name must be lowercase",
            ));
        }

        Ok(Self {
            logical_id,
            bucket_name,
            versioned: false,
            removal_policy: RemovalPolicy::Destroy,
            cors: Vec::new(),
        })
    }

    /// Sets whether versioning is enabled.
    #[must_use]
    pub const fn versioned(mut self, value: bool) -> Self {
        self.versioned = value;
        self
    }

    /// Sets the removal policy.
    #[must_use]
    pub const fn removal_policy(mut self, policy: RemovalPolicy) -> Self {
        self.removal_policy = policy;
        self
    }

    /// Appends a cross-origin rule.
    #[must_use]
    pub fn cors_rule(mut self, rule: BucketCorsRule) -> Self {
        self.cors.push(rule);
        self
    }
}
