//! Storage factory: the posts bucket.

use crate::compute::ApiFunctions;
use crate::config::StackConfig;
use crate::error::CoreResult;
use crate::output::Output;
use blogstack_model::{
    AccessLevel, Bucket, BucketCorsRule, ExportName, Grant, HttpMethod, LogicalId, StackName,
};
use tracing::debug;

/// Origin always present in the bucket's cross-origin allow-list, for
/// local frontend development.
pub const LOCAL_DEV_ORIGIN: &str = "http://localhost:3000";

/// The storage factory's result: the bucket and its exported outputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageResources {
    /// The posts bucket.
    pub bucket: Bucket,
    /// Exported outputs for cross-stack consumption.
    pub outputs: Vec<Output>,
}

/// Declares the posts bucket.
///
/// The bucket is versioned, named `{stack}-PostsBucket` lowercased, and
/// carries one cross-origin rule allowing the local dev origin and the
/// configured frontend import to GET and HEAD objects.
///
/// # Errors
///
/// Returns an error if the derived bucket name fails validation.
pub fn storage_resources(stack: &StackName, config: &StackConfig) -> CoreResult<StorageResources> {
    let mut allowed_origins = vec![LOCAL_DEV_ORIGIN.to_string()];
    if let Some(import) = &config.frontend_origin_import {
        allowed_origins.push(import.render());
    }

    let bucket = Bucket::new(
        LogicalId::new("PostsBucket")?,
        stack.child_lower("PostsBucket"),
    )?
    .versioned(true)
    .removal_policy(config.removal_policy)
    .cors_rule(BucketCorsRule {
        allowed_origins,
        allowed_methods: vec![HttpMethod::Get, HttpMethod::Head],
        allowed_headers: vec!["*".to_string()],
        exposed_headers: vec!["ETag".to_string()],
        max_age_secs: 3000,
    });

    let outputs = vec![Output::new(
        ExportName::new(stack, "PostsBucketName"),
        bucket.bucket_name.clone(),
        "S3 Bucket Name",
    )];

    debug!(bucket = %bucket.bucket_name, "storage factory complete");

    Ok(StorageResources { bucket, outputs })
}

/// Grants each function its required bucket access and nothing more:
/// create and update write post content, read-by-id fetches it.
#[must_use]
pub fn grant_storage(storage: &StorageResources, functions: &ApiFunctions) -> Vec<Grant> {
    let bucket = &storage.bucket.logical_id;

    vec![
        Grant::new(&functions.create_post.logical_id, bucket, AccessLevel::Write),
        Grant::new(&functions.update_post.logical_id, bucket, AccessLevel::Write),
        Grant::new(
            &functions.get_post_by_id.logical_id,
            bucket,
            AccessLevel::Read,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack() -> StackName {
        StackName::new("BlogBackendStack").unwrap()
    }

    #[test]
    fn bucket_name_is_lowercased() {
        let storage = storage_resources(&stack(), &StackConfig::default()).unwrap();
        assert_eq!(storage.bucket.bucket_name, "blogbackendstack-postsbucket");
        assert!(storage.bucket.versioned);
    }

    #[test]
    fn cors_includes_local_and_imported_origin() {
        let storage = storage_resources(&stack(), &StackConfig::default()).unwrap();
        let rule = &storage.bucket.cors[0];
        assert_eq!(
            rule.allowed_origins,
            vec![
                "http://localhost:3000".to_string(),
                "import:BlogFrontendStack-BlogURL".to_string(),
            ]
        );
        assert_eq!(rule.allowed_methods, vec![HttpMethod::Get, HttpMethod::Head]);
        assert_eq!(rule.exposed_headers, vec!["ETag".to_string()]);
    }

    #[test]
    fn cors_without_frontend_import() {
        let config = StackConfig::default().frontend_origin_import(None);
        let storage = storage_resources(&stack(), &config).unwrap();
        assert_eq!(
            storage.bucket.cors[0].allowed_origins,
            vec!["http://localhost:3000".to_string()]
        );
    }

    #[test]
    fn exports_bucket_name() {
        let storage = storage_resources(&stack(), &StackConfig::default()).unwrap();
        assert_eq!(storage.outputs.len(), 1);
        assert_eq!(
            storage.outputs[0].export.as_str(),
            "BlogBackendStack-PostsBucketName"
        );
        assert_eq!(storage.outputs[0].value, "blogbackendstack-postsbucket");
    }
}
