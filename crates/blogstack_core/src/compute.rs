//! Compute factory: one function per API operation.

use crate::config::StackConfig;
use crate::error::CoreResult;
use crate::storage::StorageResources;
use crate::table::TableResources;
use blogstack_model::{Authorizer, Environment, Function, LogicalId, StackName};
use serde::Serialize;
use tracing::debug;

/// The compute factory's result: one function per API operation.
///
/// A closed record rather than a string-keyed map, so a route can only
/// reference an operation that actually exists. `login_admin` is absent
/// (not null) when the auth table was not declared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiFunctions {
    /// Creates a post.
    pub create_post: Function,
    /// Updates a post in place.
    pub update_post: Function,
    /// Fetches one post with a presigned content URL.
    pub get_post_by_id: Function,
    /// Lists posts with pagination.
    pub get_all_posts: Function,
    /// Deletes a post.
    pub delete_post: Function,
    /// Authenticates the admin user. Absent when auth is disabled.
    pub login_admin: Option<Function>,
}

impl ApiFunctions {
    /// Returns every declared function, for graph-wide checks.
    #[must_use]
    pub fn all(&self) -> Vec<&Function> {
        let mut functions = vec![
            &self.create_post,
            &self.update_post,
            &self.get_post_by_id,
            &self.get_all_posts,
            &self.delete_post,
        ];
        if let Some(login) = &self.login_admin {
            functions.push(login);
        }
        functions
    }
}

/// Declares the API operation functions.
///
/// The parameter list carries the construction-order invariant: storage
/// and tables must already exist, because every environment record is
/// populated from their physical names. There is no runtime fallback for
/// a missing handle; the reverse order does not compile.
///
/// # Errors
///
/// Returns an error if a derived identity fails validation.
pub fn api_functions(
    stack: &StackName,
    config: &StackConfig,
    storage: &StorageResources,
    tables: &TableResources,
) -> CoreResult<ApiFunctions> {
    let bucket_name = storage.bucket.bucket_name.as_str();
    let post_table_name = tables.post_table.table_name.as_str();

    let create_post = operation_function(stack, "CreatePost", "src/api/post/create/build")?
        .environment(
            Environment::new()
                .bucket_name(bucket_name)
                .post_table_name(post_table_name),
        );

    let update_post = operation_function(stack, "UpdatePost", "src/api/post/update/build")?
        .environment(
            Environment::new()
                .bucket_name(bucket_name)
                .post_table_name(post_table_name),
        );

    let get_post_by_id = operation_function(stack, "GetPostById", "src/api/post/getbyid/build")?
        .environment(
            Environment::new()
                .bucket_name(bucket_name)
                .url_expiry_secs(config.url_expiry.as_secs())
                .post_table_name(post_table_name),
        );

    let get_all_posts = operation_function(stack, "GetAllPosts", "src/api/post/getall/build")?
        .environment(
            Environment::new()
                .post_table_name(post_table_name)
                .page_size(config.page_size),
        );

    let delete_post = operation_function(stack, "DeletePost", "src/api/post/delete/build")?
        .environment(Environment::new().post_table_name(post_table_name));

    let login_admin = match &tables.auth_table {
        Some(auth_table) => Some(
            operation_function(stack, "LoginAdmin", "src/api/auth/login/admin/build")?
                .environment(
                    Environment::new()
                        .auth_table_name(auth_table.table_name.as_str())
                        .jwt_secret(config.jwt_secret_or_empty()),
                ),
        ),
        None => None,
    };

    let functions = ApiFunctions {
        create_post,
        update_post,
        get_post_by_id,
        get_all_posts,
        delete_post,
        login_admin,
    };

    debug!(count = functions.all().len(), "compute factory complete");

    Ok(functions)
}

/// Declares the request authorizer.
///
/// The backing function validates tokens with the configured secret; its
/// entry point is `main` rather than the `bootstrap` default.
///
/// # Errors
///
/// Returns an error if a derived identity fails validation.
pub fn make_authorizer(stack: &StackName, config: &StackConfig) -> CoreResult<Authorizer> {
    let function = Function::new(
        LogicalId::new("AuthorizerFunction")?,
        stack.child("Authorizer"),
        "src/api/auth/authorizer/build",
    )
    .handler("main")
    .environment(Environment::new().jwt_secret(config.jwt_secret_or_empty()));

    Ok(Authorizer::new(
        LogicalId::new("BlogLambdaAuthorizer")?,
        function,
    ))
}

fn operation_function(stack: &StackName, suffix: &str, asset: &str) -> CoreResult<Function> {
    Ok(Function::new(
        LogicalId::new(suffix)?,
        stack.child(suffix),
        asset,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::storage_resources;
    use crate::table::table_resources;
    use blogstack_model::{
        ENV_AUTH_TABLE_NAME, ENV_DEFAULT_PAGE_SIZE, ENV_JWT_SECRET, ENV_POST_METADATA_TABLE_NAME,
        ENV_S3_BUCKET_NAME, ENV_S3_URL_EXPIRY_SECONDS,
    };

    fn build(config: &StackConfig) -> ApiFunctions {
        let stack = StackName::new(config.stack_name.clone()).unwrap();
        let storage = storage_resources(&stack, config).unwrap();
        let tables = table_resources(&stack, config).unwrap();
        api_functions(&stack, config, &storage, &tables).unwrap()
    }

    fn env_keys(function: &Function) -> Vec<&'static str> {
        function
            .environment
            .render()
            .into_iter()
            .map(|(name, _)| name)
            .collect()
    }

    #[test]
    fn one_function_per_operation() {
        let functions = build(&StackConfig::default());
        assert_eq!(functions.all().len(), 6);
        assert_eq!(
            functions.create_post.function_name,
            "BlogBackendStack-CreatePost"
        );
        assert_eq!(functions.create_post.handler, "bootstrap");
        assert_eq!(functions.create_post.timeout_secs, 30);
    }

    #[test]
    fn environment_contracts() {
        let functions = build(&StackConfig::default());

        assert_eq!(
            env_keys(&functions.create_post),
            vec![ENV_S3_BUCKET_NAME, ENV_POST_METADATA_TABLE_NAME]
        );
        assert_eq!(
            env_keys(&functions.update_post),
            vec![ENV_S3_BUCKET_NAME, ENV_POST_METADATA_TABLE_NAME]
        );
        assert_eq!(
            env_keys(&functions.get_post_by_id),
            vec![
                ENV_S3_BUCKET_NAME,
                ENV_S3_URL_EXPIRY_SECONDS,
                ENV_POST_METADATA_TABLE_NAME,
            ]
        );
        assert_eq!(
            env_keys(&functions.get_all_posts),
            vec![ENV_POST_METADATA_TABLE_NAME, ENV_DEFAULT_PAGE_SIZE]
        );
        assert_eq!(
            env_keys(&functions.delete_post),
            vec![ENV_POST_METADATA_TABLE_NAME]
        );

        let login = functions.login_admin.as_ref().unwrap();
        assert_eq!(env_keys(login), vec![ENV_AUTH_TABLE_NAME, ENV_JWT_SECRET]);
    }

    #[test]
    fn environment_values_resolve_to_physical_names() {
        let functions = build(&StackConfig::default());
        let vars = functions.create_post.environment.render();
        assert!(vars.contains(&(
            ENV_S3_BUCKET_NAME,
            "blogbackendstack-postsbucket".to_string()
        )));
        assert!(vars.contains(&(
            ENV_POST_METADATA_TABLE_NAME,
            "BlogBackendStack-PostMetadataTable".to_string()
        )));
    }

    #[test]
    fn auth_disabled_omits_login() {
        let functions = build(&StackConfig::default().auth_enabled(false));
        assert!(functions.login_admin.is_none());
        assert_eq!(functions.all().len(), 5);
    }

    #[test]
    fn jwt_secret_defaults_to_empty() {
        let functions = build(&StackConfig::default());
        let login = functions.login_admin.as_ref().unwrap();
        let vars = login.environment.render();
        assert!(vars.contains(&(ENV_JWT_SECRET, String::new())));
    }

    #[test]
    fn authorizer_uses_main_handler() {
        let stack = StackName::new("BlogBackendStack").unwrap();
        let authorizer = make_authorizer(&stack, &StackConfig::default()).unwrap();
        assert_eq!(authorizer.function.handler, "main");
        assert_eq!(
            authorizer.function.function_name,
            "BlogBackendStack-Authorizer"
        );
        assert_eq!(env_keys(&authorizer.function), vec![ENV_JWT_SECRET]);
    }
}
