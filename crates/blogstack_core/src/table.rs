//! Table factory: post metadata and optional auth credentials tables.

use crate::compute::ApiFunctions;
use crate::config::StackConfig;
use crate::error::{CoreError, CoreResult};
use crate::output::Output;
use blogstack_model::{
    AccessLevel, AttributeDef, ExportName, Grant, LogicalId, StackName, Table,
};
use tracing::debug;

/// The table factory's result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableResources {
    /// Post metadata table, keyed by post ID and creation time.
    pub post_table: Table,
    /// Auth credentials table, keyed by username and modification time.
    /// Absent when auth is disabled.
    pub auth_table: Option<Table>,
    /// Exported outputs for cross-stack consumption.
    pub outputs: Vec<Output>,
}

/// Declares the metadata tables.
///
/// The post table always exists. The auth table exists only when
/// `config.auth_enabled` is set; without it the login operation is simply
/// not declared downstream.
///
/// # Errors
///
/// Returns an error if a derived table name fails validation.
pub fn table_resources(stack: &StackName, config: &StackConfig) -> CoreResult<TableResources> {
    let post_table = Table::new(
        LogicalId::new("PostMetadataTable")?,
        stack.child("PostMetadataTable"),
        AttributeDef::string("id"),
        AttributeDef::number("createdAt"),
    )?
    .removal_policy(config.removal_policy);

    let auth_table = if config.auth_enabled {
        Some(
            Table::new(
                LogicalId::new("AuthTable")?,
                stack.child("AuthTable"),
                AttributeDef::string("username"),
                AttributeDef::number("modifiedAt"),
            )?
            .removal_policy(config.removal_policy),
        )
    } else {
        None
    };

    let outputs = vec![
        Output::new(
            ExportName::new(stack, "PostMetadataTableName"),
            post_table.table_name.clone(),
            "DynamoDB Table Name",
        ),
        Output::new(
            ExportName::new(stack, "PostMetadataTableARN"),
            post_table.arn(),
            "DynamoDB Table ARN",
        ),
    ];

    debug!(
        post_table = %post_table.table_name,
        auth_table = auth_table.is_some(),
        "table factory complete"
    );

    Ok(TableResources {
        post_table,
        auth_table,
        outputs,
    })
}

/// Grants each function its required table access.
///
/// Levels follow operation semantics: the writer writes, readers read,
/// the updater and deleter read and write. The login function reads the
/// auth table.
///
/// # Errors
///
/// Returns `MissingDependency` if a login function is declared while the
/// auth table is absent.
pub fn grant_tables(tables: &TableResources, functions: &ApiFunctions) -> CoreResult<Vec<Grant>> {
    let post = &tables.post_table.logical_id;

    let mut grants = vec![
        Grant::new(&functions.create_post.logical_id, post, AccessLevel::Write),
        Grant::new(&functions.get_post_by_id.logical_id, post, AccessLevel::Read),
        Grant::new(&functions.get_all_posts.logical_id, post, AccessLevel::Read),
        Grant::new(
            &functions.update_post.logical_id,
            post,
            AccessLevel::ReadWrite,
        ),
        Grant::new(
            &functions.delete_post.logical_id,
            post,
            AccessLevel::ReadWrite,
        ),
    ];

    if let Some(login) = &functions.login_admin {
        let auth = tables.auth_table.as_ref().ok_or_else(|| {
            CoreError::missing_dependency("login function declared without an auth table")
        })?;
        grants.push(Grant::new(
            &login.logical_id,
            &auth.logical_id,
            AccessLevel::Read,
        ));
    }

    Ok(grants)
}
