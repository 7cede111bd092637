//! Stack assembler.

use crate::compute::{api_functions, make_authorizer, ApiFunctions};
use crate::config::StackConfig;
use crate::error::{CoreError, CoreResult};
use crate::gateway::{blog_api, endpoint_output, HttpApi};
use crate::output::Output;
use crate::storage::{grant_storage, storage_resources};
use crate::table::{grant_tables, table_resources};
use blogstack_model::{Authorizer, Bucket, Grant, LogicalId, StackName, Table};
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::{debug, info};

/// The complete, validated description of one deployable stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Synthesis {
    /// The stack name.
    pub stack: StackName,
    /// The posts bucket.
    pub bucket: Bucket,
    /// The post metadata table.
    pub post_table: Table,
    /// The auth credentials table, when auth is enabled.
    pub auth_table: Option<Table>,
    /// One function per API operation.
    pub functions: ApiFunctions,
    /// The request authorizer, when auth is enabled.
    pub authorizer: Option<Authorizer>,
    /// The bound HTTP entry point.
    pub http_api: HttpApi,
    /// All permission edges.
    pub grants: Vec<Grant>,
    /// All exported outputs.
    pub outputs: Vec<Output>,
}

/// Synthesizes a stack description from its configuration.
///
/// Runs the factories in strict order - storage, tables, compute, gateway,
/// grants - then collects outputs and checks graph-wide invariants. Each
/// step consumes the previous steps' results as explicit parameters, so
/// the ordering cannot be violated by a caller. Assembly either completes
/// fully or returns the first error; there is no partial result.
///
/// # Errors
///
/// Returns an error on a malformed identity, a missing dependency, a
/// duplicate logical name, or a duplicate route.
pub fn synthesize(config: &StackConfig) -> CoreResult<Synthesis> {
    let stack = StackName::new(config.stack_name.clone())?;
    debug!(stack = %stack, "assembling stack description");

    let storage = storage_resources(&stack, config)?;
    let tables = table_resources(&stack, config)?;
    let functions = api_functions(&stack, config, &storage, &tables)?;
    let authorizer = match &tables.auth_table {
        Some(_) => Some(make_authorizer(&stack, config)?),
        None => None,
    };
    let http_api = blog_api(&stack, &functions, authorizer.as_ref())?;

    ensure_routes_resolve(&http_api, &functions)?;
    ensure_unique_logical_ids(
        &storage.bucket,
        &tables.post_table,
        tables.auth_table.as_ref(),
        &functions,
        authorizer.as_ref(),
    )?;

    let mut grants = grant_storage(&storage, &functions);
    grants.extend(grant_tables(&tables, &functions)?);

    let mut outputs = storage.outputs.clone();
    outputs.extend(tables.outputs.clone());
    outputs.push(endpoint_output(&stack, &http_api));

    info!(
        stack = %stack,
        functions = functions.all().len(),
        routes = http_api.routes.len(),
        grants = grants.len(),
        outputs = outputs.len(),
        "stack description complete"
    );

    Ok(Synthesis {
        stack,
        bucket: storage.bucket,
        post_table: tables.post_table,
        auth_table: tables.auth_table,
        functions,
        authorizer,
        http_api,
        grants,
        outputs,
    })
}

/// Checks that every route's integration refers to a declared function.
fn ensure_routes_resolve(api: &HttpApi, functions: &ApiFunctions) -> CoreResult<()> {
    let declared: BTreeSet<&LogicalId> =
        functions.all().into_iter().map(|f| &f.logical_id).collect();

    for route in &api.routes {
        if !declared.contains(&route.integration) {
            return Err(CoreError::missing_dependency(format!(
                "route {} {} is bound to undeclared function `{}`",
                route.method, route.path, route.integration
            )));
        }
    }

    Ok(())
}

/// Checks that no two constructs claim the same logical name.
fn ensure_unique_logical_ids(
    bucket: &Bucket,
    post_table: &Table,
    auth_table: Option<&Table>,
    functions: &ApiFunctions,
    authorizer: Option<&Authorizer>,
) -> CoreResult<()> {
    let mut ids: Vec<&LogicalId> = vec![&bucket.logical_id, &post_table.logical_id];
    if let Some(auth) = auth_table {
        ids.push(&auth.logical_id);
    }
    ids.extend(functions.all().into_iter().map(|f| &f.logical_id));
    if let Some(authorizer) = authorizer {
        ids.push(&authorizer.id);
        ids.push(&authorizer.function.logical_id);
    }

    ensure_unique(&ids)
}

fn ensure_unique(ids: &[&LogicalId]) -> CoreResult<()> {
    let mut seen = BTreeSet::new();
    for id in ids {
        if !seen.insert(*id) {
            return Err(CoreError::duplicate_logical_id(id.as_str()));
        }
    }
    Ok(())
}
