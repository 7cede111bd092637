//! Validate command implementation.

use blogstack_core::{synthesize, StackConfig};
use tracing::info;

/// Runs the validate command.
pub fn run(config: &StackConfig) -> Result<(), Box<dyn std::error::Error>> {
    info!("Validating stack description for {}", config.stack_name);

    let synthesis = synthesize(config)?;

    println!(
        "ok: {} ({} functions, {} routes, {} grants, {} outputs)",
        synthesis.stack,
        synthesis.functions.all().len(),
        synthesis.http_api.routes.len(),
        synthesis.grants.len(),
        synthesis.outputs.len()
    );

    Ok(())
}
