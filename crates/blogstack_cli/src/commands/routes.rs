//! Routes command implementation.

use blogstack_core::{synthesize, StackConfig};

/// Runs the routes command.
pub fn run(config: &StackConfig) -> Result<(), Box<dyn std::error::Error>> {
    let synthesis = synthesize(config)?;

    for route in &synthesis.http_api.routes {
        let auth = if route.authorized { "auth" } else { "open" };
        println!(
            "{:6} {:30} -> {:12} [{auth}]",
            route.method.as_str(),
            route.path.as_str(),
            route.integration.as_str()
        );
    }

    Ok(())
}
