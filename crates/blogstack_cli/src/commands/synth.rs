//! Synth command implementation.

use blogstack_core::{synthesize, StackConfig, Synthesis};

/// Runs the synth command.
pub fn run(config: &StackConfig, format: &str) -> Result<(), Box<dyn std::error::Error>> {
    let synthesis = synthesize(config)?;

    match format {
        "json" => println!("{}", render_json(&synthesis)?),
        "text" => print_summary(&synthesis),
        other => return Err(format!("unknown format: {other}").into()),
    }

    Ok(())
}

fn render_json(synthesis: &Synthesis) -> serde_json::Result<String> {
    serde_json::to_string_pretty(synthesis)
}

fn print_summary(synthesis: &Synthesis) {
    println!("Stack: {}", synthesis.stack);
    println!();

    println!("Resources:");
    println!("  bucket  {}", synthesis.bucket.bucket_name);
    println!("  table   {}", synthesis.post_table.table_name);
    if let Some(auth) = &synthesis.auth_table {
        println!("  table   {}", auth.table_name);
    }
    for function in synthesis.functions.all() {
        println!("  fn      {}", function.function_name);
    }
    if let Some(authorizer) = &synthesis.authorizer {
        println!("  fn      {} (authorizer)", authorizer.function.function_name);
    }
    println!("  api     {}", synthesis.http_api.api_name);
    println!();

    println!("Routes:");
    for route in &synthesis.http_api.routes {
        let auth = if route.authorized { " [auth]" } else { "" };
        println!("  {route}{auth}");
    }
    println!();

    println!("Grants:");
    for grant in &synthesis.grants {
        println!("  {grant}");
    }
    println!();

    println!("Outputs:");
    for output in &synthesis.outputs {
        println!("  {output}");
    }
}
