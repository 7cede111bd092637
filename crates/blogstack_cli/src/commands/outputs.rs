//! Outputs command implementation.

use blogstack_core::{synthesize, StackConfig};

/// Runs the outputs command.
pub fn run(config: &StackConfig, format: &str) -> Result<(), Box<dyn std::error::Error>> {
    let synthesis = synthesize(config)?;

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&synthesis.outputs)?),
        "text" => {
            for output in &synthesis.outputs {
                println!("{:45} {}", output.export.as_str(), output.value);
            }
        }
        other => return Err(format!("unknown format: {other}").into()),
    }

    Ok(())
}
