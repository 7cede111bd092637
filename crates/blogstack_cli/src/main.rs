//! Blogstack CLI
//!
//! Command-line tools for the blog backend topology description.
//!
//! # Commands
//!
//! - `synth` - Synthesize the stack and print the full resource graph
//! - `validate` - Synthesize the stack and report whether it is well-formed
//! - `routes` - Print the API route table
//! - `outputs` - Print the exported deployment-time outputs

mod commands;

use blogstack_core::StackConfig;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Blogstack command-line topology tools.
#[derive(Parser)]
#[command(name = "blogstack")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Name of the stack to describe
    #[arg(global = true, long, default_value = "BlogBackendStack")]
    stack_name: String,

    /// Disable the auth table, login operation, and request authorizer
    #[arg(global = true, long)]
    no_auth: bool,

    /// Enable verbose output
    #[arg(global = true, short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Synthesize the stack and print the full resource graph
    Synth {
        /// Output format (text, json)
        #[arg(short, long, default_value = "json")]
        format: String,
    },

    /// Synthesize the stack and report whether it is well-formed
    Validate,

    /// Print the API route table
    Routes,

    /// Print the exported deployment-time outputs
    Outputs {
        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Show version information
    Version,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut config = StackConfig::new(cli.stack_name).auth_enabled(!cli.no_auth);
    if let Ok(secret) = std::env::var("JWT_SECRET") {
        config = config.jwt_secret(secret);
    }

    match cli.command {
        Commands::Synth { format } => {
            commands::synth::run(&config, &format)?;
        }
        Commands::Validate => {
            commands::validate::run(&config)?;
        }
        Commands::Routes => {
            commands::routes::run(&config)?;
        }
        Commands::Outputs { format } => {
            commands::outputs::run(&config, &format)?;
        }
        Commands::Version => {
            println!("Blogstack CLI v{}", env!("CARGO_PKG_VERSION"));
            println!("Blogstack Core v{}", blogstack_core::VERSION);
        }
    }

    Ok(())
}
