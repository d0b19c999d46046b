//! Botstack - Entry Point
//!
//! Binary entry point for the Botstack provisioner.
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `validate` | Check parameters and the resource graph, report every problem |
//! | `plan` | Render the deterministic provisioning plan as JSON |
//! | `apply` | Run the forward pass against the dry-run engine |

use botstack::commands;
use botstack_infrastructure::logging::init_logging;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command line interface for Botstack
#[derive(Parser, Debug)]
#[command(name = "botstack")]
#[command(about = "Botstack - declarative provisioner for an AI chat-bot stack")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands of the provisioner
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate parameters and the resource graph without applying
    Validate,
    /// Render the deterministic provisioning plan as JSON
    Plan {
        /// Write the plan to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Run the forward pass against the dry-run engine
    Apply,
}

/// Main entry point for the Botstack provisioner
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = commands::load_config(cli.config.as_deref())?;
    init_logging(&config.logging)?;

    match cli.command {
        Command::Validate => {
            let report = commands::validate(&config)?;
            if report.ok() {
                println!(
                    "graph valid: {} resources in {} waves",
                    report.resources, report.waves
                );
            } else {
                for problem in &report.problems {
                    eprintln!("{}", problem);
                }
                return Err(format!("{} validation problem(s)", report.problems.len()).into());
            }
        }
        Command::Plan { output } => {
            let plan = commands::plan(&config)?;
            let json = plan.to_json()?;
            match output {
                Some(path) => std::fs::write(&path, json)?,
                None => println!("{}", json),
            }
        }
        Command::Apply => {
            let report = commands::apply(&config).await?;
            for result in &report.results {
                println!("{}: {}", result.name, result.status);
            }
            println!(
                "environment: {} settings on the web application",
                report.settings.len()
            );
            if !report.succeeded() {
                return Err("apply completed with failures".into());
            }
        }
    }
    Ok(())
}
