mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "site")]
#[command(version, about = "Check form submissions and behavior settings for the site", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a submission against the contact form rules
    Check {
        /// Site configuration file
        #[arg(short, long, default_value = "site.toml")]
        config: PathBuf,

        /// JSON object of field values ("-" reads stdin)
        #[arg(long)]
        values: PathBuf,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate a single value against a list of rules
    Field {
        /// The value to check
        value: String,

        /// Rule in `name[:arg]` notation, repeatable and applied in order
        #[arg(short, long = "rule", required = true)]
        rules: Vec<String>,
    },

    /// Print the effective configuration as TOML
    Config {
        /// Site configuration file
        #[arg(short, long, default_value = "site.toml")]
        config: PathBuf,
    },
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let passed = match cli.command {
        Commands::Check {
            config,
            values,
            json,
        } => commands::check::execute(&config, &values, json)?,
        Commands::Field { value, rules } => commands::field::execute(&value, &rules)?,
        Commands::Config { config } => {
            commands::config::execute(&config)?;
            true
        }
    };

    Ok(if passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
