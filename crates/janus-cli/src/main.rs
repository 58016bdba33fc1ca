//! # janus CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use janus_cli::entries::{run_entries, EntriesArgs};
use janus_cli::part::{run_part, PartArgs};
use janus_cli::validate::{run_validate, ValidateArgs};

/// Janus parts toolchain.
///
/// Resolves bundle entry points from part manifests and themes, converts
/// part models to and from property-editor forms, and validates manifests
/// and forms against their schemas.
#[derive(Parser, Debug)]
#[command(name = "janus", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to configuration file (defaults to janus.yaml at the project root).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Project root. Defaults to the nearest ancestor holding janus.yaml or
    /// src/components/activities.
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve the bundler's entry map from manifests and themes.
    Entries(EntriesArgs),

    /// Convert between part models and property-editor forms.
    Part(PartArgs),

    /// Validate part manifests and property-editor forms.
    Validate(ValidateArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let project_root = cli
        .root
        .clone()
        .or_else(janus_cli::find_project_root)
        .unwrap_or_else(|| {
            tracing::warn!("Could not locate project root; using current directory");
            std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
        });

    tracing::debug!(project_root = %project_root.display(), "resolved project root");

    let config = cli.config.as_deref();
    let result = match cli.command {
        Commands::Entries(args) => run_entries(&args, &project_root, config),
        Commands::Part(args) => run_part(&args),
        Commands::Validate(args) => run_validate(&args, &project_root, config),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
