use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod ui;

use commands::{export::ExportCommand, inspect::InspectCommand};

/// cockpit-export - Export cockpit prop placements to engine-ready JSON
#[derive(Parser)]
#[command(
    name = "cockpit-export",
    version = env!("CARGO_PKG_VERSION"),
    about = "Export cockpit prop placements from scene marker dumps to engine-ready JSON",
    long_about = None,
    arg_required_else_help = true
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export a scene dump to a cockpit JSON file
    Export(ExportCommand),

    /// List the exportable props in a scene dump without writing anything
    Inspect(InspectCommand),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize colored output
    colored::control::set_override(!cli.no_color);

    // Initialize logging
    init_logging(cli.verbose);

    match &cli.command {
        Commands::Export(cmd) => cmd.execute(),
        Commands::Inspect(cmd) => cmd.execute(),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(format!("cockpit_core={},cockpit_cli={}", level, level))
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}
