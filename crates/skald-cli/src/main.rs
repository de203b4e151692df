//! skald Command-Line Interface
//!
//! Render symbolic gate sequences as circuit diagrams from the shell.

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{info, render, version};

/// skald - circuit diagrams for symbolic gate sequences
#[derive(Parser)]
#[command(name = "skald")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print diagram properties of a gate expression
    Info {
        /// Gate expression, e.g. "CNOT(1,0)*H(1)"
        expr: String,

        /// Number of wires (defaults to the smallest count that fits)
        #[arg(short, long)]
        nqubits: Option<u32>,

        /// Wire-label prefix
        #[arg(short, long, default_value = "q")]
        prefix: String,

        /// Omit wire labels
        #[arg(long)]
        no_labels: bool,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Render a gate expression to an SVG file
    Render {
        /// Gate expression, e.g. "CNOT(1,0)*H(1)"
        expr: String,

        /// Number of wires (defaults to the smallest count that fits)
        #[arg(short, long)]
        nqubits: Option<u32>,

        /// Output file
        #[arg(short, long)]
        output: String,

        /// Wire-label prefix
        #[arg(short, long, default_value = "q")]
        prefix: String,

        /// Omit wire labels
        #[arg(long)]
        no_labels: bool,

        /// Grid pitch override (larger draws a bigger figure)
        #[arg(long)]
        scale: Option<f64>,
    },

    /// Show version information
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    // Execute command
    let result = match cli.command {
        Commands::Info {
            expr,
            nqubits,
            prefix,
            no_labels,
            format,
        } => info::execute(&expr, nqubits, &prefix, no_labels, &format),

        Commands::Render {
            expr,
            nqubits,
            output,
            prefix,
            no_labels,
            scale,
        } => render::execute(&expr, nqubits, &output, &prefix, no_labels, scale),

        Commands::Version => {
            version::execute();
            Ok(())
        }
    };

    // Handle errors
    if let Err(e) = result {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
