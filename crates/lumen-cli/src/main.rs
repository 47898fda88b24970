use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use lumen_cli::commands::{self, AdjustArgs};
use lumen_cli::{CliConfig, CliError};
use lumen_core::ProfileRegistry;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "lumen")]
#[command(version, about = "Photographic color grading for still images", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply adjustments to an image
    Process {
        /// Input file or data URL
        #[arg(value_name = "INPUT")]
        input: String,

        /// Output file (defaults to edited_image_<timestamp>.jpg)
        #[arg(short, long, value_name = "FILE", conflicts_with = "data_url")]
        output: Option<PathBuf>,

        /// Print the result as a JPEG data URL instead of writing a file
        #[arg(long)]
        data_url: bool,

        #[command(flatten)]
        adjust: AdjustArgs,
    },

    /// Build a downscaled JPEG preview of an image
    Preview {
        /// Input file or data URL
        #[arg(value_name = "INPUT")]
        input: String,

        /// Output file (prints a data URL when omitted)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// List the available camera profiles
    Profiles,
}

fn run(cli: Cli, config: &CliConfig) -> Result<serde_json::Value, CliError> {
    match cli.command {
        Commands::Process {
            input,
            output,
            data_url,
            adjust,
        } => commands::process(&input, output.as_deref(), data_url, &adjust, config),
        Commands::Preview { input, output } => commands::preview(&input, output.as_deref(), config),
        Commands::Profiles => commands::profiles(ProfileRegistry::builtin()),
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = CliConfig::default();

    match run(cli, &config) {
        Ok(report) => {
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("{}", serde_json::json!({ "error": e.to_string() }));
            ExitCode::FAILURE
        }
    }
}
