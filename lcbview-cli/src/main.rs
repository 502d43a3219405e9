use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use lcbview_core::SeqPos;
use std::path::PathBuf;

mod commands;
mod config;
mod error;
mod input;

use config::Config;
use error::{print_error_and_exit, CliError};

#[derive(Parser)]
#[command(name = "lcbview")]
#[command(about = "LCBview - multi-genome locally collinear block viewer")]
#[command(version)]
#[command(long_about = "
LCBview loads a set of genomes and their locally collinear blocks, maps a
cursor position across every aligned genome, and rewrites the block set after
reorienting around a reference genome or reordering tracks.

Examples:
  lcbview info --input blocks.json
  lcbview hover --input blocks.json --track ecoli_k12 --position 150
  lcbview hover --input blocks.json.gz --track 2 --position 5200 --zoom 8 --pan -2000
  lcbview reorient --input blocks.json --reference shigella --output oriented.json
  lcbview swap --input blocks.json --a 1 --b 3 --output reordered.json
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List tracks and block counts
    Info {
        /// Alignment file (JSON, optionally .gz)
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Map a sequence position on one track onto every aligned track
    Hover {
        /// Alignment file (JSON, optionally .gz)
        #[arg(short, long)]
        input: PathBuf,

        /// Hovered track, as slot number or identifier
        #[arg(short, long)]
        track: String,

        /// Sequence position on the hovered track
        #[arg(short, long)]
        position: SeqPos,

        /// Reorient around this track before mapping
        #[arg(long)]
        reference: Option<String>,

        /// Zoom factor
        #[arg(long)]
        zoom: Option<f64>,

        /// Horizontal pan offset in surface units
        #[arg(long, allow_hyphen_values = true)]
        pan: Option<f64>,

        /// Emit the cursor frame as JSON
        #[arg(long)]
        json: bool,
    },

    /// Flip blocks so the reference track reads forward everywhere
    Reorient {
        /// Alignment file (JSON, optionally .gz)
        #[arg(short, long)]
        input: PathBuf,

        /// Reference track, as slot number or identifier
        #[arg(short, long)]
        reference: String,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Exchange the slots of two tracks
    Swap {
        /// Alignment file (JSON, optionally .gz)
        #[arg(short, long)]
        input: PathBuf,

        /// First track, as slot number or identifier
        #[arg(long)]
        a: String,

        /// Second track, as slot number or identifier
        #[arg(long)]
        b: String,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show or generate configuration
    Config {
        /// Print an example configuration file
        #[arg(long)]
        example: bool,

        /// Write the effective configuration to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn setup_logging(verbose: u8, quiet: bool, configured: &str) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => configured,
            1 => "debug",
            _ => "trace",
        }
    };

    env_logger::Builder::from_env(Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config_path = Config::resolve_path(cli.config.as_deref());
    let config = Config::load(config_path.as_deref())
        .map_err(|e| CliError::config(format!("{:#}", e)))?;

    // Log level may come from the config file.
    setup_logging(cli.verbose, cli.quiet, &config.general.log_level);
    log::info!("{}", Config::describe_source(config_path.as_deref()));

    match cli.command {
        Commands::Info { input } => {
            commands::info::execute(input)?;
        }

        Commands::Hover {
            input,
            track,
            position,
            reference,
            zoom,
            pan,
            json,
        } => {
            commands::hover::execute(&config, input, track, position, reference, zoom, pan, json)?;
        }

        Commands::Reorient {
            input,
            reference,
            output,
        } => {
            commands::reorient::execute(input, reference, output)?;
        }

        Commands::Swap { input, a, b, output } => {
            commands::swap::execute(input, a, b, output)?;
        }

        Commands::Config { example, output } => {
            if example {
                print!("{}", Config::example_toml()?);
            } else if let Some(path) = output {
                config.save_to_file(&path)?;
                log::info!("Wrote configuration to {}", path.display());
            } else {
                print!("{}", toml::to_string_pretty(&config)?);
            }
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        if let Some(cli_err) = err.downcast_ref::<CliError>() {
            print_error_and_exit(cli_err);
        }
        return Err(err);
    }

    Ok(())
}
