use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod config;
mod decode;
mod info;
mod paths;

pub use config::OutputFormat;

/// biis-import - BIIS-XML valuation report importer
#[derive(Parser)]
#[command(name = "biis-import")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a BIIS-XML file into a GIF container
    Decode {
        /// Input BIIS-XML file path
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Path to a TOML config file (CLI flags override config values)
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Exit with an error on the first conversion failure
        #[arg(long)]
        strict: bool,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Print JSON on a single line
        #[arg(long)]
        compact: bool,
    },

    /// Show plugin identity and capabilities
    Info,

    /// List the element paths the decoder maps
    Paths {
        /// Path to a TOML config file adding key figures
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Decode {
            input,
            config,
            strict,
            format,
            compact,
        } => decode::run(input, config, strict, format, compact),
        Commands::Info => info::run(),
        Commands::Paths { config } => paths::run(config),
    }
}
