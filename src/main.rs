//! # biis-import
//!
//! A command-line tool for importing BIIS-XML valuation reports into the
//! GIF container model.
//!
//! ## Usage
//!
//! ```bash
//! # Decode a report and print the container as JSON
//! biis-import decode report.xml
//!
//! # Human-readable summary, failing on the first bad value
//! biis-import decode report.xml --strict --format summary
//!
//! # Show the mapped element paths
//! biis-import paths
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::init_logging(cli.verbosity());
    cli::dispatch(cli)
}
