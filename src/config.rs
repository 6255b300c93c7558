use crate::cli::Cli;
use crate::constants::OUTPUT_DIR;
use crate::encoding::ByteOrder;
use clap::Parser;
use std::path::PathBuf;

/// Application configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct Config {
    /// Always `./sample-data` for the binary.
    pub output_dir: PathBuf,
    pub byte_order: ByteOrder,
    pub verbose: bool,
}

impl Config {
    pub fn new(
        output_dir: impl Into<PathBuf>,
        byte_order: ByteOrder,
    ) -> Self {
        Config {
            output_dir: output_dir.into(),
            byte_order,
            verbose: false,
        }
    }

    /// Parse CLI arguments into a Config; clap exits on bad arguments.
    pub fn from_cli() -> Self {
        Self::from_parsed(Cli::parse())
    }

    pub fn from_parsed(cli: Cli) -> Self {
        Config {
            output_dir: PathBuf::from(OUTPUT_DIR),
            byte_order: cli.byte_order,
            verbose: cli.verbose,
        }
    }
}
