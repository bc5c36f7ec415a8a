mod commands;
mod config;
mod dictionary;
mod error;
mod term_bank;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

pub use error::{Error, Result};

fn main() {
    let cli = commands::Cli::parse();

    init_logging(cli.verbose);

    if let Err(error) = commands::run(cli) {
        error!("{}", error);
        std::process::exit(1);
    }
}

fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
