use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::config;
use crate::dictionary::normalize::{ExampleMode, NormalizeOptions};
use crate::Result;

mod clean;
mod export;
mod hanja;
mod tag;

#[derive(Parser, Debug)]
#[command(name = "termbank")]
#[command(version, about = "Clean and transform dictionary term banks")]
pub struct Cli {
    /// TOML file overriding the style table, Hanja marker and backup directory
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log more (-v debug, -vv trace). RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Normalize definitions and example sentences in place
    Clean {
        input: PathBuf,
        /// Trim text, unescape literal \n and remap style values
        #[arg(long)]
        whitespace: bool,
        /// Trim whitespace around each term
        #[arg(long)]
        trim_term: bool,
        /// Drop every example sentence block instead of keeping the first
        #[arg(long)]
        strip_examples: bool,
        /// Drop italic "Noun" label lines
        #[arg(long)]
        prune_labels: bool,
        #[arg(long)]
        no_backup: bool,
    },

    /// Write a new term bank headed by each entry's Hanja
    Hanja {
        input: PathBuf,
        #[arg(short, long, default_value = "term_bank_2.json")]
        output: PathBuf,
        #[arg(long)]
        no_backup: bool,
    },

    /// Export Word, Hanja and flattened definition as CSV
    Export {
        input: PathBuf,
        #[arg(short, long, default_value = "term_bank.csv")]
        output: PathBuf,
    },

    /// Prompt for the part of speech of untagged entries
    Tag {
        input: PathBuf,
        #[arg(long)]
        no_backup: bool,
    },
}

pub fn run(cli: Cli) -> Result<()> {
    let config = config::load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Clean {
            input,
            whitespace,
            trim_term,
            strip_examples,
            prune_labels,
            no_backup,
        } => {
            let options = NormalizeOptions {
                whitespace,
                trim_term,
                examples: if strip_examples { ExampleMode::Strip } else { ExampleMode::KeepFirst },
                prune_labels,
                style_remaps: config.style_remaps.clone(),
            };
            let backup_dir = (!no_backup).then_some(config.backup_dir.as_path());

            clean::run(&input, &options, backup_dir)
        }
        Command::Hanja {
            input,
            output,
            no_backup,
        } => {
            let backup_dir = (!no_backup).then_some(config.backup_dir.as_path());

            hanja::run(&input, &output, &config.hanja_marker, backup_dir)
        }
        Command::Export { input, output } => export::run(&input, &output),
        Command::Tag { input, no_backup } => {
            let backup_dir = (!no_backup).then_some(config.backup_dir.as_path());

            tag::run(&input, backup_dir)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_clean() {
        let cli = Cli::parse_from(["termbank", "-vv", "clean", "bank.json", "--whitespace", "--no-backup"]);

        assert_eq!(cli.verbose, 2);
        match cli.command {
            Command::Clean {
                input,
                whitespace,
                trim_term,
                no_backup,
                ..
            } => {
                assert_eq!(input, PathBuf::from("bank.json"));
                assert!(whitespace);
                assert!(!trim_term);
                assert!(no_backup);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::parse_from(["termbank", "hanja", "bank.json"]);

        match cli.command {
            Command::Hanja { output, no_backup, .. } => {
                assert_eq!(output, PathBuf::from("term_bank_2.json"));
                assert!(!no_backup);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
