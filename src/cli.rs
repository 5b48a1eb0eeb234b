//! CLI argument parsing for cloudstrap.
//!
//! Only the args before the `--` delimiter are seen by clap; the program and
//! its template are handed to the expansion engine untouched.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::args::DELIMITER;

/// Resolve NAME=RESOLVER:ARG bindings and launch a program with them
/// substituted into its command line.
///
/// Template markers: `--flag=%name`, `--flag %name`, `%name`, `--%name`.
#[derive(Parser, Debug)]
#[command(name = "cloudstrap")]
#[command(version, about, long_about = None)]
#[command(override_usage = "cloudstrap [OPTIONS] [NAME=RESOLVER:ARG]... -- <PROGRAM> [ARGS]...")]
pub struct Cli {
    /// Config file (default: <config dir>/cloudstrap/config.toml).
    #[arg(long, env = "CLOUDSTRAP_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the expanded command line instead of running it.
    #[arg(long)]
    pub dry_run: bool,

    /// List the available resolvers and exit.
    #[arg(long)]
    pub list_resolvers: bool,

    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Value bindings. Malformed ones are reported by the expansion engine.
    #[arg(value_name = "NAME=RESOLVER:ARG", allow_hyphen_values = true)]
    pub bindings: Vec<String>,
}

impl Cli {
    /// Engine input: the bindings, then the delimiter and template if given.
    pub fn engine_input(&self, template: Option<&[String]>) -> Vec<String> {
        let mut input = self.bindings.clone();
        if let Some(template) = template {
            input.push(DELIMITER.to_string());
            input.extend(template.iter().cloned());
        }
        input
    }
}

/// Split raw args (without argv[0]) at the first standalone `--`.
pub fn split_at_delimiter(args: &[String]) -> (&[String], Option<&[String]>) {
    match args.iter().position(|a| a == DELIMITER) {
        Some(at) => (&args[..at], Some(&args[at + 1..])),
        None => (args, None),
    }
}
