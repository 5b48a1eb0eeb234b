use anyhow::Result;
use clap::Parser;

use cloudstrap::args::expand;
use cloudstrap::cli::{split_at_delimiter, Cli};
use cloudstrap::config::Config;
use cloudstrap::exit_codes;
use cloudstrap::launch::{self, LaunchError};
use cloudstrap::logging::init_tracing;
use cloudstrap::resolve::ResolverRegistry;

fn main() {
    let argv: Vec<String> = std::env::args().collect();
    match run(&argv) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(failure_code(&err));
        }
    }
}

fn run(argv: &[String]) -> Result<i32> {
    let (bin, rest) = match argv.split_first() {
        Some((bin, rest)) => (bin.as_str(), rest),
        None => ("cloudstrap", argv),
    };
    let (head, template) = split_at_delimiter(rest);

    let cli = Cli::parse_from(std::iter::once(bin).chain(head.iter().map(String::as_str)));
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }?;

    let registry = ResolverRegistry::builtin(&config)?;

    if cli.list_resolvers {
        for (id, entry) in registry.iter() {
            println!("{:<10} {}", id, entry.description);
        }
        return Ok(exit_codes::SUCCESS);
    }

    let params = expand(&cli.engine_input(template), &registry)?;

    if cli.dry_run {
        println!("{}", params.command_line());
        return Ok(exit_codes::SUCCESS);
    }

    let status = launch::run(&params)?;
    Ok(launch::exit_code(status))
}

fn failure_code(err: &anyhow::Error) -> i32 {
    if err.downcast_ref::<LaunchError>().is_some() {
        exit_codes::LAUNCH_FAILURE
    } else {
        exit_codes::USAGE_ERROR
    }
}
