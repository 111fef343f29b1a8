//! my-aoc - fetch, solve and submit Advent of Code puzzles

// Import advent-2022 to link the solver plugins
use advent_2022 as _;

use advent_cli::cli::Args;
use advent_cli::config::{Config, Mode};
use advent_cli::error::CliError;
use advent_cli::output::OutputFormatter;
use advent_cli::{logging, runner};
use advent_client::AocClient;
use clap::Parser;

fn main() {
    let args = Args::parse();
    logging::init_cli_logger(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args);
    let registry = runner::build_registry(&config.tags)?;
    let formatter = OutputFormatter::new(config.quiet);

    if config.mode == Mode::List {
        formatter.print_solvers(registry.iter_info());
        return Ok(());
    }

    let mut builder = AocClient::builder();
    if let Some(session) = &config.session {
        builder = builder.session(session.as_str());
    }
    let client = builder.build()?;

    let outcome = runner::run(&config, &registry, &client)?;
    formatter.print_outcome(&outcome);
    outcome.into_result().map(|_| ())
}
