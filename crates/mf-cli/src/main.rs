//! Terminal front end for Crime à Montfleur.

mod repl;

use std::process;

use clap::Parser;
use log::LevelFilter;
use mf_engine::GameConfig;

#[derive(Parser)]
#[command(
    name = "montfleur",
    about = "Crime à Montfleur: a murder mystery in the terminal",
    version
)]
struct Cli {
    /// Detective name (prompted for when omitted)
    #[arg(short, long)]
    name: Option<String>,

    /// Seed for reproducible character movement
    #[arg(short, long)]
    seed: Option<u64>,

    /// Durand is allowed at the police station
    #[arg(long)]
    law_allows_suspect: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .target(env_logger::Target::Stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = GameConfig::default().with_law_allowing_suspect(cli.law_allows_suspect);
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    if let Err(e) = repl::run(config, cli.name) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
