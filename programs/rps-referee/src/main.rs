//! RPS-Plus Referee
//!
//! Reads one move per round from stdin and referees a best-of-N match
//! against a randomized opponent.
//!
//! Options: --rounds, --seed, --bot-moves, --json

mod cli;
mod render;
mod session;

use std::io;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = cli::Cli::parse();
    session::play(&cli, io::stdin().lock(), io::stdout().lock())
}
