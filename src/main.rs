//! chess_agent UCI engine

use chess_agent::engine::search::{RandomTieBreaker, SearchLimits, Searcher};
use chess_agent::uci::UCI;
use clap::Parser;
use log::info;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log level written to stderr
    #[arg(long, default_value_t = log::Level::Warn)]
    log_level: log::Level,
    /// Seed for tie-breaking between equal moves
    #[arg(long)]
    seed: Option<u64>,
    /// Whole-game clock in seconds
    #[arg(long, default_value_t = chess_agent::engine::search::GAME_TIME_SECS)]
    game_time: u64,
    /// Highest iterative deepening target
    #[arg(long, default_value_t = chess_agent::engine::search::MAX_DEPTH)]
    max_depth: u32,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    if let Err(e) = simple_logger::init_with_level(args.log_level) {
        eprintln!("logger already initialised: {}", e);
    }

    let limits = SearchLimits {
        game_time: Duration::from_secs(args.game_time),
        max_depth: args.max_depth.max(1),
        ..SearchLimits::default()
    };
    let tie_breaker = match args.seed {
        Some(seed) => RandomTieBreaker::seeded(seed),
        None => RandomTieBreaker::new(),
    };
    info!("starting with {:?}", limits);

    let mut uci = UCI::with_searcher(Searcher::with_tie_breaker(limits, tie_breaker));
    uci.run()
}
