//! Ximera: The Analytics Chakravyuh
//!
//! Terminal front-end for the seven-layer trivia game.

use std::time::Duration;

use clap::Parser;
use env_logger::Env;
use log::info;

use ximera::EngineBuilder;

/// Breach the seven layers of the Chakravyuh before the clock runs out.
#[derive(Parser, Debug)]
#[command(name = "ximera", version, about)]
struct Cli {
    /// Wall-clock milliseconds per game second (lower it to rehearse)
    #[arg(long, default_value_t = 1000, value_parser = clap::value_parser!(u64).range(1..))]
    tick_ms: u64,
}

fn main() -> ximera::Result<()> {
    // Logs go to stderr; keep them quiet unless RUST_LOG asks otherwise.
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    info!("Ximera v{}", env!("CARGO_PKG_VERSION"));

    EngineBuilder::new()
        .with_tick_interval(Duration::from_millis(cli.tick_ms))
        .build()?
        .run()
}
