//! brain-dice: two players, one terminal.

use std::io;

use brain_dice::{Game, GameRng, LineConsole, Reporter};

fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr and stay quiet unless RUST_LOG asks for them.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let rng = GameRng::from_clock();
    tracing::debug!(seed = rng.seed(), "seeded rng");

    let stdin = io::stdin();
    let console = LineConsole::new(stdin.lock());
    let reporter = Reporter::new(io::stdout().lock());

    let mut game = Game::new(rng, console, reporter);
    let result = game.run()?;
    tracing::info!(winner = %result.winner, turns = result.turns, "finished");

    Ok(())
}
