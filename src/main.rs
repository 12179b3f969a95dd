use anyhow::Result;
use guessword::core::clock::{IntervalTicker, TICK_PERIOD};
use guessword::core::engine::Engine;
use guessword::GameState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // 1. Fresh game and a real one-second clock
    let state = GameState::initialize();
    let ticker = IntervalTicker::start(TICK_PERIOD);
    let engine = Engine::new(state, ticker);

    // 2. Play until the player quits
    let mut terminal = ratatui::init();
    let result = engine.run(&mut terminal).await;
    ratatui::restore();

    let snapshot = result?;
    println!("Final score: {} ({} left)", snapshot.score, snapshot.remaining_time);
    Ok(())
}
