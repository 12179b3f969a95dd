/// Guess-the-word game: vocabulary, state and its single screen.
pub mod buzz;
pub mod renderer;
pub mod state;
pub mod words;

pub use buzz::BuzzEvent;
pub use state::{GameSnapshot, GameState};
