pub mod core {
	pub mod clock;
	pub mod engine;
	pub mod observer;
}

pub mod game;

// Re-export for convenience
pub use crate::core::observer::GameChange;
pub use crate::game::{BuzzEvent, GameSnapshot, GameState};
