use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, info, trace};

use super::buzz::BuzzEvent;
use super::words::{WordQueue, VOCABULARY};
use crate::core::clock::{format_elapsed, CountdownClock, COUNTDOWN_SECONDS};
use crate::core::observer::{GameChange, Observers};

/// Below this many seconds every tick asks for a panic buzz.
pub const PANIC_THRESHOLD_SECONDS: u32 = 10;

/// Everything an observer can see, copied out at one instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub word: String,
    pub score: i32,
    pub remaining_seconds: u32,
    pub remaining_time: String,
    pub game_finished: bool,
    pub buzz: BuzzEvent,
}

/// Progress of one game: current word, score, countdown and the two
/// one-shot events the host has to acknowledge.
///
/// Single-threaded. Ticks come from outside (see [`crate::core::clock`]).
#[derive(Debug)]
pub struct GameState {
    rng: StdRng,
    words: WordQueue,
    word: &'static str,
    score: i32,
    clock: CountdownClock,
    game_finished: bool,
    buzz: BuzzEvent,
    observers: Observers,
}

impl GameState {
    /// Start a new game with a freshly shuffled word list.
    pub fn initialize() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Start a new game whose word order is fixed by `seed`.
    pub fn initialize_seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(mut rng: StdRng) -> Self {
        let mut words = WordQueue::new(VOCABULARY);
        let word = words.next_word(&mut rng);
        info!(countdown = COUNTDOWN_SECONDS, "game initialized");
        Self {
            rng,
            words,
            word,
            score: 0,
            clock: CountdownClock::new(COUNTDOWN_SECONDS),
            game_finished: false,
            buzz: BuzzEvent::None,
            observers: Observers::default(),
        }
    }

    /// Register for change notifications. Values already set are not
    /// replayed; read [`GameState::snapshot`] first.
    pub fn subscribe(&mut self) -> UnboundedReceiver<GameChange> {
        self.observers.subscribe()
    }

    pub fn current_word(&self) -> &str {
        self.word
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.clock.remaining()
    }

    /// Remaining time as `MM:SS`.
    pub fn remaining_time(&self) -> String {
        self.clock.formatted()
    }

    /// True from the moment the clock hits zero until acknowledged.
    pub fn game_finished(&self) -> bool {
        self.game_finished
    }

    pub fn buzz_event(&self) -> BuzzEvent {
        self.buzz
    }

    /// Whether the countdown is still going.
    pub fn is_running(&self) -> bool {
        !self.clock.is_done()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            word: self.word.to_string(),
            score: self.score,
            remaining_seconds: self.clock.remaining(),
            remaining_time: self.clock.formatted(),
            game_finished: self.game_finished,
            buzz: self.buzz,
        }
    }

    /// One second has passed. Ticks after the clock reached zero are ignored.
    pub fn on_tick(&mut self, elapsed_seconds: u32) {
        let Some(remaining) = self.clock.tick() else {
            trace!(elapsed_seconds, "tick after countdown finished");
            return;
        };
        debug!(elapsed_seconds, remaining, "tick");
        self.observers.publish(GameChange::RemainingTime {
            seconds: remaining,
            formatted: format_elapsed(remaining),
        });

        if remaining == 0 {
            info!(score = self.score, "countdown finished");
            self.set_game_finished(true);
            self.set_buzz(BuzzEvent::GameOver);
        } else if remaining < PANIC_THRESHOLD_SECONDS {
            self.set_buzz(BuzzEvent::CountdownPanic);
        }
    }

    pub fn on_skip(&mut self) {
        self.set_score(self.score - 1);
        debug!(score = self.score, skipped = self.word, "skip");
        self.next_word();
    }

    pub fn on_correct(&mut self) {
        self.set_score(self.score + 1);
        self.set_buzz(BuzzEvent::Correct);
        debug!(score = self.score, guessed = self.word, "correct");
        self.next_word();
    }

    pub fn on_game_finish_acknowledged(&mut self) {
        self.set_game_finished(false);
    }

    pub fn on_buzz_acknowledged(&mut self) {
        self.set_buzz(BuzzEvent::None);
    }

    fn next_word(&mut self) {
        self.word = self.words.next_word(&mut self.rng);
        self.observers.publish(GameChange::Word(self.word.to_string()));
    }

    fn set_score(&mut self, score: i32) {
        self.score = score;
        self.observers.publish(GameChange::Score(score));
    }

    fn set_game_finished(&mut self, finished: bool) {
        self.game_finished = finished;
        self.observers.publish(GameChange::GameFinished(finished));
    }

    fn set_buzz(&mut self, buzz: BuzzEvent) {
        self.buzz = buzz;
        self.observers.publish(GameChange::Buzz(buzz));
    }
}
