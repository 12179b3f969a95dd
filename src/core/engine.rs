use std::time::Duration;

use anyhow::Result;
use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind};
use futures_util::StreamExt;
use ratatui::DefaultTerminal;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, info};

use crate::core::clock::TickSource;
use crate::core::observer::GameChange;
use crate::game::buzz::BuzzEvent;
use crate::game::renderer::{self, Screen};
use crate::game::state::{GameSnapshot, GameState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// Host loop for one game session. Owns the tick source and plays the role of
/// the observer: it reacts to finish and buzz events and acknowledges them.
pub struct Engine<T: TickSource> {
    state: GameState,
    ticker: T,
    changes: UnboundedReceiver<GameChange>,
    cue: BuzzEvent,
    game_over: bool,
}

impl<T: TickSource> Engine<T> {
    pub fn new(mut state: GameState, ticker: T) -> Self {
        let changes = state.subscribe();
        Self {
            state,
            ticker,
            changes,
            cue: BuzzEvent::None,
            game_over: false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Last cue shown to the player.
    pub fn cue(&self) -> BuzzEvent {
        self.cue
    }

    pub fn on_tick(&mut self, elapsed_seconds: u32) {
        self.state.on_tick(elapsed_seconds);
    }

    /// Map a key press to a game action. Gameplay keys are ignored once the
    /// game is over.
    pub fn handle_key(&mut self, key: KeyEvent) -> Control {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => return Control::Quit,
            _ if self.game_over => {}
            KeyCode::Right | KeyCode::Enter | KeyCode::Char('c') => self.state.on_correct(),
            KeyCode::Left | KeyCode::Char('s') => {
                self.cue = BuzzEvent::None;
                self.state.on_skip();
            }
            _ => {}
        }
        Control::Continue
    }

    /// Drain pending notifications and acknowledge the one-shot events.
    pub fn process_changes(&mut self) {
        while let Ok(change) = self.changes.try_recv() {
            match change {
                GameChange::GameFinished(true) => {
                    info!(score = self.state.score(), "game finished");
                    self.state.on_game_finish_acknowledged();
                    self.ticker.stop();
                    self.game_over = true;
                }
                GameChange::Buzz(buzz) if buzz.is_armed() => {
                    debug!(?buzz, pattern = ?buzz.pattern(), "buzz");
                    self.cue = buzz;
                    self.state.on_buzz_acknowledged();
                }
                _ => {}
            }
        }
    }

    /// Run until the player quits, then dispose of the clock.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> Result<GameSnapshot> {
        let mut keys = EventStream::new();
        let mut render_timer = tokio::time::interval(Duration::from_millis(33));
        info!("engine started");

        loop {
            self.process_changes();
            let snapshot = self.state.snapshot();
            terminal.draw(|f| {
                renderer::render(
                    f,
                    &Screen { snapshot: &snapshot, cue: self.cue, game_over: self.game_over },
                )
            })?;

            let ticking = self.ticker.is_running();
            tokio::select! {
                Some(elapsed) = self.ticker.next_tick(), if ticking => {
                    self.on_tick(elapsed);
                }
                Some(event) = keys.next() => {
                    if let Event::Key(key) = event? {
                        if key.kind == KeyEventKind::Press && self.handle_key(key) == Control::Quit {
                            break;
                        }
                    }
                }
                _ = render_timer.tick() => {}
            }
        }

        Ok(self.dispose())
    }

    /// Stop the clock and hand back the final state.
    pub fn dispose(mut self) -> GameSnapshot {
        self.ticker.stop();
        let snapshot = self.state.snapshot();
        info!(score = snapshot.score, remaining = snapshot.remaining_seconds, "session disposed");
        snapshot
    }
}
