use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::game::buzz::BuzzEvent;

/// One observed value changing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameChange {
    Word(String),
    Score(i32),
    RemainingTime { seconds: u32, formatted: String },
    GameFinished(bool),
    Buzz(BuzzEvent),
}

/// Subscribers waiting for [`GameChange`]s. Senders whose receiver was
/// dropped are pruned on the next publish.
#[derive(Debug, Default)]
pub struct Observers {
    subscribers: Vec<UnboundedSender<GameChange>>,
}

impl Observers {
    pub fn subscribe(&mut self) -> UnboundedReceiver<GameChange> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.push(tx);
        rx
    }

    pub fn publish(&mut self, change: GameChange) {
        self.subscribers.retain(|tx| tx.send(change.clone()).is_ok());
    }

    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}
