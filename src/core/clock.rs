//! Countdown bookkeeping and the tick sources that drive it.
//!
//! The game never owns a timer. A [`TickSource`] is handed to the engine and
//! every tick it yields is forwarded to [`crate::GameState::on_tick`].

use std::collections::VecDeque;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// Length of one game.
pub const COUNTDOWN_SECONDS: u32 = 300;

/// How often a real ticker fires.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Whole seconds left in the game. Counts down one second per tick and
/// stops at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountdownClock {
    remaining: u32,
}

impl CountdownClock {
    pub fn new(total_seconds: u32) -> Self {
        Self { remaining: total_seconds }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_done(&self) -> bool {
        self.remaining == 0
    }

    /// Take one second off. Returns the new remaining time, or `None` if the
    /// clock had already run out.
    pub fn tick(&mut self) -> Option<u32> {
        if self.is_done() {
            return None;
        }
        self.remaining -= 1;
        Some(self.remaining)
    }

    pub fn formatted(&self) -> String {
        format_elapsed(self.remaining)
    }
}

/// Render seconds as `MM:SS`, or `H:MM:SS` from one hour up.
pub fn format_elapsed(seconds: u32) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{:02}:{:02}", minutes, secs)
    }
}

/// Something that produces clock ticks for the game.
///
/// `next_tick` resolves with the seconds elapsed since the previous tick, or
/// `None` once the source is stopped or has nothing left to give.
#[allow(async_fn_in_trait)]
pub trait TickSource {
    async fn next_tick(&mut self) -> Option<u32>;

    /// Stop producing ticks. Must be called when the session ends.
    fn stop(&mut self);

    fn is_running(&self) -> bool;
}

/// Wall-clock ticker backed by a tokio interval running on its own task.
pub struct IntervalTicker {
    rx: mpsc::Receiver<u32>,
    task: Option<JoinHandle<()>>,
}

impl IntervalTicker {
    /// Spawn the ticking task. Requires a tokio runtime.
    pub fn start(period: Duration) -> Self {
        let (tx, rx) = mpsc::channel(8);
        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            // The first tick of a tokio interval completes immediately.
            interval.tick().await;
            let mut last_tick = Instant::now();
            loop {
                interval.tick().await;
                let elapsed = last_tick.elapsed().as_secs_f64().round() as u32;
                last_tick = Instant::now();
                if tx.send(elapsed).await.is_err() {
                    break;
                }
            }
        });
        tracing::debug!(?period, "interval ticker started");
        Self { rx, task: Some(task) }
    }
}

impl TickSource for IntervalTicker {
    async fn next_tick(&mut self) -> Option<u32> {
        if self.task.is_none() {
            return None;
        }
        self.rx.recv().await
    }

    fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            tracing::debug!("interval ticker stopped");
        }
    }

    fn is_running(&self) -> bool {
        self.task.is_some()
    }
}

impl Drop for IntervalTicker {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Ticker driven by hand, for deterministic runs.
#[derive(Debug, Default)]
pub struct ManualTicker {
    pending: VecDeque<u32>,
    stopped: bool,
}

impl ManualTicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue one tick reporting `elapsed` seconds.
    pub fn push(&mut self, elapsed: u32) {
        self.pending.push_back(elapsed);
    }

    /// Queue `count` one-second ticks.
    pub fn push_seconds(&mut self, count: u32) {
        for _ in 0..count {
            self.push(1);
        }
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}

impl TickSource for ManualTicker {
    async fn next_tick(&mut self) -> Option<u32> {
        if self.stopped {
            return None;
        }
        self.pending.pop_front()
    }

    fn stop(&mut self) {
        self.stopped = true;
    }

    fn is_running(&self) -> bool {
        !self.stopped
    }
}
