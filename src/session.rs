use std::time::{Duration, Instant};

use log::{debug, info, warn};

use crate::game::{GameState, TickOutcome};
use crate::input::GameInput;
use crate::score::HighScoreStore;

/// A repeating deadline that can be cancelled and re-armed.
///
/// The next deadline is taken from the moment a due poll is observed, so a
/// tick always completes before the following one is scheduled.
#[derive(Debug, Clone, Copy)]
pub struct TickTimer {
    interval: Duration,
    next_due: Option<Instant>,
}

impl TickTimer {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_due: None,
        }
    }

    /// Schedules the first tick one interval after `now`, replacing any pending one.
    pub fn arm(&mut self, now: Instant) {
        self.next_due = Some(now + self.interval);
    }

    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.next_due.is_some()
    }

    /// Returns true once per elapsed interval and re-arms for the next one.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                self.next_due = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }
}

/// Something the frontend should react to.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SessionEvent {
    Started,
    Advanced(TickOutcome),
    GameOver {
        final_score: u32,
        high_score: u32,
        new_high_score: bool,
    },
}

/// Owns one game, its tick schedule and the high score.
#[derive(Debug)]
pub struct Session<S> {
    state: GameState,
    timer: TickTimer,
    high_score: u32,
    last_final_score: Option<u32>,
    store: S,
}

impl<S: HighScoreStore> Session<S> {
    /// Wraps a stopped game; the high score is read from `store` once here.
    pub fn new(state: GameState, tick_interval: Duration, store: S) -> Self {
        let high_score = store.load_high_score();
        debug!("loaded high score {high_score}");

        Self {
            state,
            timer: TickTimer::new(tick_interval),
            high_score,
            last_final_score: None,
            store,
        }
    }

    /// Starts a new run. Ignored while a run is already in progress.
    pub fn start(&mut self, now: Instant) -> Option<SessionEvent> {
        if self.state.is_running() {
            return None;
        }

        self.state.start();
        self.arm(now);
        Some(SessionEvent::Started)
    }

    /// Abandons the current run, if any, and starts a new one.
    pub fn restart(&mut self, now: Instant) -> SessionEvent {
        self.timer.cancel();
        self.state.restart();
        self.arm(now);
        SessionEvent::Started
    }

    /// Halts the current run without recording a result.
    pub fn stop(&mut self) {
        self.timer.cancel();
        self.state.stop();
    }

    pub fn apply_input(&mut self, input: GameInput, now: Instant) -> Option<SessionEvent> {
        match input {
            GameInput::Direction(direction) => {
                self.state.set_intent(direction);
                None
            }
            GameInput::Start => self.start(now),
            GameInput::Restart => Some(self.restart(now)),
            GameInput::Quit => {
                self.stop();
                None
            }
        }
    }

    /// Runs at most one tick if the timer is due.
    pub fn poll(&mut self, now: Instant) -> Option<SessionEvent> {
        if !self.timer.poll(now) {
            return None;
        }

        match self.state.tick() {
            TickOutcome::Idle => {
                self.timer.cancel();
                None
            }
            TickOutcome::GameOver { final_score } => Some(self.finish(final_score)),
            outcome => Some(SessionEvent::Advanced(outcome)),
        }
    }

    fn arm(&mut self, now: Instant) {
        self.last_final_score = None;
        self.timer.arm(now);
        info!(
            "game started, food at ({}, {})",
            self.state.food.position.x, self.state.food.position.y
        );
    }

    fn finish(&mut self, final_score: u32) -> SessionEvent {
        self.timer.cancel();
        self.last_final_score = Some(final_score);

        let new_high_score = final_score > self.high_score;
        if new_high_score {
            self.high_score = final_score;
            if let Err(error) = self.store.store_high_score(final_score) {
                warn!("failed to save high score {final_score}: {error}");
            }
        }

        info!(
            "game over with score {final_score} (high score {})",
            self.high_score
        );

        SessionEvent::GameOver {
            final_score,
            high_score: self.high_score,
            new_high_score,
        }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable access for scripted setups.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    #[must_use]
    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Final score of the most recent run, until the next one starts.
    #[must_use]
    pub fn last_final_score(&self) -> Option<u32> {
        self.last_final_score
    }

    #[must_use]
    pub fn timer(&self) -> &TickTimer {
        &self.timer
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }
}
