use std::time::Duration;

use rand::Rng;
use tracing::{info, trace, warn};

use crate::game::{GameState, Intent, Phase, TickOutcome};
use crate::persistence::HighScoreStore;
use crate::scheduler::TickTimer;

/// Owns the live game and everything it talks to. All calls happen on the
/// frame loop, one at a time.
pub struct Session<S, R> {
    state: GameState,
    store: S,
    rng: R,
    timer: TickTimer,
    saved_high_score: u32,
}

impl<S: HighScoreStore, R: Rng> Session<S, R> {
    pub fn new(mut store: S, mut rng: R) -> Self {
        let high_score = store.load();
        info!(high_score, "loaded high score");
        let state = GameState::new(high_score, &mut rng);
        Self {
            state,
            store,
            rng,
            timer: TickTimer::new(),
            saved_high_score: high_score,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn timer(&self) -> &TickTimer {
        &self.timer
    }

    pub fn handle(&mut self, intent: Intent, now: Duration) {
        let next = self.state.apply(intent, &mut self.rng);
        if next.phase != self.state.phase {
            info!(?intent, from = ?self.state.phase, to = ?next.phase, "phase change");
        }
        self.commit(next, now);
    }

    /// Runs the pending tick if it is due. At most one tick per call.
    pub fn update(&mut self, now: Duration) -> TickOutcome {
        if !self.timer.poll(now) {
            return TickOutcome::Idle;
        }
        let (next, outcome) = self.state.tick(&mut self.rng);
        trace!(?outcome, head = ?next.head(), "tick");
        self.commit(next, now);
        outcome
    }

    fn commit(&mut self, next: GameState, now: Duration) {
        self.state = next;
        self.sync_timer(now);
        self.persist_high_score();
    }

    fn sync_timer(&mut self, now: Duration) {
        if self.state.phase != Phase::Running {
            self.timer.cancel();
            return;
        }
        let interval = self.state.tick_interval();
        if self.timer.interval() != Some(interval) {
            self.timer.schedule(now, interval);
        }
    }

    fn persist_high_score(&mut self) {
        let high_score = self.state.high_score;
        if high_score == self.saved_high_score {
            return;
        }
        self.saved_high_score = high_score;
        if let Err(err) = self.store.save(high_score) {
            warn!("could not save high score {high_score}: {err:#}");
        }
    }
}
