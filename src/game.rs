//! The game state machine. Every transition takes the previous state by
//! reference and returns a fresh one.

use std::time::Duration;

use rand::Rng;
use tracing::{debug, info};

use crate::direction::propose;
use crate::food;
use crate::grid::{Coordinate, Direction};

/// Tick interval per speed tier, in milliseconds.
pub const SPEED_LEVELS: [u64; 6] = [220, 180, 150, 120, 90, 70];
pub const SCORE_PER_FOOD: u32 = 10;
/// The speed tier goes up whenever the snake length reaches a multiple of this.
pub const GROWTH_PER_TIER: usize = 4;

pub const INITIAL_SNAKE: [Coordinate; 3] = [
    Coordinate::new(8, 10),
    Coordinate::new(7, 10),
    Coordinate::new(6, 10),
];

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    Ready,
    Running,
    Paused,
    GameOver,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Intent {
    Turn(Direction),
    Start,
    PauseToggle,
    Reset,
}

/// What a tick did, for logging and sound cues.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not running, nothing changed.
    Idle,
    Moved,
    Ate,
    Collided,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    /// Head first, never empty.
    pub snake: Vec<Coordinate>,
    pub direction: Direction,
    pub pending: Option<Direction>,
    pub food: Coordinate,
    pub score: u32,
    pub high_score: u32,
    pub speed_tier: usize,
    pub phase: Phase,
}

impl GameState {
    pub fn new<R: Rng>(high_score: u32, rng: &mut R) -> Self {
        let snake = INITIAL_SNAKE.to_vec();
        let food = food::place(&snake, rng);
        Self {
            snake,
            direction: Direction::Right,
            pending: None,
            food,
            score: 0,
            high_score,
            speed_tier: 0,
            phase: Phase::Ready,
        }
    }

    pub fn head(&self) -> Coordinate {
        self.snake[0]
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(SPEED_LEVELS[self.speed_tier])
    }

    /// Everything but the high score goes back to its starting value.
    pub fn reset<R: Rng>(&self, rng: &mut R) -> GameState {
        GameState::new(self.high_score, rng)
    }

    pub fn apply<R: Rng>(&self, intent: Intent, rng: &mut R) -> GameState {
        match intent {
            Intent::Start => match self.phase {
                Phase::GameOver => GameState {
                    phase: Phase::Running,
                    ..self.reset(rng)
                },
                _ => self.with_phase(Phase::Running),
            },
            Intent::PauseToggle => match self.phase {
                Phase::Running => self.with_phase(Phase::Paused),
                Phase::Paused => self.with_phase(Phase::Running),
                Phase::Ready | Phase::GameOver => self.clone(),
            },
            Intent::Turn(direction) => {
                let phase = match self.phase {
                    Phase::Ready | Phase::GameOver => Phase::Running,
                    other => other,
                };
                GameState {
                    pending: propose(self.direction, self.pending, direction),
                    phase,
                    ..self.clone()
                }
            }
            Intent::Reset => self.reset(rng),
        }
    }

    /// Advances the snake by one cell. A no-op unless the game is running.
    pub fn tick<R: Rng>(&self, rng: &mut R) -> (GameState, TickOutcome) {
        if self.phase != Phase::Running {
            return (self.clone(), TickOutcome::Idle);
        }

        let direction = match self.pending {
            Some(p) if !p.is_opposite(self.direction) => p,
            _ => self.direction,
        };
        let new_head = self.head().step(direction);

        // Checked against the whole pre-move body, tail included.
        if self.snake.contains(&new_head) {
            info!(score = self.score, length = self.snake.len(), "snake hit itself");
            let next = GameState {
                phase: Phase::GameOver,
                high_score: self.high_score.max(self.score),
                ..self.clone()
            };
            return (next, TickOutcome::Collided);
        }

        let mut snake = Vec::with_capacity(self.snake.len() + 1);
        snake.push(new_head);
        snake.extend_from_slice(&self.snake);

        if new_head == self.food {
            let score = self.score + SCORE_PER_FOOD;
            let speed_tier = if snake.len() % GROWTH_PER_TIER == 0 {
                (self.speed_tier + 1).min(SPEED_LEVELS.len() - 1)
            } else {
                self.speed_tier
            };
            if speed_tier != self.speed_tier {
                debug!(speed_tier, interval_ms = SPEED_LEVELS[speed_tier], "speed up");
            }
            let food = food::place(&snake, rng);
            let next = GameState {
                snake,
                direction,
                pending: None,
                food,
                score,
                high_score: self.high_score.max(score),
                speed_tier,
                phase: self.phase,
            };
            return (next, TickOutcome::Ate);
        }

        snake.pop();
        let next = GameState {
            snake,
            direction,
            pending: None,
            ..self.clone()
        };
        (next, TickOutcome::Moved)
    }

    fn with_phase(&self, phase: Phase) -> GameState {
        GameState {
            phase,
            ..self.clone()
        }
    }
}
