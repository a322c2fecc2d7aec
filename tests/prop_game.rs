//! Property tests for the simulation: random inputs, invariants checked on
//! every transition.

use std::collections::HashSet;

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use neon_snake::direction::propose;
use neon_snake::game::{GameState, Intent, Phase, TickOutcome};
use neon_snake::grid::{BOARD_SIZE, Coordinate, Direction};

fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::Up),
        Just(Direction::Down),
        Just(Direction::Left),
        Just(Direction::Right),
    ]
}

fn cell() -> impl Strategy<Value = Coordinate> {
    (0..BOARD_SIZE, 0..BOARD_SIZE).prop_map(|(x, y)| Coordinate::new(x, y))
}

fn no_overlap(snake: &[Coordinate]) -> bool {
    snake.iter().collect::<HashSet<_>>().len() == snake.len()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Steps stay on the board and adjacent to the start, modulo wraparound.
    #[test]
    fn prop_step_stays_on_board(c in cell(), d in direction()) {
        let next = c.step(d);
        prop_assert!(next.in_bounds());
        let dx = (next.x - c.x).rem_euclid(BOARD_SIZE);
        let dy = (next.y - c.y).rem_euclid(BOARD_SIZE);
        let moved = (dx == 1 || dx == BOARD_SIZE - 1) as i32 + (dy == 1 || dy == BOARD_SIZE - 1) as i32;
        prop_assert_eq!(moved, 1);
    }

    /// A pending turn is never replaced by its own reversal.
    #[test]
    fn prop_queue_rejects_reversal(current in direction(), pending in direction()) {
        prop_assert_eq!(propose(current, Some(pending), pending.opposite()), Some(pending));
    }

    /// Drives whole games with random turns and restarts.
    #[test]
    fn prop_random_play_keeps_invariants(
        seed in any::<u64>(),
        turns in proptest::collection::vec(proptest::option::of(direction()), 1..400),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut state = GameState::new(0, &mut rng).apply(Intent::Start, &mut rng);

        for turn in turns {
            if let Some(d) = turn {
                state = state.apply(Intent::Turn(d), &mut rng);
            }
            let before = state.clone();
            let (next, outcome) = state.tick(&mut rng);

            prop_assert!(next.high_score >= before.high_score);
            prop_assert!(next.speed_tier >= before.speed_tier);
            prop_assert!(next.direction != before.direction.opposite());
            match outcome {
                TickOutcome::Ate => {
                    prop_assert_eq!(next.snake.len(), before.snake.len() + 1);
                    prop_assert_eq!(next.score, before.score + 10);
                    prop_assert_eq!(next.speed_tier > before.speed_tier, next.snake.len() % 4 == 0 && before.speed_tier < 5);
                }
                TickOutcome::Moved => {
                    prop_assert_eq!(next.snake.len(), before.snake.len());
                    prop_assert_eq!(next.food, before.food);
                }
                TickOutcome::Collided => {
                    prop_assert_eq!(next.phase, Phase::GameOver);
                    prop_assert_eq!(&next.snake, &before.snake);
                    prop_assert!(next.high_score >= next.score);
                }
                TickOutcome::Idle => prop_assert!(false, "running game idled"),
            }
            prop_assert!(no_overlap(&next.snake));
            prop_assert!(!next.snake.contains(&next.food));
            prop_assert!(next.pending.is_none());

            state = next;
            if state.phase == Phase::GameOver {
                let high = state.high_score;
                state = state.apply(Intent::Start, &mut rng);
                prop_assert_eq!(state.high_score, high);
                prop_assert_eq!(state.score, 0);
            }
        }
    }
}
