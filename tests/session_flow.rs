//! End-to-end runs of a session against a real save file.

use std::fs;
use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;

use neon_snake::game::{GameState, Intent, Phase, TickOutcome};
use neon_snake::grid::Direction;
use neon_snake::persistence::{HighScoreStore, JsonFileStore};
use neon_snake::session::Session;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

/// Heads for the food, x axis first, never asking for a reversal.
fn steer(state: &GameState) -> Direction {
    let (head, food) = (state.head(), state.food);
    let want = if food.x > head.x {
        Direction::Right
    } else if food.x < head.x {
        Direction::Left
    } else if food.y > head.y {
        Direction::Down
    } else {
        Direction::Up
    };
    if want != state.direction.opposite() {
        want
    } else if matches!(want, Direction::Left | Direction::Right) {
        Direction::Up
    } else {
        Direction::Left
    }
}

#[test]
fn high_score_is_written_as_it_changes_and_survives_a_new_session() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("save.json");

    let mut session = Session::new(JsonFileStore::new(&path), StdRng::seed_from_u64(3));
    session.handle(Intent::Start, ms(0));

    let mut now = 0;
    for _ in 0..2_000 {
        if session.state().high_score >= 30 {
            break;
        }
        if session.state().phase == Phase::GameOver {
            session.handle(Intent::Start, ms(now));
        }
        let turn = steer(session.state());
        session.handle(Intent::Turn(turn), ms(now));
        now += 250;
        assert_ne!(session.update(ms(now)), TickOutcome::Idle);
        assert_eq!(JsonFileStore::new(&path).load(), session.state().high_score);
    }

    let best = session.state().high_score;
    assert!(best >= 30);
    assert!(fs::read_to_string(&path).unwrap().contains(&format!("\"{best}\"")));

    let second = Session::new(JsonFileStore::new(&path), StdRng::seed_from_u64(4));
    assert_eq!(second.state().high_score, best);
    assert_eq!(second.state().score, 0);
    assert_eq!(second.state().phase, Phase::Ready);
}

#[test]
fn corrupt_save_starts_from_zero_and_pause_holds_the_clock() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("save.json");
    fs::write(&path, r#"{"snake-highscore": "NaN"}"#).unwrap();

    let mut session = Session::new(JsonFileStore::new(&path), StdRng::seed_from_u64(11));
    assert_eq!(session.state().high_score, 0);

    session.handle(Intent::Start, ms(0));
    session.handle(Intent::PauseToggle, ms(10));
    assert_eq!(session.state().phase, Phase::Paused);
    assert_eq!(session.update(ms(5_000)), TickOutcome::Idle);

    session.handle(Intent::PauseToggle, ms(5_000));
    assert_eq!(session.update(ms(5_100)), TickOutcome::Idle);
    assert_ne!(session.update(ms(5_220)), TickOutcome::Idle);
}
