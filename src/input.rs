//! Keyboard bindings. Key codes carry no case, so WASD works with caps lock on.

use macroquad::input::{KeyCode, is_key_pressed};

use crate::game::Intent;
use crate::grid::Direction;

const BINDINGS: [(KeyCode, Intent); 12] = [
    (KeyCode::Up, Intent::Turn(Direction::Up)),
    (KeyCode::W, Intent::Turn(Direction::Up)),
    (KeyCode::Down, Intent::Turn(Direction::Down)),
    (KeyCode::S, Intent::Turn(Direction::Down)),
    (KeyCode::Left, Intent::Turn(Direction::Left)),
    (KeyCode::A, Intent::Turn(Direction::Left)),
    (KeyCode::Right, Intent::Turn(Direction::Right)),
    (KeyCode::D, Intent::Turn(Direction::Right)),
    (KeyCode::Enter, Intent::Start),
    (KeyCode::Space, Intent::PauseToggle),
    (KeyCode::P, Intent::PauseToggle),
    (KeyCode::R, Intent::Reset),
];

pub fn intent_for_key(key: KeyCode) -> Option<Intent> {
    BINDINGS.iter().find(|(k, _)| *k == key).map(|(_, intent)| *intent)
}

/// Intents for every bound key pressed this frame, in binding order.
pub fn pressed_intents() -> Vec<Intent> {
    BINDINGS
        .iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .map(|(_, intent)| *intent)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_and_wasd_map_to_directions() {
        assert_eq!(intent_for_key(KeyCode::Up), Some(Intent::Turn(Direction::Up)));
        assert_eq!(intent_for_key(KeyCode::W), Some(Intent::Turn(Direction::Up)));
        assert_eq!(intent_for_key(KeyCode::A), Some(Intent::Turn(Direction::Left)));
        assert_eq!(intent_for_key(KeyCode::Right), Some(Intent::Turn(Direction::Right)));
        assert_eq!(intent_for_key(KeyCode::S), Some(Intent::Turn(Direction::Down)));
    }

    #[test]
    fn control_keys() {
        assert_eq!(intent_for_key(KeyCode::Enter), Some(Intent::Start));
        assert_eq!(intent_for_key(KeyCode::Space), Some(Intent::PauseToggle));
        assert_eq!(intent_for_key(KeyCode::R), Some(Intent::Reset));
        assert_eq!(intent_for_key(KeyCode::X), None);
    }
}
