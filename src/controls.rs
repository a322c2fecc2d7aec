//! On-screen direction pad and action buttons, for mouse and touch play.

use macroquad::prelude::*;

use crate::game::{Intent, Phase};
use crate::grid::Direction;
use crate::render::BoardLayout;

const BUTTON: f32 = 48.0;
const GAP: f32 = 6.0;
const FILL: Color = Color::new(0.12, 0.16, 0.26, 1.0);
const OUTLINE: Color = Color::new(0.22, 0.74, 0.97, 0.6);
const LABEL: Color = Color::new(0.89, 0.91, 0.94, 1.0);

#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    pub rect: Rect,
    pub label: &'static str,
    pub intent: Intent,
}

/// Lays out a 3x3 pad below the board (arrows around a pause/resume key)
/// with a wide action button beside it. After a game over the action button
/// restarts in one tap and a second button below it resets to the ready
/// screen.
pub fn control_pad(layout: &BoardLayout, phase: Phase) -> Vec<Button> {
    let bounds = layout.bounds();
    let pad = 3.0 * BUTTON + 2.0 * GAP;
    let action_w = 2.0 * BUTTON;
    let left = bounds.x + (bounds.w - pad - GAP * 3.0 - action_w) * 0.5;
    let top = bounds.bottom() + GAP * 2.0;
    let cell = |col: f32, row: f32| Rect::new(left + col * (BUTTON + GAP), top + row * (BUTTON + GAP), BUTTON, BUTTON);
    let wide = |row: f32| Rect::new(left + pad + GAP * 3.0, top + row * (BUTTON + GAP), action_w, BUTTON);

    let pause_label = if phase == Phase::Running { "||" } else { ">" };
    let action_label = if phase == Phase::GameOver { "Restart" } else { "Start" };

    let mut buttons = vec![
        Button { rect: cell(1.0, 0.0), label: "^", intent: Intent::Turn(Direction::Up) },
        Button { rect: cell(0.0, 1.0), label: "<", intent: Intent::Turn(Direction::Left) },
        Button { rect: cell(1.0, 1.0), label: pause_label, intent: Intent::PauseToggle },
        Button { rect: cell(2.0, 1.0), label: ">", intent: Intent::Turn(Direction::Right) },
        Button { rect: cell(1.0, 2.0), label: "v", intent: Intent::Turn(Direction::Down) },
        Button { rect: wide(1.0), label: action_label, intent: Intent::Start },
    ];
    if phase == Phase::GameOver {
        buttons.push(Button { rect: wide(2.0), label: "Reset", intent: Intent::Reset });
    }
    buttons
}

pub fn hit(buttons: &[Button], point: Vec2) -> Option<Intent> {
    buttons.iter().find(|b| b.rect.contains(point)).map(|b| b.intent)
}

/// Touches arrive as simulated mouse presses.
pub fn clicked_intent(buttons: &[Button]) -> Option<Intent> {
    if !is_mouse_button_pressed(MouseButton::Left) {
        return None;
    }
    hit(buttons, Vec2::from(mouse_position()))
}

pub fn draw_buttons(buttons: &[Button]) {
    for b in buttons {
        draw_rectangle(b.rect.x, b.rect.y, b.rect.w, b.rect.h, FILL);
        draw_rectangle_lines(b.rect.x, b.rect.y, b.rect.w, b.rect.h, 2.0, OUTLINE);
        let m = measure_text(b.label, None, 24, 1.0);
        let c = b.rect.center();
        draw_text(b.label, c.x - m.width * 0.5, c.y + m.offset_y * 0.5, 24.0, LABEL);
    }
}
