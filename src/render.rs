//! Draws the board, scoreboard and status banner. Reads state, never writes it.

use macroquad::prelude::*;

use crate::game::{GameState, Phase};
use crate::grid::{BOARD_SIZE, Coordinate};

const BACKGROUND: Color = Color::new(0.02, 0.03, 0.07, 1.0);
const BOARD_FILL: Color = Color::new(0.06, 0.09, 0.165, 0.85);
const GRID_LINE: Color = Color::new(0.58, 0.64, 0.72, 0.12);
const HEAD: Color = Color::new(0.13, 0.83, 0.93, 1.0);
const HEAD_SHADE: Color = Color::new(0.39, 0.4, 0.95, 1.0);
const BODY: Color = Color::new(0.22, 0.74, 0.97, 1.0);
const BODY_SHADE: Color = Color::new(0.05, 0.65, 0.91, 1.0);
const FOOD: Color = Color::new(0.98, 0.45, 0.09, 1.0);
const TEXT: Color = Color::new(0.89, 0.91, 0.94, 1.0);
const BANNER: Color = Color::new(0.0, 0.0, 0.0, 0.55);

pub const HUD_HEIGHT: f32 = 40.0;
/// Vertical room kept below the board for the on-screen controls.
pub const CONTROLS_HEIGHT: f32 = 180.0;
const MARGIN: f32 = 8.0;

/// Where the board sits on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardLayout {
    pub origin: Vec2,
    pub cell_size: f32,
}

impl BoardLayout {
    /// Centres the board horizontally under the HUD, shrinking cells below
    /// `preferred_cell` when the window is too small.
    pub fn fit(screen_w: f32, screen_h: f32, preferred_cell: f32) -> Self {
        let board_cells = BOARD_SIZE as f32;
        let avail_w = (screen_w - 2.0 * MARGIN) / board_cells;
        let avail_h = (screen_h - HUD_HEIGHT - CONTROLS_HEIGHT) / board_cells;
        let cell_size = preferred_cell.min(avail_w).min(avail_h).floor().max(4.0);
        let side = cell_size * board_cells;
        Self {
            origin: vec2(((screen_w - side) * 0.5).floor(), HUD_HEIGHT),
            cell_size,
        }
    }

    pub fn side(&self) -> f32 {
        self.cell_size * BOARD_SIZE as f32
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.origin.x, self.origin.y, self.side(), self.side())
    }

    pub fn cell_rect(&self, c: Coordinate) -> Rect {
        Rect::new(
            self.origin.x + c.x as f32 * self.cell_size,
            self.origin.y + c.y as f32 * self.cell_size,
            self.cell_size,
            self.cell_size,
        )
    }
}

pub fn status_message(phase: Phase) -> Option<&'static str> {
    match phase {
        Phase::Ready => Some("Press start or use arrow keys to begin"),
        Phase::Paused => Some("Paused"),
        Phase::GameOver => Some("Game over! Tap restart to play again"),
        Phase::Running => None,
    }
}

pub fn draw_frame(layout: &BoardLayout, state: &GameState) {
    clear_background(BACKGROUND);
    draw_board(layout, &state.snake, state.food);
    draw_scoreboard(layout, state);
    draw_status(layout, state);
}

pub fn draw_board(layout: &BoardLayout, snake: &[Coordinate], food: Coordinate) {
    let bounds = layout.bounds();
    draw_rectangle(bounds.x, bounds.y, bounds.w, bounds.h, BOARD_FILL);

    for i in 0..=BOARD_SIZE {
        let offset = i as f32 * layout.cell_size;
        draw_line(bounds.x + offset, bounds.y, bounds.x + offset, bounds.bottom(), 1.0, GRID_LINE);
        draw_line(bounds.x, bounds.y + offset, bounds.right(), bounds.y + offset, 1.0, GRID_LINE);
    }

    let inset = (layout.cell_size / 12.0).max(1.0);
    for (i, segment) in snake.iter().enumerate() {
        let (base, shade) = if i == 0 { (HEAD, HEAD_SHADE) } else { (BODY, BODY_SHADE) };
        let r = layout.cell_rect(*segment);
        let w = r.w - 2.0 * inset;
        draw_rectangle(r.x + inset, r.y + inset, w, w, base);
        // Lower-right half in the shade colour stands in for a gradient.
        draw_triangle(
            vec2(r.x + inset + w, r.y + inset),
            vec2(r.x + inset + w, r.y + inset + w),
            vec2(r.x + inset, r.y + inset + w),
            Color::new(shade.r, shade.g, shade.b, 0.6),
        );
    }

    let f = layout.cell_rect(food);
    draw_circle(f.center().x, f.center().y, layout.cell_size / 3.0, FOOD);
}

pub fn draw_scoreboard(layout: &BoardLayout, state: &GameState) {
    let line = format!(
        "Score: {}    Best: {}    Level: {}",
        state.score,
        state.high_score,
        state.speed_tier + 1
    );
    let size = 22.0;
    let m = measure_text(&line, None, size as u16, 1.0);
    let x = layout.origin.x + (layout.side() - m.width) * 0.5;
    draw_text(&line, x, HUD_HEIGHT - 12.0, size, TEXT);
}

pub fn draw_status(layout: &BoardLayout, state: &GameState) {
    let Some(message) = status_message(state.phase) else {
        return;
    };
    let bounds = layout.bounds();
    let banner_h = if state.phase == Phase::GameOver { 72.0 } else { 48.0 };
    let banner_y = bounds.y + (bounds.h - banner_h) * 0.5;
    draw_rectangle(bounds.x, banner_y, bounds.w, banner_h, BANNER);

    let size = 20.0;
    let m = measure_text(message, None, size as u16, 1.0);
    draw_text(message, bounds.x + (bounds.w - m.width) * 0.5, banner_y + 30.0, size, TEXT);

    if state.phase == Phase::GameOver {
        let score = format!("Your score: {}", state.score);
        let ms = measure_text(&score, None, size as u16, 1.0);
        draw_text(&score, bounds.x + (bounds.w - ms.width) * 0.5, banner_y + 56.0, size, HEAD);
    }
}
