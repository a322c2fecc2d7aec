//! Neon Snake: a toroidal snake game.
//!
//! The simulation (`grid`, `food`, `direction`, `game`) is pure and knows
//! nothing about windows or files. `session` drives it on a timer and keeps
//! the high score in a [`persistence::HighScoreStore`]; the remaining modules
//! are the macroquad front end.

pub mod audio;
pub mod config;
pub mod controls;
pub mod direction;
pub mod food;
pub mod game;
pub mod grid;
pub mod input;
pub mod persistence;
pub mod render;
pub mod scheduler;
pub mod session;
