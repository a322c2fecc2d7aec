use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use macroquad::prelude::*;
// Absolute paths: the macroquad prelude exports its own `rand`.
use ::rand::rngs::StdRng;
use ::rand::{Rng, SeedableRng};
use tracing::{error, info};

use neon_snake::audio::SoundCues;
use neon_snake::config::{self, CONFIG_PATH};
use neon_snake::controls;
use neon_snake::grid::BOARD_SIZE;
use neon_snake::input;
use neon_snake::persistence::JsonFileStore;
use neon_snake::render::{self, BoardLayout, CONTROLS_HEIGHT, HUD_HEIGHT};
use neon_snake::session::Session;

/// Runs before `main`, so logging is set up here to catch config warnings.
fn window_conf() -> Conf {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
        .init();
    let config = config::shared(Path::new(CONFIG_PATH));
    let side = config.cell_size * BOARD_SIZE as f32;
    Conf {
        window_title: "Neon Snake".to_owned(),
        window_width: (side + 64.0) as i32,
        window_height: (side + HUD_HEIGHT + CONTROLS_HEIGHT + 16.0) as i32,
        fullscreen: config.fullscreen,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    if let Err(err) = run().await {
        error!("{err:#}");
    }
}

async fn run() -> anyhow::Result<()> {
    let config = config::shared(Path::new(CONFIG_PATH));
    if let Some(dir) = config.save_path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).with_context(|| format!("creating save directory {}", dir.display()))?;
    }

    let seed: u64 = ::rand::rng().random();
    info!(seed, save = %config.save_path.display(), "starting");
    let store = JsonFileStore::new(&config.save_path);
    let mut session = Session::new(store, StdRng::seed_from_u64(seed));
    let sounds = SoundCues::load(config.sound_volume).await;

    loop {
        if is_key_pressed(KeyCode::Q) {
            break;
        }
        let now = Duration::from_secs_f64(get_time());
        let layout = BoardLayout::fit(screen_width(), screen_height(), config.cell_size);

        let buttons = controls::control_pad(&layout, session.state().phase);
        let mut intents = input::pressed_intents();
        intents.extend(controls::clicked_intent(&buttons));
        for intent in intents {
            session.handle(intent, now);
        }

        let outcome = session.update(now);
        if let Some(sounds) = &sounds {
            sounds.play(outcome);
        }

        render::draw_frame(&layout, session.state());
        controls::draw_buttons(&controls::control_pad(&layout, session.state().phase));

        next_frame().await;
    }

    info!(high_score = session.state().high_score, "bye");
    Ok(())
}
