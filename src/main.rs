use std::time::Instant;

use anyhow::Result;
use pacman_sim::config::load_config;
use pacman_sim::constants::LOOP_TIME;
use pacman_sim::events::GameEvent;
use pacman_sim::formatter::CustomFormatter;
use pacman_sim::game::state::GameStage;
use pacman_sim::game::Game;
use thousands::Separable;
use tracing::{debug, info, warn};
use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::EnvFilter;

fn setup_logging() -> Result<()> {
    // Allow RUST_LOG to override levels; default to info for our crate and warn elsewhere
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,{name}=info", name = env!("CARGO_CRATE_NAME"))));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .event_format(CustomFormatter)
        .finish()
        .with(ErrorLayer::default());

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn main() -> Result<()> {
    setup_logging()?;

    let config = load_config()?;
    let mut game = Game::new(&config)?;

    info!(
        realtime = config.realtime,
        max_frames = ?config.max_frames,
        "Starting game loop ({:.3}ms)",
        LOOP_TIME.as_secs_f32() * 1000.0
    );

    let started = Instant::now();
    let mut ghosts_eaten = 0u32;

    loop {
        let frame_start = Instant::now();

        for event in game.tick(None) {
            match event {
                GameEvent::GhostEaten { .. } => ghosts_eaten += 1,
                GameEvent::StageChanged(_) | GameEvent::PelletEaten { .. } => {}
                other => debug!(event = ?other, "Game event"),
            }
        }

        if game.stage() == GameStage::GameOver {
            break;
        }
        if config.max_frames.is_some_and(|max| game.frame() >= max) {
            info!(frames = game.frame(), "Frame limit reached");
            break;
        }

        if config.realtime {
            let elapsed = frame_start.elapsed();
            if elapsed < LOOP_TIME {
                spin_sleep::sleep(LOOP_TIME - elapsed);
            } else {
                warn!("Game loop behind schedule by: {:?}", elapsed - LOOP_TIME);
            }
        }
    }

    info!(
        frames = game.frame().separate_with_commas(),
        level = game.level(),
        score = game.score().separate_with_commas(),
        high_score = game.high_score().separate_with_commas(),
        ghosts_eaten,
        elapsed = ?started.elapsed(),
        "Run finished"
    );

    Ok(())
}
