//! Flappy Duo entry point
//!
//! Loads settings and assets, then runs the game loop on the headless
//! platform with the autopilot flying both birds.

use std::path::Path;

use anyhow::Context;

use flappy_duo::platform::{Assets, HeadlessPlatform};
use flappy_duo::settings::SETTINGS_FILE;
use flappy_duo::{GameLoop, RoundController, Settings};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::load(Path::new(SETTINGS_FILE));

    // Textures are required; a missing font only hides the score table
    let assets = Assets::load(&settings.asset_dir)
        .with_context(|| format!("loading assets from {}", settings.asset_dir.display()))?;

    let seed = settings.seed.unwrap_or_else(rand::random);
    log::info!("Session seed {}", seed);

    let mut platform =
        HeadlessPlatform::new(settings.tick_dt()).with_max_frames(settings.max_frames);
    if !settings.autopilot {
        log::warn!("Autopilot is off and the headless platform has no keyboard; birds will fall");
    }

    let controller = RoundController::new(settings, seed);
    let mut game = GameLoop::new(controller, assets.has_font());
    let summary = game.run(&mut platform);

    if let Some(best) = game.controller().ledger().best() {
        log::info!("All-time best: {}", best);
    }
    log::info!(
        "Played {} rounds, session best {:?}",
        summary.rounds_finished,
        summary.best_score
    );
    Ok(())
}
