//! Beakout entry point
//!
//! Initializes logging, validates the asset catalog (fatal on failure), and
//! drives a session. The windowed frontend is an external collaborator; this
//! binary runs the scripted demo pilot against the trace canvas.

use std::time::{SystemTime, UNIX_EPOCH};

use beakout::app::{ScriptedPilot, run_session};
use beakout::render::TraceCanvas;
use beakout::sim::GameState;
use beakout::{AssetCatalog, GameConfig};

fn main() {
    env_logger::init();
    log::info!("Beakout starting...");

    let catalog = match AssetCatalog::load_default() {
        Ok(catalog) => catalog,
        Err(err) => {
            log::error!("asset load failed: {err}");
            std::process::exit(1);
        }
    };

    let config = GameConfig::default();
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let mut state = GameState::new(config, seed);
    log::info!(
        "session seed {}, {} hazards, {}x{} field at {} Hz",
        state.seed,
        config.hazard_count,
        config.width,
        config.height,
        config.tick_hz
    );

    // Demo pilot with a 3 minute deadline so an unlucky dodge run still ends
    let mut pilot = ScriptedPilot::new(Some(config.tick_hz as u64 * 180));
    let mut canvas = TraceCanvas::new(catalog);
    run_session(&mut state, &mut pilot, &mut canvas);

    log::info!(
        "session over after {} ticks, final score {}",
        state.time_ticks,
        state.score.value()
    );
}
