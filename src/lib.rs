//! Beakout - a rectangular arena dodge-and-shoot arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, game state)
//! - `render`: Draw-command emission behind the `Canvas` trait
//! - `assets`: Logical sprite ids resolved through a startup catalog
//! - `app`: Fixed-step scheduler and input abstraction
//! - `config`: Immutable session configuration

pub mod app;
pub mod assets;
pub mod config;
pub mod render;
pub mod sim;

pub use assets::{AssetCatalog, AssetError, SpriteKey};
pub use config::GameConfig;

/// Game tuning constants
pub mod consts {
    use glam::Vec2;

    /// Playfield defaults
    pub const FIELD_WIDTH: f32 = 1100.0;
    pub const FIELD_HEIGHT: f32 = 650.0;

    /// Simulation rate (ticks per second)
    pub const TICK_HZ: u32 = 50;

    /// Avatar defaults
    pub const AVATAR_SIZE: Vec2 = Vec2::new(58.0, 58.0);
    pub const AVATAR_START: Vec2 = Vec2::new(300.0, 200.0);
    /// Per-tick displacement for one held direction key (pixels)
    pub const AVATAR_STEP: f32 = 5.0;

    /// Projectile defaults
    pub const PROJECTILE_SIZE: Vec2 = Vec2::new(24.0, 24.0);

    /// Hazard defaults
    pub const HAZARD_SIZE: Vec2 = Vec2::new(20.0, 20.0);
    pub const HAZARD_COUNT: usize = 4;
    /// Initial hazard velocity (pixels per tick, reflected per axis)
    pub const HAZARD_VELOCITY: Vec2 = Vec2::new(5.0, 5.0);

    /// Effect (destruction flash) timing
    pub const EFFECT_LIFE_TICKS: u32 = 50;
    /// Sub-counter threshold between animation frame switches
    pub const EFFECT_FRAME_HOLD: u8 = 5;

    /// Freeze-frame duration after a loss (5 seconds at 50 Hz)
    pub const GAME_OVER_FREEZE_TICKS: u32 = 250;
}
