//! Immutable session configuration
//!
//! Replaces ad-hoc globals: the playfield size, hazard count, and pacing all
//! travel through one struct handed to `GameState::new` and the scheduler.

use std::time::Duration;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GameConfig {
    /// Playfield width in pixels
    pub width: f32,
    /// Playfield height in pixels
    pub height: f32,
    /// Hazards spawned at session start
    pub hazard_count: usize,
    /// Target simulation rate
    pub tick_hz: u32,
    /// Freeze-frame duration after a loss, in ticks
    pub game_over_freeze_ticks: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
            hazard_count: HAZARD_COUNT,
            tick_hz: TICK_HZ,
            game_over_freeze_ticks: GAME_OVER_FREEZE_TICKS,
        }
    }
}

impl GameConfig {
    /// Playfield extents as a vector
    pub fn field(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Frame budget for one tick
    pub fn tick_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.tick_hz as f64)
    }
}
