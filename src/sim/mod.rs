//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (entities move in whole-pixel steps per tick)
//! - Seeded RNG only (hazard spawn positions)
//! - Stable iteration order (collection index order)
//! - No rendering or platform dependencies

pub mod bounds;
pub mod state;
pub mod tick;

pub use bounds::{Rect, check_bounds};
pub use state::{
    Avatar, Effect, Facing, GamePhase, GameState, Hazard, Projectile, ScoreTracker,
};
pub use tick::{HeldKeys, TickInput, tick};
