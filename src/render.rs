//! Frame emission behind the `Canvas` trait
//!
//! The core never talks to a window directly. `draw_frame` walks the game
//! state and emits draw commands in a fixed order; a frontend implements
//! `Canvas` to put them on screen. Sprites are addressed by logical key and
//! drawn at their box center.

use glam::Vec2;

use crate::assets::{AssetCatalog, SpriteKey};
use crate::sim::{GamePhase, GameState};

/// Drawing surface a frontend provides.
pub trait Canvas {
    /// Draw a sprite centered at `pos`, rotated `angle_deg` counter-clockwise.
    fn draw(&mut self, sprite: SpriteKey, pos: Vec2, angle_deg: f32);
    /// Draw a text overlay anchored at `pos`.
    fn draw_text(&mut self, text: &str, pos: Vec2);
    /// Present the completed frame.
    fn present(&mut self);
}

/// Emit one frame: backdrop, projectiles, hazards, avatar, effects, score,
/// and the game-over message while the loss freeze-frame is showing.
pub fn draw_frame(state: &GameState, canvas: &mut impl Canvas) {
    let field = state.field();
    canvas.draw(SpriteKey::Backdrop, field / 2.0, 0.0);

    for projectile in &state.projectiles {
        if projectile.alive {
            canvas.draw(
                SpriteKey::Projectile,
                projectile.rect.center,
                projectile.angle_deg,
            );
        }
    }
    for hazard in &state.hazards {
        if hazard.alive {
            canvas.draw(SpriteKey::Hazard, hazard.rect.center, 0.0);
        }
    }
    canvas.draw(state.avatar.sprite, state.avatar.rect.center, 0.0);
    for effect in &state.effects {
        if let Some(key) = effect.sprite() {
            canvas.draw(key, effect.pos, 0.0);
        }
    }

    canvas.draw_text(
        &format!("Score: {}", state.score.value()),
        Vec2::new(100.0, field.y - 50.0),
    );
    if state.phase == GamePhase::GameOver {
        canvas.draw_text("Game Over", field / 2.0);
    }

    canvas.present();
}

/// Canvas that discards everything. Backs headless runs and tests.
#[derive(Debug, Default)]
pub struct NullCanvas;

impl Canvas for NullCanvas {
    fn draw(&mut self, _sprite: SpriteKey, _pos: Vec2, _angle_deg: f32) {}
    fn draw_text(&mut self, _text: &str, _pos: Vec2) {}
    fn present(&mut self) {}
}

/// Canvas that logs resolved draw commands at trace level. Lets the headless
/// binary exercise the asset catalog end to end.
#[derive(Debug)]
pub struct TraceCanvas {
    catalog: AssetCatalog,
}

impl TraceCanvas {
    pub fn new(catalog: AssetCatalog) -> Self {
        Self { catalog }
    }
}

impl Canvas for TraceCanvas {
    fn draw(&mut self, sprite: SpriteKey, pos: Vec2, angle_deg: f32) {
        let resolved = self.catalog.sprite(sprite);
        log::trace!(
            "draw {} at ({:.0}, {:.0}) angle {:.0}",
            resolved.path,
            pos.x,
            pos.y,
            angle_deg
        );
    }

    fn draw_text(&mut self, text: &str, pos: Vec2) {
        log::trace!("text '{}' at ({:.0}, {:.0})", text, pos.x, pos.y);
    }

    fn present(&mut self) {
        log::trace!("present");
    }
}
