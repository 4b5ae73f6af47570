//! Fixed-step simulation tick
//!
//! One call advances the world by exactly one tick. The per-tick protocol
//! while running:
//! 1. input events (quit, fire)
//! 2. avatar-vs-hazard loss check
//! 3. pairwise projectile/hazard resolution
//! 4. compaction of dead entities
//! 5. entity advances (avatar, projectiles, hazards, effects) and a final
//!    sweep of projectiles that left the field this tick
//!
//! In the GameOver phase only the freeze timer counts down; Quit is inert.

use glam::Vec2;

use super::state::{Effect, GamePhase, GameState};
use crate::assets::SpriteKey;

/// Snapshot of the currently-held directional keys
#[derive(Debug, Clone, Copy, Default)]
pub struct HeldKeys {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl HeldKeys {
    /// Sum of per-key displacements, `step` pixels each. Opposed keys cancel;
    /// diagonals are deliberately not normalized.
    pub fn displacement(&self, step: f32) -> Vec2 {
        let mut delta = Vec2::ZERO;
        if self.up {
            delta.y -= step;
        }
        if self.down {
            delta.y += step;
        }
        if self.left {
            delta.x -= step;
        }
        if self.right {
            delta.x += step;
        }
        delta
    }
}

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// External quit signal (window close, quit key)
    pub quit: bool,
    /// Fire key was pressed this tick
    pub fire: bool,
    /// Currently-held directional keys
    pub held: HeldKeys,
}

/// Advance the game state by one tick.
pub fn tick(state: &mut GameState, input: &TickInput) {
    match state.phase {
        GamePhase::Running => {}
        GamePhase::GameOver => {
            state.freeze_ticks = state.freeze_ticks.saturating_sub(1);
            return;
        }
        GamePhase::Quit => return,
    }

    state.time_ticks += 1;

    // 1. Input events
    if input.quit {
        state.phase = GamePhase::Quit;
        return;
    }
    if input.fire {
        let projectile = state.avatar.fire();
        state.projectiles.push(projectile);
    }

    // 2. Loss check: any live hazard touching the avatar ends the session
    if state
        .hazards
        .iter()
        .any(|h| h.alive && h.rect.intersects(&state.avatar.rect))
    {
        state.phase = GamePhase::GameOver;
        state.freeze_ticks = state.config.game_over_freeze_ticks;
        return;
    }

    // 3. Pairwise resolution, collection index order: the lowest-index pair
    // claims both entities; each resolves at most once per tick.
    for hi in 0..state.hazards.len() {
        for pi in 0..state.projectiles.len() {
            if !state.hazards[hi].alive || !state.projectiles[pi].alive {
                continue;
            }
            if state.projectiles[pi].rect.intersects(&state.hazards[hi].rect) {
                state.projectiles[pi].alive = false;
                state.hazards[hi].alive = false;
                state.effects.push(Effect::new(state.hazards[hi].rect.center));
                state.score.increment();
                state.avatar.set_variant(SpriteKey::AvatarCheer);
            }
        }
    }

    // 4. Compact, survivor order preserved
    state.projectiles.retain(|p| p.alive);
    state.hazards.retain(|h| h.alive);

    // 5. Entity advances
    let field = state.field();
    state.avatar.apply_input(&input.held, field);
    for projectile in &mut state.projectiles {
        projectile.update(field);
    }
    for hazard in &mut state.hazards {
        hazard.update(field);
    }
    for effect in &mut state.effects {
        effect.update();
    }
    state.effects.retain(|e| !e.finished());
    // End-of-tick sweep of projectiles that went inert during their advance
    state.projectiles.retain(|p| p.alive);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::consts::*;
    use crate::sim::bounds::Rect;
    use crate::sim::state::{Hazard, Projectile};
    use proptest::prelude::*;

    fn running_state() -> GameState {
        // Empty roster; tests place entities explicitly
        let config = GameConfig {
            hazard_count: 0,
            ..Default::default()
        };
        GameState::new(config, 12345)
    }

    fn hazard_at(center: Vec2) -> Hazard {
        Hazard {
            rect: Rect::new(center, HAZARD_SIZE),
            vel: HAZARD_VELOCITY,
            alive: true,
        }
    }

    #[test]
    fn test_quit_is_immediate() {
        let mut state = running_state();
        let input = TickInput {
            quit: true,
            ..Default::default()
        };
        tick(&mut state, &input);
        assert_eq!(state.phase, GamePhase::Quit);
        assert!(state.session_over());
    }

    #[test]
    fn test_fire_appends_projectile() {
        let mut state = running_state();
        let input = TickInput {
            fire: true,
            ..Default::default()
        };
        tick(&mut state, &input);
        assert_eq!(state.projectiles.len(), 1);
        tick(&mut state, &input);
        assert_eq!(state.projectiles.len(), 2);
    }

    #[test]
    fn test_projectile_inert_exactly_on_exit() {
        let mut state = running_state();
        state.projectiles.push(Projectile {
            rect: Rect::new(
                Vec2::new(PROJECTILE_SIZE.x / 2.0, 300.0),
                PROJECTILE_SIZE,
            ),
            vel: Vec2::new(5.0, 0.0),
            angle_deg: 0.0,
            alive: true,
        });

        let input = TickInput::default();
        let ticks_to_cross = (FIELD_WIDTH / 5.0) as u32 + 1;
        for _ in 0..ticks_to_cross {
            tick(&mut state, &input);
        }
        // The projectile has crossed the field, gone inert, and been swept
        assert!(state.projectiles.is_empty());

        // Idempotent: further ticks change nothing
        tick(&mut state, &input);
        assert!(state.projectiles.is_empty());
    }

    #[test]
    fn test_collision_resolves_once() {
        let mut state = running_state();
        let spot = Vec2::new(500.0, 300.0);
        state.hazards.push(hazard_at(spot));
        state.projectiles.push(Projectile {
            rect: Rect::new(spot, PROJECTILE_SIZE),
            vel: Vec2::new(5.0, 0.0),
            angle_deg: 0.0,
            alive: true,
        });

        tick(&mut state, &TickInput::default());

        assert!(state.hazards.is_empty());
        assert!(state.projectiles.is_empty());
        assert_eq!(state.effects.len(), 1);
        assert_eq!(state.effects[0].pos, spot);
        assert_eq!(state.score.value(), 1);
        assert_eq!(state.avatar.sprite, SpriteKey::AvatarCheer);

        // Both entities are gone, so the overlap cannot score again
        tick(&mut state, &TickInput::default());
        assert_eq!(state.score.value(), 1);
    }

    #[test]
    fn test_one_projectile_claims_one_hazard() {
        // One projectile overlapping two hazards: only the lowest-index
        // hazard is destroyed.
        let mut state = running_state();
        let spot = Vec2::new(500.0, 300.0);
        state.hazards.push(hazard_at(spot));
        state.hazards.push(hazard_at(spot + Vec2::new(4.0, 0.0)));
        state.projectiles.push(Projectile {
            rect: Rect::new(spot, PROJECTILE_SIZE),
            vel: Vec2::ZERO,
            angle_deg: 0.0,
            alive: true,
        });

        tick(&mut state, &TickInput::default());

        assert_eq!(state.hazards.len(), 1);
        assert_eq!(state.score.value(), 1);
        assert_eq!(state.effects.len(), 1);
        assert_eq!(state.effects[0].pos, spot);
    }

    #[test]
    fn test_avatar_hit_ends_session() {
        let mut state = running_state();
        // Hazard sitting on the avatar
        let spot = state.avatar.rect.center;
        state.hazards.push(hazard_at(spot));

        let ticks_before = state.time_ticks;
        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.freeze_ticks, state.config.game_over_freeze_ticks);
        assert!(!state.session_over());

        // No further entity updates: the hazard is frozen in place
        let hazard_pos = state.hazards[0].rect.center;
        let avatar_pos = state.avatar.rect.center;
        let held = HeldKeys {
            right: true,
            ..Default::default()
        };
        let input = TickInput {
            held,
            ..Default::default()
        };
        tick(&mut state, &input);
        assert_eq!(state.hazards[0].rect.center, hazard_pos);
        assert_eq!(state.avatar.rect.center, avatar_pos);
        assert_eq!(state.time_ticks, ticks_before + 1);

        // Freeze timer runs down to session exit
        for _ in 0..state.config.game_over_freeze_ticks {
            tick(&mut state, &TickInput::default());
        }
        assert!(state.session_over());
    }

    #[test]
    fn test_end_to_end_loss() {
        // Full default roster; steer hazard 0 onto the avatar's row so the
        // idle session is guaranteed to end.
        let mut state = GameState::new(GameConfig::default(), 99);
        assert_eq!(state.hazards.len(), 4);
        assert_eq!(state.avatar.rect.center, AVATAR_START);
        state.hazards[0] = Hazard {
            rect: Rect::new(Vec2::new(100.0, AVATAR_START.y), HAZARD_SIZE),
            vel: Vec2::new(5.0, 0.0),
            alive: true,
        };

        let input = TickInput::default();
        let mut lost = false;
        for _ in 0..10_000 {
            tick(&mut state, &input);
            if state.phase == GamePhase::GameOver {
                lost = true;
                break;
            }
        }
        assert!(lost, "a hazard crossing the avatar's row must end the session");
        assert_eq!(state.score.value(), 0);

        // Terminal: no further entity updates after the transition
        let positions: Vec<Vec2> = state.hazards.iter().map(|h| h.rect.center).collect();
        tick(&mut state, &input);
        let after: Vec<Vec2> = state.hazards.iter().map(|h| h.rect.center).collect();
        assert_eq!(positions, after);
    }

    #[test]
    fn test_determinism() {
        let mut a = GameState::new(GameConfig::default(), 4242);
        let mut b = GameState::new(GameConfig::default(), 4242);
        let inputs = [
            TickInput {
                fire: true,
                ..Default::default()
            },
            TickInput {
                held: HeldKeys {
                    right: true,
                    down: true,
                    ..Default::default()
                },
                ..Default::default()
            },
            TickInput::default(),
            TickInput {
                fire: true,
                ..Default::default()
            },
        ];
        for _ in 0..500 {
            for input in &inputs {
                tick(&mut a, input);
                tick(&mut b, input);
            }
        }
        assert_eq!(a.time_ticks, b.time_ticks);
        assert_eq!(a.score.value(), b.score.value());
        assert_eq!(a.phase, b.phase);
        assert_eq!(a.avatar.rect.center, b.avatar.rect.center);
        assert_eq!(a.hazards.len(), b.hazards.len());
    }

    proptest! {
        #[test]
        fn prop_score_monotonic_and_bounded(seed in 0u64..10_000) {
            let config = GameConfig::default();
            let mut state = GameState::new(config, seed);
            let mut last_score = 0;
            let input = TickInput {
                fire: seed % 3 == 0,
                held: HeldKeys {
                    right: seed % 2 == 0,
                    up: seed % 5 == 0,
                    ..Default::default()
                },
                ..Default::default()
            };
            for _ in 0..2_000 {
                tick(&mut state, &input);
                let score = state.score.value();
                prop_assert!(score >= last_score);
                last_score = score;
            }
            // At most one increment per hazard ever spawned
            prop_assert!(last_score as usize <= config.hazard_count);
        }

        #[test]
        fn prop_avatar_stays_in_bounds(seed in 0u64..10_000, steps in 1usize..500) {
            let mut state = GameState::new(
                GameConfig { hazard_count: 0, ..Default::default() },
                seed,
            );
            let field = state.field();
            for i in 0..steps {
                let held = HeldKeys {
                    up: (seed + i as u64) % 3 == 0,
                    down: (seed + i as u64) % 4 == 0,
                    left: (seed + i as u64) % 2 == 0,
                    right: (seed + i as u64) % 5 == 0,
                    ..Default::default()
                };
                let input = TickInput { held, ..Default::default() };
                tick(&mut state, &input);
                let r = &state.avatar.rect;
                prop_assert!(r.left() >= 0.0 && r.right() <= field.x);
                prop_assert!(r.top() >= 0.0 && r.bottom() <= field.y);
            }
        }

        #[test]
        fn prop_hazard_speed_preserved(seed in 0u64..10_000, steps in 1usize..2_000) {
            let mut state = GameState::new(GameConfig::default(), seed);
            let speed = HAZARD_VELOCITY.length();
            for _ in 0..steps {
                tick(&mut state, &TickInput::default());
                if state.phase != GamePhase::Running {
                    break;
                }
                for hazard in &state.hazards {
                    prop_assert!((hazard.vel.length() - speed).abs() < 1e-3);
                }
            }
        }
    }
}
