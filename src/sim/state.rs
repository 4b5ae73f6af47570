//! Game state and core simulation types
//!
//! Entities move in whole-pixel steps once per tick, so none of the update
//! methods take a delta time. All randomness is confined to hazard spawn
//! positions in `GameState::new`.

use glam::Vec2;
use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::bounds::{Rect, check_bounds};
use super::tick::HeldKeys;
use crate::assets::SpriteKey;
use crate::config::GameConfig;
use crate::consts::*;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Avatar was struck; freeze-frame message until the pause timer expires
    GameOver,
    /// External quit signal; session ends immediately
    Quit,
}

/// The 8 discrete directions the avatar can face.
///
/// Each variant corresponds to one combination of +/-5 px steps on the two
/// axes; sprites are pre-rendered per direction and looked up by variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facing {
    East,
    NorthEast,
    North,
    NorthWest,
    West,
    SouthWest,
    South,
    SouthEast,
}

impl Facing {
    pub const ALL: [Facing; 8] = [
        Facing::East,
        Facing::NorthEast,
        Facing::North,
        Facing::NorthWest,
        Facing::West,
        Facing::SouthWest,
        Facing::South,
        Facing::SouthEast,
    ];

    /// Per-tick displacement for this direction (pixels, y-down).
    pub fn delta(self) -> Vec2 {
        let s = AVATAR_STEP;
        match self {
            Facing::East => Vec2::new(s, 0.0),
            Facing::NorthEast => Vec2::new(s, -s),
            Facing::North => Vec2::new(0.0, -s),
            Facing::NorthWest => Vec2::new(-s, -s),
            Facing::West => Vec2::new(-s, 0.0),
            Facing::SouthWest => Vec2::new(-s, s),
            Facing::South => Vec2::new(0.0, s),
            Facing::SouthEast => Vec2::new(s, s),
        }
    }

    /// Map a summed key displacement back to a direction. Returns `None` for
    /// the zero vector.
    pub fn from_displacement(delta: Vec2) -> Option<Facing> {
        match (delta.x.partial_cmp(&0.0)?, delta.y.partial_cmp(&0.0)?) {
            (std::cmp::Ordering::Greater, std::cmp::Ordering::Equal) => Some(Facing::East),
            (std::cmp::Ordering::Greater, std::cmp::Ordering::Less) => Some(Facing::NorthEast),
            (std::cmp::Ordering::Equal, std::cmp::Ordering::Less) => Some(Facing::North),
            (std::cmp::Ordering::Less, std::cmp::Ordering::Less) => Some(Facing::NorthWest),
            (std::cmp::Ordering::Less, std::cmp::Ordering::Equal) => Some(Facing::West),
            (std::cmp::Ordering::Less, std::cmp::Ordering::Greater) => Some(Facing::SouthWest),
            (std::cmp::Ordering::Equal, std::cmp::Ordering::Greater) => Some(Facing::South),
            (std::cmp::Ordering::Greater, std::cmp::Ordering::Greater) => Some(Facing::SouthEast),
            (std::cmp::Ordering::Equal, std::cmp::Ordering::Equal) => None,
        }
    }
}

/// The player-controlled avatar
#[derive(Debug, Clone)]
pub struct Avatar {
    pub rect: Rect,
    /// Last nonzero movement direction; aims projectiles even when idle
    pub facing: Facing,
    /// Sprite currently shown (directional, or a cosmetic override)
    pub sprite: SpriteKey,
}

impl Avatar {
    pub fn new(center: Vec2) -> Self {
        Self {
            rect: Rect::new(center, AVATAR_SIZE),
            facing: Facing::East,
            sprite: SpriteKey::Avatar(Facing::East),
        }
    }

    /// Move according to the currently-held direction keys.
    ///
    /// The summed displacement is applied tentatively and reverted entirely if
    /// the result would leave the playfield on either axis. Facing and the
    /// directional sprite update on any nonzero input, even when the move
    /// itself is cancelled.
    pub fn apply_input(&mut self, held: &HeldKeys, field: Vec2) {
        let delta = held.displacement(AVATAR_STEP);
        if let Some(facing) = Facing::from_displacement(delta) {
            self.facing = facing;
            self.sprite = SpriteKey::Avatar(facing);
        }
        self.rect.shift(delta);
        if check_bounds(&self.rect, field) != (true, true) {
            self.rect.shift(-delta);
        }
    }

    /// Spawn a projectile along the current facing.
    pub fn fire(&self) -> Projectile {
        Projectile::spawn(self)
    }

    /// Cosmetic sprite override (celebration on a kill). The next nonzero
    /// movement reasserts the directional sprite.
    pub fn set_variant(&mut self, sprite: SpriteKey) {
        self.sprite = sprite;
    }
}

/// A projectile fired by the avatar
#[derive(Debug, Clone)]
pub struct Projectile {
    pub rect: Rect,
    /// Fixed for the projectile's lifetime
    pub vel: Vec2,
    /// Presentation-only rotation, degrees counter-clockwise from east
    pub angle_deg: f32,
    /// Cleared when the projectile leaves the field or strikes a hazard;
    /// dead projectiles are swept out at end of tick
    pub alive: bool,
}

impl Projectile {
    /// Spawn offset outward from the avatar along its facing: one avatar
    /// width/height per unit step on each axis, measured from the right edge.
    fn spawn(avatar: &Avatar) -> Self {
        let vel = avatar.facing.delta();
        let unit = vel / AVATAR_STEP;
        let left = avatar.rect.right() + avatar.rect.size.x * unit.x;
        let center = Vec2::new(
            left + PROJECTILE_SIZE.x / 2.0,
            avatar.rect.center.y + avatar.rect.size.y * unit.y,
        );
        Self {
            rect: Rect::new(center, PROJECTILE_SIZE),
            vel,
            angle_deg: (-vel.y).atan2(vel.x).to_degrees(),
            alive: true,
        }
    }

    /// Advance while fully inside the field; mark inert once outside.
    /// Inert projectiles never move or collide again.
    pub fn update(&mut self, field: Vec2) {
        if !self.alive {
            return;
        }
        if check_bounds(&self.rect, field) == (true, true) {
            self.rect.shift(self.vel);
        } else {
            self.alive = false;
        }
    }
}

/// A bouncing hazard
#[derive(Debug, Clone)]
pub struct Hazard {
    pub rect: Rect,
    pub vel: Vec2,
    pub alive: bool,
}

impl Hazard {
    /// Random spawn: center uniform over the field, no overlap avoidance.
    pub fn spawn(rng: &mut Pcg32, field: Vec2) -> Self {
        let center = Vec2::new(
            rng.random_range(0.0..=field.x),
            rng.random_range(0.0..=field.y),
        );
        Self {
            rect: Rect::new(center, HAZARD_SIZE),
            vel: HAZARD_VELOCITY,
            alive: true,
        }
    }

    /// Reflect each out-of-bounds axis independently, then apply the velocity
    /// unconditionally. A hazard can render one tick outside the field after
    /// a deep overshoot; it settles back inside on the following tick.
    pub fn update(&mut self, field: Vec2) {
        let (within_x, within_y) = check_bounds(&self.rect, field);
        if !within_x {
            self.vel.x = -self.vel.x;
        }
        if !within_y {
            self.vel.y = -self.vel.y;
        }
        self.rect.shift(self.vel);
    }
}

/// Transient destruction flash, anchored where a hazard died.
///
/// Purely cosmetic: never collides, never affects gameplay.
#[derive(Debug, Clone)]
pub struct Effect {
    pub pos: Vec2,
    /// Remaining ticks; at 0 the effect is finished and gets pruned
    pub life: u32,
    /// Current frame in the 4-frame cycle
    pub frame: u8,
    hold: u8,
}

impl Effect {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            life: EFFECT_LIFE_TICKS,
            frame: 0,
            hold: 0,
        }
    }

    /// Burn one tick of life; switch to frame `life % 4` every time the hold
    /// counter passes its threshold, otherwise keep showing the current frame.
    pub fn update(&mut self) {
        if self.life == 0 {
            return;
        }
        self.life -= 1;
        if self.life == 0 {
            return;
        }
        if self.hold > EFFECT_FRAME_HOLD {
            self.hold = 0;
            self.frame = (self.life % 4) as u8;
        } else {
            self.hold += 1;
        }
    }

    pub fn finished(&self) -> bool {
        self.life == 0
    }

    /// Sprite to draw this tick, if any.
    pub fn sprite(&self) -> Option<SpriteKey> {
        (self.life > 0).then_some(SpriteKey::EffectFrame(self.frame))
    }
}

/// Monotonic kill counter
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreTracker {
    num: u32,
}

impl ScoreTracker {
    /// Exactly one call per hazard destroyed.
    pub fn increment(&mut self) {
        self.num += 1;
    }

    pub fn value(&self) -> u32 {
        self.num
    }
}

/// Complete session state, exclusively owned by the orchestrator
#[derive(Debug, Clone)]
pub struct GameState {
    /// Spawn seed, kept for reproducibility
    pub seed: u64,
    pub config: GameConfig,
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub avatar: Avatar,
    pub projectiles: Vec<Projectile>,
    pub hazards: Vec<Hazard>,
    pub effects: Vec<Effect>,
    pub score: ScoreTracker,
    /// Remaining freeze-frame ticks once the phase is GameOver
    pub freeze_ticks: u32,
}

impl GameState {
    /// Create a session: avatar at its start position, `hazard_count` hazards
    /// at seeded-random positions, empty projectile and effect collections.
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let field = config.field();
        let hazards = (0..config.hazard_count)
            .map(|_| Hazard::spawn(&mut rng, field))
            .collect();
        Self {
            seed,
            config,
            phase: GamePhase::Running,
            time_ticks: 0,
            avatar: Avatar::new(AVATAR_START),
            projectiles: Vec::new(),
            hazards,
            effects: Vec::new(),
            score: ScoreTracker::default(),
            freeze_ticks: 0,
        }
    }

    pub fn field(&self) -> Vec2 {
        self.config.field()
    }

    /// True once the session should stop ticking and the process may exit:
    /// immediately on Quit, after the freeze timer on GameOver.
    pub fn session_over(&self) -> bool {
        match self.phase {
            GamePhase::Running => false,
            GamePhase::GameOver => self.freeze_ticks == 0,
            GamePhase::Quit => true,
        }
    }
}
