//! Logical sprite ids and the startup asset catalog
//!
//! The simulation and renderer speak in `SpriteKey`s; a frontend resolves
//! those through an `AssetCatalog` built once at startup from a JSON
//! manifest. Any sprite the game can request must be present in the manifest
//! or catalog construction fails, which callers treat as fatal.

use std::collections::HashMap;

use glam::Vec2;
use serde::Deserialize;
use thiserror::Error;

use crate::sim::Facing;

/// Logical id for every drawable the game can emit.
///
/// The 8 directional avatar sprites are a fixed mapping from `Facing`,
/// populated once at startup rather than rotated live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteKey {
    Backdrop,
    Avatar(Facing),
    /// Celebration variant shown after a kill
    AvatarCheer,
    Hazard,
    Projectile,
    /// One of the 4 destruction-flash frames
    EffectFrame(u8),
}

impl SpriteKey {
    /// Every key a catalog must be able to resolve.
    pub fn all() -> Vec<SpriteKey> {
        let mut keys = vec![
            SpriteKey::Backdrop,
            SpriteKey::AvatarCheer,
            SpriteKey::Hazard,
            SpriteKey::Projectile,
        ];
        keys.extend(Facing::ALL.iter().map(|f| SpriteKey::Avatar(*f)));
        keys.extend((0..4u8).map(SpriteKey::EffectFrame));
        keys
    }

    /// Name this key is listed under in the manifest.
    pub fn manifest_name(&self) -> String {
        match self {
            SpriteKey::Backdrop => "backdrop".to_string(),
            SpriteKey::AvatarCheer => "avatar_cheer".to_string(),
            SpriteKey::Hazard => "hazard".to_string(),
            SpriteKey::Projectile => "projectile".to_string(),
            SpriteKey::EffectFrame(n) => format!("effect_{n}"),
            SpriteKey::Avatar(facing) => {
                let dir = match facing {
                    Facing::East => "e",
                    Facing::NorthEast => "ne",
                    Facing::North => "n",
                    Facing::NorthWest => "nw",
                    Facing::West => "w",
                    Facing::SouthWest => "sw",
                    Facing::South => "s",
                    Facing::SouthEast => "se",
                };
                format!("avatar_{dir}")
            }
        }
    }
}

/// A resolved drawable: where the image lives and how big it renders.
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    pub path: String,
    pub size: Vec2,
}

#[derive(Debug, Deserialize)]
struct ManifestEntry {
    path: String,
    width: f32,
    height: f32,
}

/// Errors from catalog construction. All of them abort startup.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to parse asset manifest: {0}")]
    Manifest(#[from] serde_json::Error),
    #[error("asset manifest is missing sprite '{0}'")]
    MissingSprite(String),
}

/// Immutable sprite lookup, fully validated at construction.
#[derive(Debug, Clone)]
pub struct AssetCatalog {
    sprites: HashMap<SpriteKey, Sprite>,
}

impl AssetCatalog {
    /// Build a catalog from manifest JSON. Every key in `SpriteKey::all()`
    /// must be present; anything missing is a fatal startup error.
    pub fn from_manifest(json: &str) -> Result<Self, AssetError> {
        let entries: HashMap<String, ManifestEntry> = serde_json::from_str(json)?;
        let mut sprites = HashMap::new();
        for key in SpriteKey::all() {
            let name = key.manifest_name();
            let entry = entries
                .get(&name)
                .ok_or_else(|| AssetError::MissingSprite(name))?;
            sprites.insert(
                key,
                Sprite {
                    path: entry.path.clone(),
                    size: Vec2::new(entry.width, entry.height),
                },
            );
        }
        Ok(Self { sprites })
    }

    /// Build from the manifest shipped with the game.
    pub fn load_default() -> Result<Self, AssetError> {
        Self::from_manifest(include_str!("../assets/manifest.json"))
    }

    /// Resolve a key. Construction guarantees every key is present.
    pub fn sprite(&self, key: SpriteKey) -> &Sprite {
        &self.sprites[&key]
    }
}
