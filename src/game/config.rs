//! Initial Game Configuration
//!
//! The fixed parameter blob the client fetches once at startup.
//! All values are process-wide constants; the payload is rebuilt fresh
//! per request and never changes between requests.

use serde::{Deserialize, Serialize};

/// Player spawn parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSpawn {
    /// Horizontal spawn position (canvas pixels).
    pub x: i32,
    /// Vertical spawn position (canvas pixels).
    pub y: i32,
    /// Movement speed (pixels per frame).
    pub speed: i32,
    /// Starting health.
    pub health: i32,
}

/// Enemy archetype identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnemyClass {
    /// Baseline enemy.
    Basic,
    /// Quick but fragile.
    Fast,
    /// Slow and durable.
    Tank,
}

/// Stats for one enemy archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyArchetype {
    /// Which archetype this is.
    #[serde(rename = "type")]
    pub class: EnemyClass,
    /// Movement speed (pixels per frame).
    pub speed: i32,
    /// Starting health.
    pub health: i32,
}

/// Bullet speeds for both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulletSpeeds {
    /// Speed of player bullets (pixels per frame).
    pub player_speed: i32,
    /// Speed of enemy bullets (pixels per frame).
    pub enemy_speed: i32,
}

/// Powerup kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PowerupKind {
    /// Restores health.
    Health,
    /// Multiplies fire rate for a short window.
    RapidFire,
    /// Absorbs damage for a short window.
    Shield,
}

/// Effect magnitude for one powerup kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerupEffect {
    /// Which powerup this is.
    #[serde(rename = "type")]
    pub kind: PowerupKind,
    /// Effect magnitude (health points, rate multiplier, or shield points).
    pub effect: i32,
}

/// The full initial-state payload served at `/api/game-state`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Player spawn parameters.
    pub player: PlayerSpawn,
    /// The enemy archetypes the client may spawn.
    pub enemies: Vec<EnemyArchetype>,
    /// Bullet speeds.
    pub bullets: BulletSpeeds,
    /// Powerup effects.
    pub powerups: Vec<PowerupEffect>,
}

impl GameConfig {
    /// Build the fixed initial configuration.
    pub fn initial() -> Self {
        Self {
            player: PlayerSpawn {
                x: 400,
                y: 500,
                speed: 5,
                health: 100,
            },
            enemies: vec![
                EnemyArchetype {
                    class: EnemyClass::Basic,
                    speed: 2,
                    health: 20,
                },
                EnemyArchetype {
                    class: EnemyClass::Fast,
                    speed: 4,
                    health: 10,
                },
                EnemyArchetype {
                    class: EnemyClass::Tank,
                    speed: 1,
                    health: 50,
                },
            ],
            bullets: BulletSpeeds {
                player_speed: 7,
                enemy_speed: 4,
            },
            powerups: vec![
                PowerupEffect {
                    kind: PowerupKind::Health,
                    effect: 25,
                },
                PowerupEffect {
                    kind: PowerupKind::RapidFire,
                    effect: 3,
                },
                PowerupEffect {
                    kind: PowerupKind::Shield,
                    effect: 30,
                },
            ],
        }
    }
}
