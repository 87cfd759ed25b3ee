//! Game Parameters Module
//!
//! The fixed initial configuration handed to the browser client.
//! No simulation lives here; all gameplay runs client-side.

pub mod config;

// Re-export key types
pub use config::{
    BulletSpeeds, EnemyArchetype, EnemyClass, GameConfig, PlayerSpawn, PowerupEffect, PowerupKind,
};
