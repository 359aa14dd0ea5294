//! Respawn domain: checkpoint and respawn point components.

use bevy::prelude::*;

/// A checkpoint that moves the player's respawn point once touched.
#[derive(Component, Debug, Default)]
pub struct Checkpoint {
    pub activated: bool,
}

/// Where the character reappears after a fall or death.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct RespawnPoint(pub Vec2);
