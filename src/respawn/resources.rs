//! Respawn domain: tuning resource.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RespawnTuning {
    /// Falling below this height sends the player back to the respawn point.
    pub fall_death_y: f32,
    pub checkpoint_radius: f32,
    pub spawn_point: [f32; 2],
}

impl Default for RespawnTuning {
    fn default() -> Self {
        Self {
            fall_death_y: -600.0,
            checkpoint_radius: 32.0,
            spawn_point: [0.0, -120.0],
        }
    }
}

impl RespawnTuning {
    pub fn spawn_position(&self) -> Vec2 {
        Vec2::from_array(self.spawn_point)
    }
}
