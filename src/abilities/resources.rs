//! Abilities domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::abilities::AbilityKind;

#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AbilityTuning {
    pub double_jump_cooldown: f32,
    pub dash_cooldown: f32,
    pub wall_jump_cooldown: f32,
    pub glide_cooldown: f32,
    /// Longest a single use-hold keeps glide forced on.
    pub glide_hold_duration: f32,
    pub palette: MarkerPalette,
}

impl Default for AbilityTuning {
    fn default() -> Self {
        Self {
            double_jump_cooldown: 5.0,
            dash_cooldown: 3.0,
            wall_jump_cooldown: 4.0,
            glide_cooldown: 6.0,
            glide_hold_duration: 3.0,
            palette: MarkerPalette::default(),
        }
    }
}

impl AbilityTuning {
    pub fn cooldown_for(&self, kind: AbilityKind) -> f32 {
        match kind {
            AbilityKind::None => 0.0,
            AbilityKind::DoubleJump => self.double_jump_cooldown,
            AbilityKind::Dash => self.dash_cooldown,
            AbilityKind::WallJump => self.wall_jump_cooldown,
            AbilityKind::Glide => self.glide_cooldown,
        }
    }
}

/// Sprite tint per equipped ability, as sRGB triples.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MarkerPalette {
    pub none: [f32; 3],
    pub double_jump: [f32; 3],
    pub dash: [f32; 3],
    pub wall_jump: [f32; 3],
    pub glide: [f32; 3],
}

impl Default for MarkerPalette {
    fn default() -> Self {
        Self {
            none: [1.0, 1.0, 1.0],
            double_jump: [1.0, 0.76, 0.8],
            dash: [0.0, 0.4, 0.0],
            wall_jump: [1.0, 0.84, 0.0],
            glide: [1.0, 0.0, 0.0],
        }
    }
}

impl MarkerPalette {
    pub fn color_for(&self, kind: AbilityKind) -> Color {
        let [r, g, b] = match kind {
            AbilityKind::None => self.none,
            AbilityKind::DoubleJump => self.double_jump,
            AbilityKind::Dash => self.dash,
            AbilityKind::WallJump => self.wall_jump,
            AbilityKind::Glide => self.glide,
        };
        Color::srgb(r, g, b)
    }
}

/// Ability intents sampled once per frame.
#[derive(Resource, Debug, Default)]
pub struct AbilityInput {
    pub equip: Option<AbilityKind>,
    pub use_pressed: bool,
    pub use_released: bool,
}
