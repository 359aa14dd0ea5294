//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MovementTuning {
    pub move_speed: f32,
    /// Per-tick lerp factor toward the target horizontal speed on the ground.
    pub ground_smoothing: f32,
    /// Lower than `ground_smoothing` to model reduced air control.
    pub air_smoothing: f32,
    pub jump_velocity: f32,
    pub gravity: f32,
    /// Gravity scale approached while falling, for a snappier descent.
    pub fall_gravity_multiplier: f32,
    /// Rate (per second) at which the fall multiplier is approached.
    pub fall_gravity_blend: f32,
    pub wall_jump_impulse: f32,
    pub wall_jump_horizontal_ratio: f32,
    pub wall_jump_vertical_ratio: f32,
    /// Horizontal input is ignored for this long after a wall jump.
    pub movement_lock_time: f32,
    pub wall_slide_speed: f32,
    pub glide_gravity_scale: f32,
    pub glide_max_fall_speed: f32,
    pub max_glide_time: f32,
    pub dash_speed: f32,
    pub dash_duration: f32,
    /// Vertical body scale while dashing.
    pub dash_shape_scale: f32,
    pub ground_probe_distance: f32,
    pub wall_probe_distance: f32,
    pub fixed_hz: f64,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            move_speed: 320.0,
            ground_smoothing: 1.0,
            air_smoothing: 0.1,
            jump_velocity: 680.0,
            gravity: 1800.0,
            fall_gravity_multiplier: 1.5,
            fall_gravity_blend: 2.0,
            wall_jump_impulse: 500.0,
            wall_jump_horizontal_ratio: 1.2,
            wall_jump_vertical_ratio: 0.9,
            movement_lock_time: 0.15,
            wall_slide_speed: 100.0,
            glide_gravity_scale: 0.3,
            glide_max_fall_speed: 120.0,
            max_glide_time: 2.0,
            dash_speed: 900.0,
            dash_duration: 0.15,
            dash_shape_scale: 0.6,
            ground_probe_distance: 4.0,
            wall_probe_distance: 4.0,
            fixed_hz: 60.0,
        }
    }
}

impl MovementTuning {
    /// Launch velocity of a wall jump away from a wall on the given side.
    pub fn wall_jump_velocity(&self, away_direction: f32) -> Vec2 {
        Vec2::new(
            away_direction * self.wall_jump_impulse * self.wall_jump_horizontal_ratio,
            self.wall_jump_impulse * self.wall_jump_vertical_ratio,
        )
    }

    /// Peak height of a single jump under normal gravity.
    /// Uses physics formula: h = v² / (2g)
    pub fn single_jump_height(&self) -> f32 {
        self.jump_velocity * self.jump_velocity / (2.0 * self.gravity)
    }
}

/// Intents sampled once per frame from the keyboard.
#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    pub axis_x: f32,
    pub jump_just_pressed: bool,
    pub jump_held: bool,
}
