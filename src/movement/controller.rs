//! Movement domain: the per-tick state machine.
//!
//! Everything here is plain data manipulation on [`MovementState`]; the
//! physics engine is reached only through a [`SurfaceProbe`] and the
//! equipped ability is passed in by the caller.

use bevy::prelude::*;

use crate::abilities::AbilityKind;
use crate::movement::{
    JumpKind, JumpRequest, MovementInput, MovementState, MovementTuning, StepReport, SurfaceProbe,
};

const NORMAL_GRAVITY_SCALE: f32 = 1.0;

/// Residue below which a countdown counts as finished, absorbing f32 step
/// accumulation.
const COUNTDOWN_TOLERANCE: f32 = 1e-4;

/// Count `timer` down by `dt`. Returns true on the tick it runs out, leaving
/// it at exactly zero.
pub(crate) fn tick_countdown(timer: &mut f32, dt: f32) -> bool {
    *timer -= dt;
    if *timer <= COUNTDOWN_TOLERANCE {
        *timer = 0.0;
        return true;
    }
    false
}

impl MovementState {
    /// Copy this frame's intents in. A jump press is latched until the next
    /// physics tick; presses during a dash are dropped.
    pub fn latch_input(&mut self, input: &MovementInput) {
        self.move_axis = input.axis_x.clamp(-1.0, 1.0);
        if self.move_axis != 0.0 {
            self.last_horizontal_direction = self.move_axis.signum();
        }
        self.jump_held = input.jump_held;

        if input.jump_just_pressed && !self.dashing && self.jump_request.is_none() {
            self.jump_request = Some(JumpRequest::Normal);
        }
    }

    /// Latch an air jump that ignores `jumps_remaining`.
    pub fn request_forced_air_jump(&mut self) {
        self.jump_request = Some(JumpRequest::ForcedAir);
    }

    /// Begin a dash in the last faced direction. Returns false if a dash is
    /// already running.
    pub fn start_dash(&mut self, speed: f32, duration: f32) -> bool {
        if self.dashing {
            return false;
        }

        let direction = if self.last_horizontal_direction != 0.0 {
            self.last_horizontal_direction.signum()
        } else {
            1.0
        };

        self.dashing = true;
        self.dash_timer = duration;
        self.dash_velocity = Vec2::new(direction * speed, self.velocity.y);
        self.velocity = self.dash_velocity;
        self.wall_sliding = false;
        self.gliding = false;
        debug!("Dash started: dir={}, duration={}", direction, duration);
        true
    }

    /// Stop the dash and restore the body shape.
    pub fn end_dash(&mut self) {
        self.dashing = false;
        self.dash_timer = 0.0;
    }

    pub fn set_forced_glide(&mut self, active: bool) {
        self.forced_glide = active;
        if !active {
            self.gravity_scale = NORMAL_GRAVITY_SCALE;
        }
    }

    pub fn enable_wall_grip(&mut self, enable: bool) {
        self.wall_grip_enabled = enable;
        if !enable {
            self.wall_sliding = false;
        }
    }

    /// Give one air jump right away when airborne.
    pub fn grant_air_jump(&mut self) {
        if !self.grounded {
            self.jumps_remaining = 1;
        }
    }

    pub fn clear_air_jumps(&mut self) {
        self.jumps_remaining = 0;
    }

    /// Vertical body scale to apply to the collider's transform.
    pub fn body_scale(&self, tuning: &MovementTuning) -> f32 {
        if self.dashing {
            tuning.dash_shape_scale
        } else {
            1.0
        }
    }

    /// Grounded, still, no timers running.
    pub fn reset_to_baseline(&mut self) {
        *self = Self {
            grounded: true,
            last_horizontal_direction: self.last_horizontal_direction,
            ..Self::default()
        };
    }

    /// Advance one fixed physics tick.
    pub fn physics_step<P: SurfaceProbe + ?Sized>(
        &mut self,
        probe: &P,
        equipped: AbilityKind,
        tuning: &MovementTuning,
        dt: f32,
    ) -> StepReport {
        let mut report = StepReport::default();

        if self.movement_lock_timer > 0.0 {
            tick_countdown(&mut self.movement_lock_timer, dt);
        }

        let was_grounded = self.grounded;
        self.grounded = probe.is_grounded();
        if self.grounded && !was_grounded {
            self.jumps_remaining = 1;
            self.gravity_scale = NORMAL_GRAVITY_SCALE;
            report.landed = true;
            debug!("Landed: jumps_remaining={}", self.jumps_remaining);
        }

        if self.dashing {
            self.velocity = self.dash_velocity;
            if tick_countdown(&mut self.dash_timer, dt) {
                self.end_dash();
                report.dash_ended = true;
                debug!("Dash ended");
            }
            self.jump_request = None;
            return report;
        }

        self.integrate_gravity(tuning, dt);

        let touching_wall = probe.is_touching_any_wall();
        if self.wall_grip_enabled && !self.grounded && touching_wall && self.velocity.y <= 0.0 {
            if !self.wall_sliding {
                debug!("Wall slide started");
            }
            self.wall_sliding = true;
            self.velocity.y = self.velocity.y.max(-tuning.wall_slide_speed);
        } else {
            self.wall_sliding = false;
            self.apply_horizontal_movement(tuning);
        }

        if let Some(request) = self.jump_request.take() {
            report.jumped = self.resolve_jump(request, probe, equipped, tuning);
            report.double_jump_consumed = report.jumped == Some(JumpKind::Double);
        }

        let holding_glide = equipped == AbilityKind::Glide
            && self.jump_held
            && !self.grounded
            && !touching_wall
            && self.velocity.y <= 0.0;
        self.gliding = self.forced_glide || holding_glide;

        if self.gliding {
            self.glide_timer += dt;
            if self.glide_timer > tuning.max_glide_time {
                self.gliding = false;
                self.glide_timer = 0.0;
                self.set_forced_glide(false);
                report.glide_expired = true;
                debug!("Glide expired after {}s", tuning.max_glide_time);
            } else {
                self.gravity_scale = tuning.glide_gravity_scale;
                self.velocity.y = self.velocity.y.max(-tuning.glide_max_fall_speed);
            }
        } else {
            self.glide_timer = 0.0;
            self.shape_fall_gravity(tuning, dt);
        }

        report
    }

    fn integrate_gravity(&mut self, tuning: &MovementTuning, dt: f32) {
        if self.grounded && self.velocity.y <= 0.0 {
            self.velocity.y = 0.0;
            return;
        }
        self.velocity.y -= tuning.gravity * self.gravity_scale * dt;
    }

    fn shape_fall_gravity(&mut self, tuning: &MovementTuning, dt: f32) {
        if !self.grounded && self.velocity.y < 0.0 {
            // Blend from the current scale so the pull keeps building on the way down.
            let from = self.gravity_scale.max(NORMAL_GRAVITY_SCALE);
            let t = (tuning.fall_gravity_blend * dt).min(1.0);
            self.gravity_scale = from + (tuning.fall_gravity_multiplier - from) * t;
        } else {
            self.gravity_scale = NORMAL_GRAVITY_SCALE;
        }
    }

    fn apply_horizontal_movement(&mut self, tuning: &MovementTuning) {
        if self.movement_lock_timer > 0.0 {
            return;
        }

        let target_vx = self.move_axis * tuning.move_speed;
        let smoothing = if self.grounded {
            tuning.ground_smoothing
        } else {
            tuning.air_smoothing
        };
        self.velocity.x += (target_vx - self.velocity.x) * smoothing;
    }

    fn launch_vertical(&mut self, tuning: &MovementTuning) {
        self.velocity.y = tuning.jump_velocity;
    }

    fn resolve_jump<P: SurfaceProbe + ?Sized>(
        &mut self,
        request: JumpRequest,
        probe: &P,
        equipped: AbilityKind,
        tuning: &MovementTuning,
    ) -> Option<JumpKind> {
        if request == JumpRequest::ForcedAir {
            if self.grounded {
                debug!("Forced air jump rejected: grounded");
                return None;
            }
            self.launch_vertical(tuning);
            debug!("Forced air jump");
            return Some(JumpKind::ForcedAir);
        }

        if self.wall_grip_enabled || self.wall_sliding {
            if let Some(side) = probe.single_wall() {
                self.velocity = tuning.wall_jump_velocity(side.away_direction());
                self.enable_wall_grip(false);
                self.gliding = false;
                self.jumps_remaining = 0;
                self.movement_lock_timer = tuning.movement_lock_time;
                debug!("Wall jump: wall={:?}, vel={}", side, self.velocity);
                return Some(JumpKind::Wall);
            }
        }

        if self.grounded {
            self.launch_vertical(tuning);
            self.jumps_remaining = u8::from(equipped == AbilityKind::DoubleJump);
            debug!("Ground jump: jumps_remaining={}", self.jumps_remaining);
            return Some(JumpKind::Ground);
        }

        if probe.is_touching_any_wall() && !self.wall_grip_enabled {
            debug!("Jump blocked: touching wall without wall grip");
            return None;
        }

        if self.jumps_remaining > 0 && equipped == AbilityKind::DoubleJump {
            self.launch_vertical(tuning);
            self.jumps_remaining = 0;
            debug!("Double jump");
            return Some(JumpKind::Double);
        }

        debug!("Jump blocked: no jumps remaining");
        None
    }
}
