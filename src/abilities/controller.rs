//! Abilities domain: equip/unequip protocol, cooldowns and use dispatch.
//!
//! The movement state is handed in by the caller on every operation; the
//! slot never looks its collaborators up on its own.

use bevy::prelude::*;

use crate::abilities::{AbilityKind, AbilityState, AbilityTuning, GlideHold};
use crate::movement::{JumpKind, MovementState, MovementTuning, StepReport, tick_countdown};

/// Setup effects run when `kind` enters the slot.
fn apply_equip(kind: AbilityKind, movement: &mut MovementState) {
    match kind {
        AbilityKind::None => {}
        AbilityKind::DoubleJump => {
            movement.set_forced_glide(false);
            movement.enable_wall_grip(false);
            movement.grant_air_jump();
        }
        AbilityKind::Glide => {
            movement.clear_air_jumps();
            movement.enable_wall_grip(false);
        }
        AbilityKind::WallJump => {
            movement.enable_wall_grip(true);
            movement.clear_air_jumps();
            movement.set_forced_glide(false);
        }
        AbilityKind::Dash => {
            movement.set_forced_glide(false);
            movement.enable_wall_grip(false);
            movement.clear_air_jumps();
        }
    }
}

/// Cleanup run when `kind` leaves the slot.
fn apply_unequip(kind: AbilityKind, movement: &mut MovementState) {
    match kind {
        AbilityKind::None | AbilityKind::Dash => {}
        AbilityKind::WallJump => movement.enable_wall_grip(false),
        AbilityKind::Glide => movement.set_forced_glide(false),
        AbilityKind::DoubleJump => movement.clear_air_jumps(),
    }
}

impl AbilityState {
    /// Equip `kind`, swapping out whatever is in the slot. Equipping the
    /// current ability toggles it off. Blocked while `kind` cools down.
    pub fn try_equip(&mut self, kind: AbilityKind, movement: &mut MovementState) {
        if kind == AbilityKind::None {
            return;
        }

        let remaining = self.cooldowns.remaining(kind);
        if remaining > 0.0 {
            debug!("{:?} on cooldown ({:.1}s)", kind, remaining);
            return;
        }

        if self.equipped == kind {
            self.unequip(movement);
            return;
        }

        self.unequip(movement);
        self.equipped = kind;
        self.announcements.push(kind);
        apply_equip(kind, movement);
        info!("Equipped {:?}", kind);
    }

    pub fn unequip(&mut self, movement: &mut MovementState) {
        let previous = self.equipped;
        if previous == AbilityKind::None {
            return;
        }

        if previous == AbilityKind::Glide {
            // Leaving the slot mid-hold ends the hold; forced glide is cleared below.
            if let Some(hold) = self.glide_hold.take() {
                self.cooldowns.set(AbilityKind::Glide, hold.cooldown);
                debug!("Glide hold ended by unequip");
            }
        }
        apply_unequip(previous, movement);

        self.equipped = AbilityKind::None;
        self.announcements.push(AbilityKind::None);
        info!("Unequipped {:?}", previous);
    }

    /// Automatic removal after a one-shot use, a timeout or a landing.
    pub fn force_unequip(&mut self, movement: &mut MovementState) {
        self.unequip(movement);
    }

    /// Put `kind` on cooldown. Using the equipped ability also frees the slot.
    pub fn start_cooldown(&mut self, kind: AbilityKind, duration: f32, movement: &mut MovementState) {
        self.cooldowns.set(kind, duration);
        debug!("{:?} cooldown started: {:.1}s", kind, duration);
        if self.equipped == kind {
            self.unequip(movement);
        }
    }

    /// Frame tick for cooldowns.
    pub fn tick_cooldowns(&mut self, dt: f32) {
        self.cooldowns.tick(dt);
    }

    /// Frame tick for the glide hold, measured in unscaled time.
    pub fn tick_glide_hold(&mut self, real_dt: f32, movement: &mut MovementState) {
        let Some(hold) = self.glide_hold.as_mut() else {
            return;
        };

        if tick_countdown(&mut hold.remaining, real_dt) {
            debug!("Glide hold timed out");
            self.end_glide_hold(movement);
        }
    }

    pub fn on_use_pressed(
        &mut self,
        movement: &mut MovementState,
        movement_tuning: &MovementTuning,
        tuning: &AbilityTuning,
    ) {
        let used = self.equipped;
        match used {
            AbilityKind::None => return,
            AbilityKind::DoubleJump => {
                if movement.grounded {
                    debug!("Double jump use ignored: grounded");
                    return;
                }
                movement.request_forced_air_jump();
            }
            AbilityKind::Dash => {
                movement.start_dash(movement_tuning.dash_speed, movement_tuning.dash_duration);
            }
            AbilityKind::WallJump => movement.enable_wall_grip(false),
            AbilityKind::Glide => {
                if self.glide_hold.is_none() {
                    self.glide_hold = Some(GlideHold {
                        remaining: tuning.glide_hold_duration,
                        cooldown: tuning.cooldown_for(AbilityKind::Glide),
                    });
                    movement.set_forced_glide(true);
                    debug!("Glide hold started");
                }
                return;
            }
        }

        // One-shot uses pay their cooldown right away, which frees the slot.
        self.start_cooldown(used, tuning.cooldown_for(used), movement);
    }

    pub fn on_use_released(&mut self, movement: &mut MovementState) {
        if self.is_equipped(AbilityKind::Glide) && self.glide_hold.is_some() {
            self.end_glide_hold(movement);
        }
    }

    /// Jumped-event subscription: any jump with wall-jump equipped spends it.
    pub fn on_jumped(
        &mut self,
        _kind: JumpKind,
        movement: &mut MovementState,
        tuning: &AbilityTuning,
    ) {
        if self.is_equipped(AbilityKind::WallJump) {
            let cooldown = tuning.cooldown_for(AbilityKind::WallJump);
            self.start_cooldown(AbilityKind::WallJump, cooldown, movement);
        }
    }

    /// React to the signals raised by one movement tick.
    pub fn on_movement_report(
        &mut self,
        report: &StepReport,
        movement: &mut MovementState,
        tuning: &AbilityTuning,
    ) {
        if let Some(kind) = report.jumped {
            self.on_jumped(kind, movement, tuning);
        }

        if report.double_jump_consumed && self.is_equipped(AbilityKind::DoubleJump) {
            self.force_unequip(movement);
        }

        if report.glide_expired {
            if self.glide_hold.is_some() {
                self.end_glide_hold(movement);
            } else if self.is_equipped(AbilityKind::Glide) {
                self.force_unequip(movement);
            }
        }

        if report.landed && self.is_equipped(AbilityKind::Glide) {
            self.force_unequip(movement);
        }
    }

    /// Respawn baseline: no ability, no cooldowns, no running hold.
    pub fn reset(&mut self, movement: &mut MovementState) {
        if self.glide_hold.take().is_some() {
            movement.set_forced_glide(false);
        }
        self.unequip(movement);
        self.cooldowns.clear();
    }

    fn end_glide_hold(&mut self, movement: &mut MovementState) {
        let Some(hold) = self.glide_hold.take() else {
            return;
        };
        movement.set_forced_glide(false);
        self.start_cooldown(AbilityKind::Glide, hold.cooldown, movement);
    }
}
