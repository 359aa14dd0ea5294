//! Debug tooling for the character controller (dev-tools feature).
//!
//! Features:
//! - F3 dumps the movement and ability state as JSON
//! - Logs jump, slot and respawn events as they happen

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use serde::Serialize;

use crate::abilities::{AbilityEquippedEvent, AbilityKind, AbilityState, Cooldowns};
use crate::movement::{JumpedEvent, MovementState, Player};
use crate::respawn::PlayerRespawnedEvent;

/// Serializable view of one character's controller state
#[derive(Debug, Serialize)]
pub struct ControllerSnapshot {
    pub grounded: bool,
    pub jumps_remaining: u8,
    pub gliding: bool,
    pub dashing: bool,
    pub wall_sliding: bool,
    pub wall_grip_enabled: bool,
    pub velocity: [f32; 2],
    pub equipped: AbilityKind,
    pub cooldowns: Cooldowns,
}

impl ControllerSnapshot {
    pub fn capture(movement: &MovementState, abilities: &AbilityState) -> Self {
        Self {
            grounded: movement.grounded,
            jumps_remaining: movement.jumps_remaining,
            gliding: movement.gliding,
            dashing: movement.dashing,
            wall_sliding: movement.wall_sliding,
            wall_grip_enabled: movement.wall_grip_enabled,
            velocity: movement.velocity.to_array(),
            equipped: abilities.equipped(),
            cooldowns: *abilities.cooldowns(),
        }
    }
}

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                dump_controller_state.run_if(|keyboard: Res<ButtonInput<KeyCode>>| {
                    keyboard.just_pressed(KeyCode::F3)
                }),
                log_controller_events,
            ),
        );
    }
}

fn dump_controller_state(query: Query<(&MovementState, &AbilityState), With<Player>>) {
    for (movement, abilities) in &query {
        let snapshot = ControllerSnapshot::capture(movement, abilities);
        match serde_json::to_string_pretty(&snapshot) {
            Ok(json) => info!("[DEBUG] controller state:\n{}", json),
            Err(e) => warn!("Failed to serialize controller state: {}", e),
        }
    }
}

fn log_controller_events(
    mut jumps: MessageReader<JumpedEvent>,
    mut slot_changes: MessageReader<AbilityEquippedEvent>,
    mut respawns: MessageReader<PlayerRespawnedEvent>,
) {
    for event in jumps.read() {
        debug!("[DEBUG] {:?} jumped: {:?}", event.entity, event.kind);
    }
    for event in slot_changes.read() {
        debug!("[DEBUG] {:?} slot now {:?}", event.entity, event.kind);
    }
    for event in respawns.read() {
        debug!("[DEBUG] {:?} respawned at {}", event.entity, event.position);
    }
}
